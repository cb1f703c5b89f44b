//! CLI components for the scent-work standings tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod settings;
pub mod summary;

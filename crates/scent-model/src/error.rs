use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Level text that does not name a supported competition level.
    #[error("unknown competition level '{value}' (expected A, B, NW1 or NW2)")]
    UnknownLevel { value: String },
    #[error("category '{name}' has no matching prefixes")]
    EmptyCategory { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

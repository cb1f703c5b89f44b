//! Competition configuration file (TOML).
//!
//! ```toml
//! level = "A"
//! time_fraction = "hundredths"
//! file_prefix = "NW1"
//!
//! [keep]
//! searches = 12
//! rounds = 3
//!
//! [[categories]]
//! name = "Indoor"
//! prefixes = ["Inomhus", "Indoor"]
//! ```
//!
//! Every key is optional; command-line flags take precedence.

use std::path::Path;

use serde::Deserialize;

use scent_model::{Category, CategoryTable, Level};

use crate::error::{IngestError, Result};
use crate::time::TimeFraction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeepConfig {
    pub searches: Option<usize>,
    pub rounds: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitionConfig {
    /// Level text, validated by [`CompetitionConfig::level`].
    pub level: Option<String>,
    pub time_fraction: Option<TimeFraction>,
    pub file_prefix: Option<String>,
    #[serde(default)]
    pub keep: KeepConfig,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CompetitionConfig {
    pub fn level(&self) -> Result<Option<Level>> {
        self.level
            .as_deref()
            .map(str::parse::<Level>)
            .transpose()
            .map_err(IngestError::from)
    }

    pub fn category_table(&self) -> Result<CategoryTable> {
        Ok(CategoryTable::new(self.categories.clone())?)
    }
}

pub fn load_config(path: &Path) -> Result<CompetitionConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| IngestError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(contents: &str) -> std::result::Result<CompetitionConfig, toml::de::Error> {
    toml::from_str(contents)
}

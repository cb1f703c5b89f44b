//! Competition settings from the command line and the config file.

use anyhow::{Context, Result, anyhow, bail};

use scent_ingest::{CompetitionConfig, TimeFraction, load_config};
use scent_model::{CategoryTable, Level};

use crate::cli::CommonArgs;

/// Settings for one run. Command-line values win over the config file;
/// level defaults fill whatever is still unset.
#[derive(Debug, Clone)]
pub struct Settings {
    pub level: Level,
    pub time_fraction: TimeFraction,
    pub file_prefix: String,
    pub keep_searches: usize,
    pub keep_rounds: usize,
    pub categories: CategoryTable,
}

impl Settings {
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let config = match &common.config {
            Some(path) => {
                load_config(path).with_context(|| format!("load config {}", path.display()))?
            }
            None => CompetitionConfig::default(),
        };
        Self::from_parts(common.level, &config)
    }

    pub fn from_parts(level: Option<Level>, config: &CompetitionConfig) -> Result<Self> {
        let level = match level {
            Some(level) => level,
            None => config.level()?.ok_or_else(|| {
                anyhow!("no competition level given (use --level or set `level` in the config file)")
            })?,
        };
        let keep_searches = config
            .keep
            .searches
            .unwrap_or_else(|| level.default_keep_searches());
        let keep_rounds = config
            .keep
            .rounds
            .unwrap_or_else(|| level.default_keep_rounds());
        Ok(Self {
            level,
            time_fraction: config.time_fraction.unwrap_or_default(),
            file_prefix: config
                .file_prefix
                .clone()
                .unwrap_or_else(|| level.file_prefix().to_string()),
            keep_searches: check_keep(keep_searches)?,
            keep_rounds: check_keep(keep_rounds)?,
            categories: config.category_table()?,
        })
    }
}

pub fn check_keep(keep: usize) -> Result<usize> {
    if keep == 0 {
        bail!("keep count must be at least 1");
    }
    Ok(keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scent_ingest::parse_config;

    #[test]
    fn level_defaults_fill_the_gaps() {
        let settings = Settings::from_parts(Some(Level::B), &CompetitionConfig::default()).unwrap();
        assert_eq!(settings.keep_searches, 9);
        assert_eq!(settings.keep_rounds, 3);
        assert_eq!(settings.file_prefix, "NW2");
        assert_eq!(settings.time_fraction, TimeFraction::Hundredths);
        assert!(settings.categories.is_empty());
    }

    #[test]
    fn command_line_level_wins() {
        let config = parse_config("level = \"A\"\nfile_prefix = \"Elit\"").unwrap();
        let settings = Settings::from_parts(Some(Level::B), &config).unwrap();
        assert_eq!(settings.level, Level::B);
        assert_eq!(settings.file_prefix, "Elit");
        assert_eq!(settings.keep_searches, 9);
    }

    #[test]
    fn level_is_required() {
        let err = Settings::from_parts(None, &CompetitionConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no competition level"));
    }

    #[test]
    fn zero_keep_is_rejected() {
        let config = parse_config("level = \"A\"\n[keep]\nrounds = 0").unwrap();
        assert!(Settings::from_parts(None, &config).is_err());
    }
}

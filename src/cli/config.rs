//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::service::DEFAULT_PAGE_SIZE;

/// Database file used when neither `--db` nor the config names one.
pub const DEFAULT_DB_FILE: &str = "positions.db";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default database file
    pub db: Option<PathBuf>,

    /// Page size used by `tree --page` when `--limit` is absent
    pub page_size: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if config.page_size == Some(0) {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/orgtree/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("orgtree")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `positions.db` in the current directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Page size for paged reads without an explicit limit.
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_db() {
        let config = Config::default();
        assert!(config.db.is_none());
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn db_path_prefers_cli_arg() {
        let config = Config {
            db: Some(PathBuf::from("/config/org.db")),
            page_size: None,
        };
        let cli_db = PathBuf::from("/cli/org.db");
        assert_eq!(config.db_path(Some(&cli_db)), PathBuf::from("/cli/org.db"));
    }

    #[test]
    fn db_path_falls_back_to_config() {
        let config = Config {
            db: Some(PathBuf::from("/config/org.db")),
            page_size: None,
        };
        assert_eq!(config.db_path(None), PathBuf::from("/config/org.db"));
    }

    #[test]
    fn db_path_falls_back_to_cwd() {
        let config = Config::default();
        assert_eq!(config.db_path(None), PathBuf::from("positions.db"));
    }

    #[test]
    fn parses_toml() {
        let config = Config::parse("db = \"/srv/org.db\"\npage_size = 5\n").unwrap();
        assert_eq!(config.db, Some(PathBuf::from("/srv/org.db")));
        assert_eq!(config.page_size(), 5);
    }

    #[test]
    fn rejects_zero_page_size_and_unknown_keys() {
        assert!(Config::parse("page_size = 0").is_err());
        assert!(Config::parse("dir = \"/notes\"").is_err());
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("orgtree/config.toml"));
    }
}

//! Configuration management for TacPlay Admin.
//!
//! Settings live in a TOML file under the user's config directory. A
//! missing file means defaults; a present file is parsed and validated.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use settings::Settings;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// `<config_dir>/tacplay-admin/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("tacplay-admin").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        debug!(path = %path.display(), ?settings, "Config loaded");
        Ok(Self { settings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_path_structure() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with("tacplay-admin/config.toml"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
theme = "light"
items_per_page = 50
tick_rate_ms = 250
start_screen = "sessions"
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.settings.theme, "light");
        assert_eq!(config.settings.items_per_page, 50);
        assert_eq!(config.settings.tick_rate_ms, 250);
        assert_eq!(config.settings.start_screen, Screen::Sessions);
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("items_per_page = \"many\"");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_screen_is_parse_error() {
        let file = write_config("start_screen = \"inbox\"");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_validation_error() {
        let file = write_config("tick_rate_ms = 5");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_read_error_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}

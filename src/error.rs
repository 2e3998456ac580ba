//! Centralized error types for TacPlay Admin.
//!
//! All error types use `thiserror`. `AppError` adds user-facing messages
//! for anything that reaches the UI or the exit path.

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// A message for display, without technical detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Whether the dashboard cannot continue past this error.
    pub fn is_critical(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Terminal(_))
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix or remove config.toml, or pass --config with another file.")
            }
            AppError::Terminal(_) => Some("Run tacplay-admin in an interactive terminal."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(!app_err.is_critical());
        assert!(app_err.user_message().contains("permissions"));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "items_per_page must be greater than 0".to_string(),
        ));
        assert_eq!(
            err.user_message(),
            "Configuration error: items_per_page must be greater than 0"
        );
        assert!(err.suggested_action().is_some());
    }

    #[test]
    fn test_is_critical_config() {
        assert!(AppError::Config(ConfigError::NoConfigDir).is_critical());
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("not a tty");
        assert!(err.is_critical());
        assert_eq!(err.user_message(), "Terminal error: not a tty");
        assert!(err.suggested_action().unwrap().contains("interactive"));
    }

    #[test]
    fn test_other_error() {
        let err = AppError::other("something went wrong");
        assert!(!err.is_critical());
        assert_eq!(err.user_message(), "something went wrong");
        assert_eq!(err.suggested_action(), None);
    }
}

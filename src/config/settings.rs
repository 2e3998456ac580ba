//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::app::Screen;
use crate::events::TICK_RATE_MS;
use crate::ui::components::DEFAULT_PAGE_SIZE;

/// Allowed range for the event loop tick, in milliseconds.
pub const TICK_RATE_RANGE: std::ops::RangeInclusive<u64> = 10..=1000;

/// Application-wide settings.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The UI theme to use, "dark" or "light".
    pub theme: String,
    /// Rows per page in the top-level lists.
    pub items_per_page: usize,
    /// Event loop tick in milliseconds.
    pub tick_rate_ms: u64,
    /// Screen shown at startup.
    pub start_screen: Screen,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            items_per_page: DEFAULT_PAGE_SIZE,
            tick_rate_ms: TICK_RATE_MS,
            start_screen: Screen::Overview,
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(ConfigError::ValidationError(
                "items_per_page must be greater than 0".to_string(),
            ));
        }
        if !TICK_RATE_RANGE.contains(&self.tick_rate_ms) {
            return Err(ConfigError::ValidationError(format!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_RANGE.start(),
                TICK_RATE_RANGE.end(),
                self.tick_rate_ms
            )));
        }
        Ok(())
    }
}

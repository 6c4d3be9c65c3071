//! Configuration Module
//! Sheet and report locations plus display options, with built-in defaults.

use crate::data::DEFAULT_DISPLAY_LIMIT;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Published CSV export of the scoring sheet.
/// Layout: TEAM,FIRST,SECOND,THIRD,POINTS
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQQwjrHezjqI6w1i7M5mtosuA-HcKMn7WAwY3C3izt4odtcXg1EiYa0aPkNmYgM7uxJa97hZy2c-Wlr/pub?output=csv";

/// Full report opened from the "View Full Report" button.
pub const REPORT_URL: &str =
    "https://docs.google.com/spreadsheets/d/1dJ1PkIXQvKohio091Tthsj6IBPaP_TjTDX-ld326BpI/edit";

/// Upper bound for `request_timeout_secs`; larger values overflow the
/// HTTP client's deadline arithmetic.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Runtime settings. Every field is optional in a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub sheet_url: String,
    pub report_url: String,
    pub display_limit: usize,
    pub cache_bust: bool,
    pub request_timeout_secs: u64,
    pub show_rank: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            sheet_url: SHEET_URL.to_string(),
            report_url: REPORT_URL.to_string(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            cache_bust: true,
            request_timeout_secs: 15,
            show_rank: true,
        }
    }
}

impl LeaderboardConfig {
    /// Parse a JSON document, filling gaps with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display_limit == 0 {
            return Err(ConfigError::Invalid(
                "display_limit must be at least 1".to_string(),
            ));
        }
        if self.sheet_url.trim().is_empty() {
            return Err(ConfigError::Invalid("sheet_url is empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::Invalid(format!(
                "request_timeout_secs must be at most {}",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }
        Ok(())
    }
}

//! Scorecard configuration
//!
//! Read once from the environment at start-up:
//!
//! - `BOWLING_LOG`: log filter directive (falls back to `RUST_LOG`, then `warn`)
//! - `BOWLING_LOG_FORMAT`: `text` (default) or `json`
//! - `BOWLING_PRETTY`: `1` or `true` to pretty-print the report

use std::env;

use crate::logging::DEFAULT_FILTER;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Scorecard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub pretty: bool,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            log_format: LogFormat::Text,
            pretty: false,
        }
    }
}

impl ScorecardConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_filter = lookup("BOWLING_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let log_format = lookup("BOWLING_LOG_FORMAT")
            .and_then(|s| LogFormat::from_str(&s))
            .unwrap_or(defaults.log_format);

        let pretty = lookup("BOWLING_PRETTY")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.pretty);

        Self {
            log_filter,
            log_format,
            pretty,
        }
    }
}

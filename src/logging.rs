//! Structured logging setup for the scorecard binary.
//!
//! Logs go to stderr so stdout carries only the JSON report.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, ScorecardConfig};

/// Filter directive used when none is configured or the configured one is invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Parse a filter directive.
///
/// An unparsable directive yields the default filter along with the parse
/// error so the caller can report it once a subscriber is listening.
pub fn env_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(config: &ScorecardConfig) {
    let (filter, rejected) = env_filter(&config.log_filter);
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Some(err) = rejected {
        tracing::warn!(
            filter = %config.log_filter,
            error = %err,
            fallback = DEFAULT_FILTER,
            "invalid log filter"
        );
    }
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}

//! Idempotent logging for integration test binaries.
//!
//! Directive precedence: `TEST_LOG`, then `RUST_LOG`, then the scorecard default.
//! Output goes through the test writer so it is captured per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt;

use league_bowling::logging::{env_filter, DEFAULT_FILTER};

static INSTALLED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INSTALLED.get_or_init(|| {
        let directive = ["TEST_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|key| std::env::var(key).ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let (filter, rejected) = env_filter(&directive);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();

        if let Some(err) = rejected {
            tracing::warn!(filter = %directive, error = %err, "invalid test log filter");
        }
    });
}

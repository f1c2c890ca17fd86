//! League bowling score engine (workspace facade crate).
//!
//! Re-exports the member crates under `league_bowling::{core,adapter,types}` and
//! carries the ambient pieces the `scorecard` binary needs (configuration and
//! logging setup).

pub mod config;
pub mod logging;

pub use league_bowling_adapter as adapter;
pub use league_bowling_core as core;
pub use league_bowling_types as types;

pub use config::{LogFormat, ScorecardConfig};

//! Adapter module - JSON interchange for score collaborators
//!
//! Scorecard ingestion, manual entry forms, and presentation layers all talk
//! to the engine through the documents defined here. The adapter validates
//! submitted frames, scores each bowler, and returns totals, glyphs, and stats.
//!
//! # Request
//!
//! ```text
//! {"mode":"strict","bowlers":[{"bowlerName":"Sam","frames":[
//!   {"frameNumber":1,"ball1Score":10,"ball2Score":null,"ball3Score":null,"isBall1Split":false},
//!   {"frameNumber":2,"ball1Score":7,"ball2Score":3,"ball3Score":null,"isBall1Split":false}
//! ]}]}
//! ```
//!
//! # Response
//!
//! ```text
//! {"bowlers":[{"bowlerName":"Sam","totals":[20,null,...],"display":[{"ball1":"X","ball2":"","ball3":""},...],
//!   "total":20,"complete":false,"stats":{...}}],"team":{...}}
//! ```
//!
//! # Modes
//!
//! - **strict** (default): the first invalid frame rejects the document
//! - **lenient**: invalid frames are reported on the bowler and skipped
//!
//! # Example
//!
//! ```
//! use league_bowling_adapter::score_match_json;
//!
//! let report = score_match_json(
//!     r#"{"bowlers":[{"bowlerName":"Sam","frames":[{"frameNumber":1,"ball1Score":4,"ball2Score":5}]}]}"#,
//! )
//! .unwrap();
//! assert_eq!(report.bowlers[0].totals[0], Some(9));
//! ```

pub mod protocol;
pub mod scorer;

pub use league_bowling_core as core;
pub use league_bowling_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use scorer::{build_game, parse_match, score_bowler, score_match, score_match_json, AdapterError};

//! Core score engine - pure, deterministic, and testable
//!
//! This crate contains the rules of ten-pin bowling as they apply to scoring a
//! league game. It has **zero dependencies** on persistence, networking, or UI,
//! making it:
//!
//! - **Deterministic**: The same frames always produce identical totals and glyphs
//! - **Stateless**: Every call is a fresh computation; safe to run concurrently per bowler
//! - **Tolerant**: Partial games score as far as they can; the rest reads as undetermined
//!
//! # Module Structure
//!
//! - [`validate`]: Legality rules for a single frame, including 10th-frame fill balls
//! - [`shape`]: Strike / spare / open classification, resolved once per frame
//! - [`scoring`]: Running totals with strike and spare lookahead
//! - [`display`]: Scorecard glyphs (`X`, `/`, `–`, digits)
//! - [`game`]: One bowler's recorded frames
//! - [`stats`]: Counting stats summed from engine output
//!
//! # Game Rules
//!
//! - **Strike**: 10 plus the next two deliveries, across frame boundaries
//! - **Spare**: 10 plus the next delivery
//! - **Open frame**: pins knocked down
//! - **10th frame**: a strike or spare earns a fill ball; the frame scores the sum of its balls
//!
//! # Example
//!
//! ```
//! use league_bowling_core::BowlerGame;
//! use league_bowling_types::RawFrame;
//!
//! let mut game = BowlerGame::new("Robin");
//! game.enter(&RawFrame::new(10), 1).unwrap();
//! game.enter(&RawFrame::new(7).with_ball2(3), 2).unwrap();
//! game.enter(&RawFrame::new(4).with_ball2(2), 3).unwrap();
//!
//! let score = game.score();
//! assert_eq!(score.totals[0], Some(20));
//! assert_eq!(score.totals[1], Some(34));
//! assert_eq!(score.totals[2], Some(40));
//! assert_eq!(score.display[1].to_string(), "7/");
//! ```

pub mod display;
pub mod game;
pub mod scoring;
pub mod shape;
pub mod stats;
pub mod validate;

pub use league_bowling_types as types;

// Re-export commonly used items for convenience
pub use display::frame_glyphs;
pub use game::BowlerGame;
pub use scoring::{compute_game, frame_slots, running_totals, score_slots, FrameSlots, GameScore};
pub use shape::{FrameShape, Shape, TenthFrame};
pub use stats::StatLine;
pub use validate::validate_frame;

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the score engine.
//! All types are plain data with no behaviour beyond formatting, making them
//! usable in any context (validation, scoring, JSON interchange).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS` | 10 | Pins in a full rack |
//! | `FRAMES_PER_GAME` | 10 | Frames in one game |
//! | `TENTH_FRAME` | 10 | The frame with bonus-ball rules |
//!
//! # Frame Records
//!
//! A [`Frame`] is what the engine consumes: one bowler's attempt at one frame,
//! normalized so that exactly the balls that apply are present. A [`RawFrame`] is
//! what collaborators submit before validation; its ball values may be out of range
//! or over-supplied.
//!
//! Field names serialize in camelCase so records match the JSON produced by the
//! scorecard ingestion and entry forms:
//!
//! ```
//! use league_bowling_types::Frame;
//!
//! let json = r#"{"frameNumber":3,"ball1Score":7,"ball2Score":2,"ball3Score":null,"isBall1Split":false}"#;
//! let frame: Frame = serde_json::from_str(json).unwrap();
//! assert_eq!(frame.frame_number, 3);
//! assert_eq!(frame.ball2_score, Some(2));
//! assert!(!frame.is_tenth());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Pins in a full rack
pub const PINS: u8 = 10;

/// Frames in one game
pub const FRAMES_PER_GAME: u8 = 10;

/// The frame with fill-ball rules
pub const TENTH_FRAME: u8 = 10;

/// Highest possible game (twelve strikes)
pub const PERFECT_GAME: u16 = 300;

/// One bowler's attempt at one of the ten frames of a game.
///
/// Produced by the validator; treated as an immutable value everywhere else.
/// Corrections replace the whole frame rather than editing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Position in the game, 1..=10
    pub frame_number: u8,
    /// Pins knocked down on the first delivery
    pub ball1_score: u8,
    /// Second delivery; absent after a strike in frames 1-9 or while in progress
    pub ball2_score: Option<u8>,
    /// Fill ball; only ever present on the 10th frame
    pub ball3_score: Option<u8>,
    /// Cosmetic annotation: the first-ball leave was a split
    #[serde(default)]
    pub is_ball1_split: bool,
}

impl Frame {
    /// Whether this is the 10th frame.
    pub fn is_tenth(&self) -> bool {
        self.frame_number == TENTH_FRAME
    }

    /// Balls actually recorded, in delivery order.
    ///
    /// # Examples
    ///
    /// ```
    /// use league_bowling_types::Frame;
    ///
    /// let frame = Frame {
    ///     frame_number: 10,
    ///     ball1_score: 10,
    ///     ball2_score: Some(7),
    ///     ball3_score: Some(2),
    ///     is_ball1_split: false,
    /// };
    /// assert_eq!(frame.balls().collect::<Vec<_>>(), vec![10, 7, 2]);
    /// ```
    pub fn balls(&self) -> impl Iterator<Item = u8> {
        [Some(self.ball1_score), self.ball2_score, self.ball3_score]
            .into_iter()
            .flatten()
    }
}

/// Ball values for one frame as submitted, before validation.
///
/// Values are kept as any JSON number so that negative, fractional, or
/// oversized balls reach the validator instead of failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    #[serde(rename = "ball1Score")]
    pub ball1: f64,
    #[serde(rename = "ball2Score", default)]
    pub ball2: Option<f64>,
    #[serde(rename = "ball3Score", default)]
    pub ball3: Option<f64>,
    #[serde(default)]
    pub is_ball1_split: bool,
}

impl RawFrame {
    /// Raw frame with only a first ball.
    pub fn new(ball1: impl Into<f64>) -> Self {
        Self {
            ball1: ball1.into(),
            ..Self::default()
        }
    }

    pub fn with_ball2(mut self, ball2: impl Into<f64>) -> Self {
        self.ball2 = Some(ball2.into());
        self
    }

    pub fn with_ball3(mut self, ball3: impl Into<f64>) -> Self {
        self.ball3 = Some(ball3.into());
        self
    }

    pub fn split(mut self) -> Self {
        self.is_ball1_split = true;
        self
    }
}

/// Which delivery within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallSlot {
    First,
    Second,
    Third,
}

impl BallSlot {
    /// 1-based ball number as shown on a scorecard
    pub fn number(&self) -> u8 {
        match self {
            BallSlot::First => 1,
            BallSlot::Second => 2,
            BallSlot::Third => 3,
        }
    }
}

impl fmt::Display for BallSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ball {}", self.number())
    }
}

/// Why a submitted frame was rejected.
///
/// These are data-entry mistakes; they are surfaced to whoever entered the
/// frame and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// A ball score that is not a whole number in 0..=10
    #[error("frame {frame}: {ball} must be 0-10 (got {value})")]
    InvalidBallValue {
        frame: u8,
        ball: BallSlot,
        value: f64,
    },
    /// A ball required at this frame position was not supplied
    #[error("frame {frame}: {ball} is required")]
    MissingBall { frame: u8, ball: BallSlot },
    /// Two balls off the same rack sum to more than ten pins
    #[error("frame {frame}: {first} + {second} pins exceed the ten available")]
    FrameOverflow { frame: u8, first: u8, second: u8 },
    /// Frame position outside 1..=10
    #[error("frame number must be 1-10 (got {0})")]
    InvalidFrameNumber(i32),
}

impl ValidationError {
    /// Stable machine-readable code for interchange documents.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidBallValue { .. } => "INVALID_BALL_VALUE",
            ValidationError::MissingBall { .. } => "MISSING_BALL",
            ValidationError::FrameOverflow { .. } => "FRAME_OVERFLOW",
            ValidationError::InvalidFrameNumber(_) => "INVALID_FRAME_NUMBER",
        }
    }
}

/// Scorecard symbol for a single delivery
///
/// - **Strike**: `X`
/// - **Spare**: `/`
/// - **Miss**: `–` (no pins)
/// - **Pins**: the pin count as a digit
/// - **Blank**: nothing to show (ball not thrown or not applicable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    Strike,
    Spare,
    Miss,
    Pins(u8),
    #[default]
    Blank,
}

impl Glyph {
    pub fn is_blank(&self) -> bool {
        matches!(self, Glyph::Blank)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Strike => f.write_str("X"),
            Glyph::Spare => f.write_str("/"),
            Glyph::Miss => f.write_str("–"),
            Glyph::Pins(n) => write!(f, "{n}"),
            Glyph::Blank => Ok(()),
        }
    }
}

impl Serialize for Glyph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The three ball boxes of one frame on a scorecard.
///
/// Frames 1-9 only ever use the first two boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FrameGlyphs {
    pub ball1: Glyph,
    pub ball2: Glyph,
    pub ball3: Glyph,
}

impl FrameGlyphs {
    pub fn iter(&self) -> impl Iterator<Item = Glyph> {
        [self.ball1, self.ball2, self.ball3].into_iter()
    }
}

impl fmt::Display for FrameGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.ball1, self.ball2, self.ball3)
    }
}

//! One bowler's game
//!
//! Owned by whoever records scores. Frames arrive progressively or all at
//! once, and a correction replaces the recorded frame wholesale. Scoring is a
//! fresh computation over whatever is recorded at the time.

use arrayvec::ArrayVec;

use crate::scoring::{compute_game, GameScore};
use crate::types::{Frame, RawFrame, ValidationError, FRAMES_PER_GAME};
use crate::validate::validate_frame;

const CAPACITY: usize = FRAMES_PER_GAME as usize;

/// Frame sequence plus bowler identity for one game of one match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BowlerGame {
    bowler: String,
    frames: ArrayVec<Frame, CAPACITY>,
}

impl BowlerGame {
    pub fn new(bowler: impl Into<String>) -> Self {
        Self {
            bowler: bowler.into(),
            frames: ArrayVec::new(),
        }
    }

    pub fn bowler(&self) -> &str {
        &self.bowler
    }

    /// Recorded frames ordered by frame number.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, frame_number: u8) -> Option<&Frame> {
        self.frames.iter().find(|f| f.frame_number == frame_number)
    }

    /// Record a validated frame, replacing any frame with the same number.
    pub fn record(&mut self, frame: Frame) -> Result<(), ValidationError> {
        let number = frame.frame_number;
        if !(1..=FRAMES_PER_GAME).contains(&number) {
            return Err(ValidationError::InvalidFrameNumber(i32::from(number)));
        }
        match self
            .frames
            .binary_search_by_key(&number, |f| f.frame_number)
        {
            Ok(pos) => {
                tracing::debug!(bowler = %self.bowler, frame_number = number, "frame replaced");
                self.frames[pos] = frame;
            }
            // Distinct numbers in 1..=10 never exceed capacity.
            Err(pos) => self.frames.insert(pos, frame),
        }
        Ok(())
    }

    /// Validate raw balls and record the result.
    pub fn enter(&mut self, raw: &RawFrame, frame_number: i32) -> Result<&Frame, ValidationError> {
        let frame = validate_frame(raw, frame_number)?;
        self.record(frame)?;
        self.frame(frame.frame_number)
            .ok_or(ValidationError::InvalidFrameNumber(frame_number))
    }

    /// Drop a recorded frame, e.g. before re-entering it from a fresh scan.
    pub fn clear(&mut self, frame_number: u8) -> Option<Frame> {
        let pos = self
            .frames
            .iter()
            .position(|f| f.frame_number == frame_number)?;
        Some(self.frames.remove(pos))
    }

    pub fn score(&self) -> GameScore {
        compute_game(&self.frames)
    }
}

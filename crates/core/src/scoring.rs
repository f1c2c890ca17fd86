//! Scoring module - running totals for one bowler's game
//!
//! A single forward pass over a fixed ten-slot array, peeking one or two
//! frames ahead for strike and spare bonuses. Missing frames and missing balls
//! make a total undetermined (`None`), never an error; once a total is
//! undetermined every later total is too.
//!
//! Bonus deliveries ignore frame boundaries, with one wrinkle: the 10th frame
//! supplies its first two balls together, so a strike in frame 9 followed by a
//! strike in frame 10 takes frame 10's second ball rather than looking for an
//! 11th frame.

use serde::Serialize;

use crate::display::frame_glyphs;
use crate::shape::{FrameShape, Shape};
use crate::types::{Frame, FrameGlyphs, FRAMES_PER_GAME, PINS};

const SLOTS: usize = FRAMES_PER_GAME as usize;

/// Frames of one game placed by frame number; `None` means not yet recorded.
pub type FrameSlots = [Option<Frame>; SLOTS];

/// Engine output for one bowler's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameScore {
    /// Cumulative score through each frame, `None` while undetermined
    pub totals: [Option<u16>; SLOTS],
    /// Scorecard symbols for each frame, blank for frames not recorded
    pub display: [FrameGlyphs; SLOTS],
}

impl GameScore {
    /// Game total to date: the last determinable cumulative total.
    pub fn total(&self) -> Option<u16> {
        self.totals.iter().rev().find_map(|t| *t)
    }

    /// Whether all ten totals are known.
    pub fn is_complete(&self) -> bool {
        self.totals[SLOTS - 1].is_some()
    }

    /// Frames whose running total is known so far.
    pub fn frames_scored(&self) -> usize {
        self.totals.iter().take_while(|t| t.is_some()).count()
    }
}

/// Place frames into slots by frame number.
///
/// Frames numbered outside 1..=10 are skipped; a repeated frame number keeps
/// the later entry.
pub fn frame_slots(frames: &[Frame]) -> FrameSlots {
    let mut slots: FrameSlots = [None; SLOTS];
    for frame in frames {
        let number = frame.frame_number;
        if !(1..=FRAMES_PER_GAME).contains(&number) {
            tracing::warn!(frame_number = number, "ignoring frame outside the game");
            continue;
        }
        let slot = &mut slots[usize::from(number - 1)];
        if slot.is_some() {
            tracing::debug!(frame_number = number, "later frame replaces duplicate");
        }
        *slot = Some(*frame);
    }
    slots
}

/// Compute running totals and glyphs for one bowler's game.
///
/// Accepts any subset of frames in any order. Pure and deterministic: the same
/// frames always produce the same output.
///
/// # Examples
///
/// ```
/// use league_bowling_core::compute_game;
/// use league_bowling_types::Frame;
///
/// let frames: Vec<Frame> = (1..=9)
///     .map(|n| Frame { frame_number: n, ball1_score: 10, ball2_score: None, ball3_score: None, is_ball1_split: false })
///     .chain(std::iter::once(Frame { frame_number: 10, ball1_score: 10, ball2_score: Some(10), ball3_score: Some(10), is_ball1_split: false }))
///     .collect();
///
/// let score = compute_game(&frames);
/// assert_eq!(score.total(), Some(300));
/// assert_eq!(score.totals[0], Some(30));
/// ```
pub fn compute_game(frames: &[Frame]) -> GameScore {
    score_slots(&frame_slots(frames))
}

/// [`compute_game`] over frames already placed by number.
pub fn score_slots(slots: &FrameSlots) -> GameScore {
    let mut score = GameScore {
        totals: running_totals(slots),
        ..GameScore::default()
    };
    for (glyphs, frame) in score.display.iter_mut().zip(slots) {
        if let Some(frame) = frame {
            *glyphs = frame_glyphs(frame);
        }
    }
    score
}

/// Cumulative totals only.
pub fn running_totals(slots: &FrameSlots) -> [Option<u16>; SLOTS] {
    let mut totals = [None; SLOTS];
    let mut cumulative: u16 = 0;

    for (index, total) in totals.iter_mut().enumerate() {
        let Some(score) = frame_score(slots, index) else {
            break;
        };
        cumulative = cumulative.saturating_add(score);
        *total = Some(cumulative);
    }
    totals
}

/// Score of the frame at `index` alone, bonus included.
fn frame_score(slots: &FrameSlots, index: usize) -> Option<u16> {
    let frame = slot(slots, index)?;
    match Shape::of(frame) {
        Shape::Tenth(tenth) => tenth.pins(),
        Shape::Regular(FrameShape::Strike) => {
            let (first, second) = next_two_balls(slots, index)?;
            Some(u16::from(PINS) + u16::from(first) + u16::from(second))
        }
        Shape::Regular(FrameShape::Spare { .. }) => {
            let next = next_ball(slots, index)?;
            Some(u16::from(PINS) + u16::from(next))
        }
        Shape::Regular(shape) => shape.pins(),
    }
}

/// Bounds-checked peek; out of range reads as not recorded.
fn slot(slots: &FrameSlots, index: usize) -> Option<&Frame> {
    slots.get(index).and_then(Option::as_ref)
}

/// First delivery after the frame at `index`.
fn next_ball(slots: &FrameSlots, index: usize) -> Option<u8> {
    slot(slots, index + 1).map(|next| next.ball1_score)
}

/// The two deliveries after the frame at `index`, across frame boundaries.
fn next_two_balls(slots: &FrameSlots, index: usize) -> Option<(u8, u8)> {
    let next = slot(slots, index + 1)?;
    let second = match Shape::of(next) {
        Shape::Tenth(tenth) => tenth.second_ball()?,
        Shape::Regular(FrameShape::Strike) => next_ball(slots, index + 1)?,
        Shape::Regular(_) => next.ball2_score?,
    };
    Some((next.ball1_score, second))
}

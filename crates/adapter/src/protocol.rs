//! Protocol module - JSON documents exchanged with collaborators
//!
//! Field names are camelCase to match the records produced by scorecard
//! ingestion and the entry forms. Requests are deserialized leniently (missing
//! optional balls default to absent); reports are serialize-only.

use serde::{Deserialize, Serialize};

use crate::core::{GameScore, StatLine};
use crate::types::{FrameGlyphs, RawFrame, ValidationError, FRAMES_PER_GAME};

const SLOTS: usize = FRAMES_PER_GAME as usize;

// ============== Collaborator -> Engine ==============

/// How a match document with bad frames is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// The first invalid frame rejects the whole document
    #[default]
    Strict,
    /// Invalid frames are reported per bowler and left out of scoring
    Lenient,
}

/// Scores for every bowler in one game of a match
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDocument {
    #[serde(default)]
    pub mode: ScoringMode,
    pub bowlers: Vec<BowlerEntry>,
}

/// One bowler's submitted frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerEntry {
    pub bowler_name: String,
    #[serde(default)]
    pub frames: Vec<FrameEntry>,
}

/// One submitted frame, position plus raw balls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEntry {
    pub frame_number: i32,
    #[serde(flatten)]
    pub balls: RawFrame,
}

// ============== Engine -> Collaborator ==============

/// A frame that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameError {
    pub frame_number: i32,
    pub code: &'static str,
    pub message: String,
}

impl FrameError {
    pub fn new(frame_number: i32, err: &ValidationError) -> Self {
        Self {
            frame_number,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Scored game for one bowler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerReport {
    pub bowler_name: String,
    /// Cumulative totals; `null` while undetermined
    pub totals: [Option<u16>; SLOTS],
    pub display: [FrameGlyphs; SLOTS],
    /// Game total to date
    pub total: Option<u16>,
    pub complete: bool,
    pub stats: StatLine,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FrameError>,
}

impl BowlerReport {
    pub fn new(bowler_name: String, score: &GameScore, stats: StatLine) -> Self {
        Self {
            bowler_name,
            totals: score.totals,
            display: score.display,
            total: score.total(),
            complete: score.is_complete(),
            stats,
            errors: Vec::new(),
        }
    }
}

/// Scored match: every bowler plus combined stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub bowlers: Vec<BowlerReport>,
    pub team: StatLine,
}

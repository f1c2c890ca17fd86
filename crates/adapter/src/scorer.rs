//! Match scoring
//!
//! Validates every submitted frame through the core validator and scores each
//! bowler independently. Bowlers never affect one another; the only shared
//! output is the summed team stat line.

use thiserror::Error;

use crate::core::{validate_frame, BowlerGame, StatLine};
use crate::protocol::{
    BowlerEntry, BowlerReport, FrameError, MatchDocument, MatchReport, ScoringMode,
};
use crate::types::ValidationError;

/// Adapter failure
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("malformed match document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("bowler {bowler}: {source}")]
    InvalidFrame {
        bowler: String,
        #[source]
        source: ValidationError,
    },
}

/// Parse a match document from JSON.
pub fn parse_match(json: &str) -> Result<MatchDocument, AdapterError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and score a match document in one step.
pub fn score_match_json(json: &str) -> Result<MatchReport, AdapterError> {
    score_match(&parse_match(json)?)
}

/// Score every bowler in a match.
///
/// In [`ScoringMode::Strict`] the first invalid frame fails the call. In
/// [`ScoringMode::Lenient`] invalid frames are listed on the bowler's report
/// and the remaining frames are scored.
pub fn score_match(doc: &MatchDocument) -> Result<MatchReport, AdapterError> {
    let bowlers = doc
        .bowlers
        .iter()
        .map(|entry| score_bowler(entry, doc.mode))
        .collect::<Result<Vec<_>, _>>()?;

    let team: StatLine = bowlers.iter().map(|b| b.stats).sum();
    tracing::debug!(bowlers = bowlers.len(), pins = team.pins, "match scored");

    Ok(MatchReport { bowlers, team })
}

/// Validate and score one bowler's entry.
pub fn score_bowler(entry: &BowlerEntry, mode: ScoringMode) -> Result<BowlerReport, AdapterError> {
    let (game, errors) = build_game(entry, mode)?;
    let score = game.score();
    let stats = StatLine::from_game(game.frames(), &score);

    let mut report = BowlerReport::new(entry.bowler_name.clone(), &score, stats);
    report.errors = errors;
    Ok(report)
}

/// Collect an entry's frames into a [`BowlerGame`].
pub fn build_game(
    entry: &BowlerEntry,
    mode: ScoringMode,
) -> Result<(BowlerGame, Vec<FrameError>), AdapterError> {
    let mut game = BowlerGame::new(entry.bowler_name.clone());
    let mut errors = Vec::new();

    for submitted in &entry.frames {
        let recorded = validate_frame(&submitted.balls, submitted.frame_number)
            .and_then(|frame| game.record(frame));
        let Err(err) = recorded else {
            continue;
        };
        tracing::debug!(
            bowler = %entry.bowler_name,
            frame_number = submitted.frame_number,
            code = err.code(),
            "frame rejected"
        );
        match mode {
            ScoringMode::Strict => {
                return Err(AdapterError::InvalidFrame {
                    bowler: entry.bowler_name.clone(),
                    source: err,
                })
            }
            ScoringMode::Lenient => errors.push(FrameError::new(submitted.frame_number, &err)),
        }
    }
    Ok((game, errors))
}

//! Season statistics
//!
//! Aggregates are built from engine output rather than by re-applying bowling
//! rules: marks are counted from the glyphs, splits from the frames the engine
//! placed, and pins from the game total.
//! Lines add together, so a bowler's season is the sum of their games and a
//! team's season is the sum of its bowlers.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::scoring::{frame_slots, GameScore};
use crate::types::{Frame, Glyph};

/// Counting stats over one or more games
///
/// Serializes in camelCase with the derived `average` alongside the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatLine {
    /// Completed games counted
    pub games: u32,
    /// Sum of completed game totals
    pub pins: u32,
    pub strikes: u32,
    pub spares: u32,
    /// Deliveries that knocked down no pins
    pub gutters: u32,
    /// Frames whose first-ball leave was a split
    pub splits: u32,
    pub high_game: u16,
}

impl StatLine {
    /// Stats for one game.
    ///
    /// Marks count for every recorded frame; pins, games, and high game only
    /// count once the game is complete.
    pub fn from_game(frames: &[Frame], score: &GameScore) -> Self {
        let mut line = StatLine::default();
        for glyph in score.display.iter().flat_map(|g| g.iter()) {
            match glyph {
                Glyph::Strike => line.strikes += 1,
                Glyph::Spare => line.spares += 1,
                Glyph::Miss => line.gutters += 1,
                Glyph::Pins(_) | Glyph::Blank => {}
            }
        }
        line.splits = frame_slots(frames)
            .iter()
            .flatten()
            .filter(|f| f.is_ball1_split)
            .count() as u32;

        if score.is_complete() {
            let total = score.total().unwrap_or_default();
            line.games = 1;
            line.pins = u32::from(total);
            line.high_game = total;
        }
        line
    }

    /// League average: total pins over games, truncated.
    pub fn average(&self) -> Option<u32> {
        self.pins.checked_div(self.games)
    }
}

impl Serialize for StatLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut line = serializer.serialize_struct("StatLine", 8)?;
        line.serialize_field("games", &self.games)?;
        line.serialize_field("pins", &self.pins)?;
        line.serialize_field("strikes", &self.strikes)?;
        line.serialize_field("spares", &self.spares)?;
        line.serialize_field("gutters", &self.gutters)?;
        line.serialize_field("splits", &self.splits)?;
        line.serialize_field("highGame", &self.high_game)?;
        line.serialize_field("average", &self.average())?;
        line.end()
    }
}

impl AddAssign for StatLine {
    fn add_assign(&mut self, rhs: Self) {
        self.games += rhs.games;
        self.pins += rhs.pins;
        self.strikes += rhs.strikes;
        self.spares += rhs.spares;
        self.gutters += rhs.gutters;
        self.splits += rhs.splits;
        self.high_game = self.high_game.max(rhs.high_game);
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for StatLine {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(StatLine::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::scoring::compute_game;

    fn pair(number: u8, b1: u8, b2: u8) -> Frame {
        Frame {
            frame_number: number,
            ball1_score: b1,
            ball2_score: Some(b2),
            ball3_score: None,
            is_ball1_split: false,
        }
    }

    fn stats(frames: &[Frame]) -> StatLine {
        StatLine::from_game(frames, &compute_game(frames))
    }

    #[test]
    fn perfect_game_counts_twelve_strikes() {
        let mut frames: Vec<Frame> = (1..=9)
            .map(|n| Frame {
                ball2_score: None,
                ..pair(n, 10, 0)
            })
            .collect();
        frames.push(Frame {
            ball3_score: Some(10),
            ..pair(10, 10, 10)
        });

        let line = stats(&frames);
        assert_eq!(line.strikes, 12);
        assert_eq!(line.spares, 0);
        assert_eq!(line.pins, 300);
        assert_eq!(line.high_game, 300);
        assert_eq!(line.average(), Some(300));
    }

    #[test]
    fn gutters_and_splits_are_counted() {
        let mut frames: Vec<Frame> = (1..=10).map(|n| pair(n, 0, 0)).collect();
        frames[2] = Frame {
            is_ball1_split: true,
            ..pair(3, 8, 1)
        };
        let line = stats(&frames);
        assert_eq!(line.gutters, 18);
        assert_eq!(line.splits, 1);
        assert_eq!(line.pins, 9);
        assert_eq!(line.games, 1);
    }

    #[test]
    fn splits_follow_engine_placement() {
        let split = |number| Frame {
            is_ball1_split: true,
            ..pair(number, 8, 1)
        };
        let frames = [split(1), split(1), split(12)];
        let line = stats(&frames);
        assert_eq!(line.splits, 1);
        assert_eq!(line.gutters, 0);
    }

    #[test]
    fn incomplete_game_counts_marks_but_not_pins() {
        let frames = [pair(1, 5, 5), pair(2, 3, 0)];
        let line = stats(&frames);
        assert_eq!(line.spares, 1);
        assert_eq!(line.gutters, 1);
        assert_eq!(line.games, 0);
        assert_eq!(line.pins, 0);
        assert_eq!(line.average(), None);
    }

    #[test]
    fn lines_sum_across_games() {
        let low = StatLine {
            games: 1,
            pins: 120,
            high_game: 120,
            ..StatLine::default()
        };
        let high = StatLine {
            games: 1,
            pins: 181,
            strikes: 4,
            high_game: 181,
            ..StatLine::default()
        };
        let season: StatLine = [low, high].into_iter().sum();
        assert_eq!(season.games, 2);
        assert_eq!(season.pins, 301);
        assert_eq!(season.strikes, 4);
        assert_eq!(season.high_game, 181);
        assert_eq!(season.average(), Some(150));
    }

    proptest! {
        #[test]
        fn splits_count_each_placed_frame_once(
            numbers in prop::collection::vec(0u8..=15, 0..30)
        ) {
            let frames: Vec<Frame> = numbers
                .iter()
                .map(|&n| Frame {
                    is_ball1_split: true,
                    ..pair(n, 8, 1)
                })
                .collect();
            let placed: HashSet<u8> = numbers
                .iter()
                .copied()
                .filter(|n| (1..=10).contains(n))
                .collect();
            prop_assert_eq!(stats(&frames).splits as usize, placed.len());
        }
    }
}

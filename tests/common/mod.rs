#![allow(dead_code)]

// tests/common/mod.rs
pub mod gens;
pub mod logging;

use league_bowling::types::Frame;

pub fn strike(number: u8) -> Frame {
    Frame {
        frame_number: number,
        ball1_score: 10,
        ball2_score: None,
        ball3_score: None,
        is_ball1_split: false,
    }
}

pub fn pair(number: u8, b1: u8, b2: u8) -> Frame {
    Frame {
        frame_number: number,
        ball1_score: b1,
        ball2_score: Some(b2),
        ball3_score: None,
        is_ball1_split: false,
    }
}

pub fn tenth(b1: u8, b2: u8, b3: Option<u8>) -> Frame {
    Frame {
        frame_number: 10,
        ball1_score: b1,
        ball2_score: Some(b2),
        ball3_score: b3,
        is_ball1_split: false,
    }
}

/// Nine identical frames plus a 10th.
pub fn game(frame: impl Fn(u8) -> Frame, last: Frame) -> Vec<Frame> {
    (1..=9).map(frame).chain(std::iter::once(last)).collect()
}

pub fn perfect_game() -> Vec<Frame> {
    game(strike, tenth(10, 10, Some(10)))
}

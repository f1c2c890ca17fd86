// Proptest generators for legal frames and games.
// Every strategy builds valid input by construction rather than filtering.
//
// PROPTEST_CASES overrides the case count (default 256).

use proptest::prelude::*;

use league_bowling::types::Frame;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(256)
        .max(1);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn frame(number: u8, b1: u8, b2: Option<u8>, b3: Option<u8>) -> Frame {
    Frame {
        frame_number: number,
        ball1_score: b1,
        ball2_score: b2,
        ball3_score: b3,
        is_ball1_split: false,
    }
}

/// Legal frame in position 1-9.
pub fn regular_frame(number: u8) -> impl Strategy<Value = Frame> {
    prop_oneof![
        Just(frame(number, 10, None, None)),
        (0u8..10)
            .prop_flat_map(|b1| (Just(b1), 0..=10 - b1))
            .prop_map(move |(b1, b2)| frame(number, b1, Some(b2), None)),
    ]
}

/// Legal frame in position 1-9 that is neither a strike nor a spare.
pub fn open_frame(number: u8) -> impl Strategy<Value = Frame> {
    (0u8..10)
        .prop_flat_map(|b1| (Just(b1), 0..10 - b1))
        .prop_map(move |(b1, b2)| frame(number, b1, Some(b2), None))
}

/// Open 10th frame (no fill ball).
pub fn open_tenth() -> impl Strategy<Value = Frame> {
    open_frame(10)
}

/// Legal, complete 10th frame on any of its three paths.
pub fn tenth_frame() -> impl Strategy<Value = Frame> {
    let strike_path = (0u8..=10)
        .prop_flat_map(|b2| {
            let cap = if b2 == 10 { 10 } else { 10 - b2 };
            (Just(b2), 0..=cap)
        })
        .prop_map(|(b2, b3)| frame(10, 10, Some(b2), Some(b3)));
    let spare_path = (0u8..10, 0u8..=10).prop_map(|(b1, b3)| frame(10, b1, Some(10 - b1), Some(b3)));
    prop_oneof![strike_path, spare_path, open_tenth()]
}

/// Any legal frame at the given position.
pub fn legal_frame(number: u8) -> BoxedStrategy<Frame> {
    if number == 10 {
        tenth_frame().boxed()
    } else {
        regular_frame(number).boxed()
    }
}

/// Ten legal frames numbered 1..=10.
pub fn complete_game() -> impl Strategy<Value = Vec<Frame>> {
    let frames: Vec<BoxedStrategy<Frame>> = (1..=10).map(legal_frame).collect();
    frames
}

/// Ten open frames numbered 1..=10.
pub fn open_game() -> impl Strategy<Value = Vec<Frame>> {
    let frames: Vec<BoxedStrategy<Frame>> = (1..=10).map(|n| open_frame(n).boxed()).collect();
    frames
}

//! Integration tests for frame validation

use league_bowling::core::validate_frame;
use league_bowling::types::{BallSlot, RawFrame, ValidationError};

#[test]
fn open_frame_over_ten_pins_overflows() {
    assert_eq!(
        validate_frame(&RawFrame::new(7).with_ball2(5), 3),
        Err(ValidationError::FrameOverflow {
            frame: 3,
            first: 7,
            second: 5
        })
    );
}

#[test]
fn tenth_frame_strike_needs_fill_ball() {
    assert_eq!(
        validate_frame(&RawFrame::new(10).with_ball2(7), 10),
        Err(ValidationError::MissingBall {
            frame: 10,
            ball: BallSlot::Third
        })
    );

    let frame = validate_frame(&RawFrame::new(10).with_ball2(7).with_ball3(2), 10).unwrap();
    assert_eq!(frame.ball1_score, 10);
    assert_eq!(frame.ball2_score, Some(7));
    assert_eq!(frame.ball3_score, Some(2));
}

#[test]
fn gutter_tenth_frame_needs_no_fill_ball() {
    let frame = validate_frame(&RawFrame::new(0).with_ball2(0), 10).unwrap();
    assert_eq!(frame.ball3_score, None);
}

#[test]
fn tenth_frame_requires_second_ball_even_after_strike() {
    assert_eq!(
        validate_frame(&RawFrame::new(10), 10),
        Err(ValidationError::MissingBall {
            frame: 10,
            ball: BallSlot::Second
        })
    );
}

#[test]
fn fill_ball_range_is_checked() {
    assert_eq!(
        validate_frame(&RawFrame::new(3).with_ball2(7).with_ball3(12), 10),
        Err(ValidationError::InvalidBallValue {
            frame: 10,
            ball: BallSlot::Third,
            value: 12.0
        })
    );
}

#[test]
fn range_is_checked_before_overflow() {
    assert!(matches!(
        validate_frame(&RawFrame::new(-3).with_ball2(5), 1),
        Err(ValidationError::InvalidBallValue {
            ball: BallSlot::First,
            ..
        })
    ));
}

#[test]
fn over_supplied_balls_are_cleared_not_rejected() {
    let strike = validate_frame(&RawFrame::new(10).with_ball2(99).with_ball3(99), 4).unwrap();
    assert_eq!(strike.ball2_score, None);
    assert_eq!(strike.ball3_score, None);

    let open_tenth = validate_frame(&RawFrame::new(4).with_ball2(3).with_ball3(99), 10).unwrap();
    assert_eq!(open_tenth.ball3_score, None);
}

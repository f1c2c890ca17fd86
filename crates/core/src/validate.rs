//! Frame validation
//!
//! Turns raw ball values for one frame into a normalized [`Frame`], or rejects
//! them. Balls that do not apply at the frame's position are cleared rather
//! than rejected, since bulk ingestion routinely over-supplies them.
//!
//! | Position | Required balls | Rack caps |
//! |----------|----------------|-----------|
//! | 1-9, strike | ball 1 | - |
//! | 1-9, otherwise | balls 1, 2 | ball1 + ball2 <= 10 |
//! | 10, open | balls 1, 2 | ball1 + ball2 <= 10 |
//! | 10, spare | balls 1, 2, 3 | ball1 + ball2 <= 10 |
//! | 10, strike | balls 1, 2, 3 | ball2 + ball3 <= 10 unless ball2 is a strike |

use crate::types::{BallSlot, Frame, RawFrame, ValidationError, FRAMES_PER_GAME, PINS};

/// Validate one frame's raw balls at the given position.
///
/// # Examples
///
/// ```
/// use league_bowling_core::validate_frame;
/// use league_bowling_types::{RawFrame, ValidationError};
///
/// let frame = validate_frame(&RawFrame::new(10).with_ball2(7).with_ball3(2), 10).unwrap();
/// assert_eq!(frame.ball3_score, Some(2));
///
/// let err = validate_frame(&RawFrame::new(7).with_ball2(5), 3).unwrap_err();
/// assert!(matches!(err, ValidationError::FrameOverflow { frame: 3, .. }));
/// ```
pub fn validate_frame(raw: &RawFrame, frame_number: i32) -> Result<Frame, ValidationError> {
    let number = frame_position(frame_number)?;
    let ball1 = ball_value(number, BallSlot::First, raw.ball1)?;

    let (ball2, ball3) = if number == FRAMES_PER_GAME {
        tenth_frame_balls(number, ball1, raw)?
    } else {
        regular_frame_balls(number, ball1, raw)?
    };

    Ok(Frame {
        frame_number: number,
        ball1_score: ball1,
        ball2_score: ball2,
        ball3_score: ball3,
        is_ball1_split: raw.is_ball1_split,
    })
}

fn frame_position(frame_number: i32) -> Result<u8, ValidationError> {
    u8::try_from(frame_number)
        .ok()
        .filter(|n| (1..=FRAMES_PER_GAME).contains(n))
        .ok_or(ValidationError::InvalidFrameNumber(frame_number))
}

fn ball_value(frame: u8, ball: BallSlot, value: f64) -> Result<u8, ValidationError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(PINS)).contains(&value) {
        return Err(ValidationError::InvalidBallValue { frame, ball, value });
    }
    Ok(value as u8)
}

fn required_ball(frame: u8, ball: BallSlot, value: Option<f64>) -> Result<u8, ValidationError> {
    let value = value.ok_or(ValidationError::MissingBall { frame, ball })?;
    ball_value(frame, ball, value)
}

/// Both balls thrown at the same rack.
fn same_rack(frame: u8, first: u8, second: u8) -> Result<(), ValidationError> {
    if first + second > PINS {
        return Err(ValidationError::FrameOverflow {
            frame,
            first,
            second,
        });
    }
    Ok(())
}

fn regular_frame_balls(
    frame: u8,
    ball1: u8,
    raw: &RawFrame,
) -> Result<(Option<u8>, Option<u8>), ValidationError> {
    if ball1 == PINS {
        return Ok((None, None));
    }
    let ball2 = required_ball(frame, BallSlot::Second, raw.ball2)?;
    same_rack(frame, ball1, ball2)?;
    Ok((Some(ball2), None))
}

fn tenth_frame_balls(
    frame: u8,
    ball1: u8,
    raw: &RawFrame,
) -> Result<(Option<u8>, Option<u8>), ValidationError> {
    let ball2 = required_ball(frame, BallSlot::Second, raw.ball2)?;

    let strike = ball1 == PINS;
    if !strike {
        same_rack(frame, ball1, ball2)?;
    }
    let spare = !strike && ball1 + ball2 == PINS;
    if !strike && !spare {
        return Ok((Some(ball2), None));
    }

    let ball3 = required_ball(frame, BallSlot::Third, raw.ball3)?;
    // After a strike the second ball starts a fresh rack; the fill ball shares
    // it unless the second ball was a strike too.
    if strike && ball2 < PINS {
        same_rack(frame, ball2, ball3)?;
    }
    Ok((Some(ball2), Some(ball3)))
}

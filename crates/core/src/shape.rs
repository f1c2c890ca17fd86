//! Frame shape classification
//!
//! Every scoring and display decision branches on what kind of frame it is
//! looking at. The branch is resolved here, once per frame, so that the
//! running totals and the scorecard glyphs can never disagree about whether a
//! frame was a strike, a spare, or open.

use crate::types::{Frame, PINS};

/// Shape of a frame in positions 1-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameShape {
    /// All ten pins on the first ball
    Strike,
    /// All ten pins across two balls
    Spare { first: u8, second: u8 },
    /// Pins left standing after two balls
    Open { first: u8, second: u8 },
    /// First ball recorded, second not yet thrown
    InProgress { first: u8 },
}

/// Shape of the 10th frame.
///
/// The fill-ball rules depend on how the first two deliveries went, so the
/// 10th frame gets its own tagged variant instead of re-deriving the branch
/// in each consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenthFrame {
    /// Strike on the first ball; the second ball comes off a fresh rack.
    Strike { second: Option<u8>, fill: Option<u8> },
    /// Spare across the first two balls; the fill ball comes off a fresh rack.
    Spare {
        first: u8,
        second: u8,
        fill: Option<u8>,
    },
    /// No mark; two balls and done.
    Open { first: u8, second: u8 },
    /// Only a non-strike first ball recorded so far.
    InProgress { first: u8 },
}

/// Either kind of frame, resolved from a [`Frame`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Regular(FrameShape),
    Tenth(TenthFrame),
}

impl Shape {
    pub fn of(frame: &Frame) -> Self {
        if frame.is_tenth() {
            Shape::Tenth(TenthFrame::of(frame))
        } else {
            Shape::Regular(FrameShape::of(frame))
        }
    }
}

/// Two balls off the same rack that clear it. Summed wide so malformed
/// records cannot overflow.
fn is_spare(first: u8, second: u8) -> bool {
    u16::from(first) + u16::from(second) == u16::from(PINS)
}

impl FrameShape {
    pub fn of(frame: &Frame) -> Self {
        let first = frame.ball1_score;
        if first == PINS {
            return FrameShape::Strike;
        }
        match frame.ball2_score {
            None => FrameShape::InProgress { first },
            Some(second) if is_spare(first, second) => FrameShape::Spare { first, second },
            Some(second) => FrameShape::Open { first, second },
        }
    }

    /// Pins knocked down in this frame alone, if both balls are known.
    pub fn pins(&self) -> Option<u16> {
        match *self {
            FrameShape::Strike | FrameShape::Spare { .. } => Some(u16::from(PINS)),
            FrameShape::Open { first, second } => Some(u16::from(first) + u16::from(second)),
            FrameShape::InProgress { .. } => None,
        }
    }
}

impl TenthFrame {
    pub fn of(frame: &Frame) -> Self {
        let first = frame.ball1_score;
        if first == PINS {
            return TenthFrame::Strike {
                second: frame.ball2_score,
                fill: frame.ball2_score.and(frame.ball3_score),
            };
        }
        match frame.ball2_score {
            None => TenthFrame::InProgress { first },
            Some(second) if is_spare(first, second) => TenthFrame::Spare {
                first,
                second,
                fill: frame.ball3_score,
            },
            Some(second) => TenthFrame::Open { first, second },
        }
    }

    /// Whether the frame has every ball its shape calls for.
    pub fn is_complete(&self) -> bool {
        match self {
            TenthFrame::Strike { fill, .. } | TenthFrame::Spare { fill, .. } => fill.is_some(),
            TenthFrame::Open { .. } => true,
            TenthFrame::InProgress { .. } => false,
        }
    }

    /// Total pins for the frame, once it is complete.
    pub fn pins(&self) -> Option<u16> {
        match *self {
            TenthFrame::Strike {
                second: Some(second),
                fill: Some(fill),
            } => Some(u16::from(PINS) + u16::from(second) + u16::from(fill)),
            TenthFrame::Spare {
                fill: Some(fill), ..
            } => Some(u16::from(PINS) + u16::from(fill)),
            TenthFrame::Open { first, second } => Some(u16::from(first) + u16::from(second)),
            _ => None,
        }
    }

    /// First delivery, always present.
    pub fn first_ball(&self) -> u8 {
        match *self {
            TenthFrame::Strike { .. } => PINS,
            TenthFrame::Spare { first, .. }
            | TenthFrame::Open { first, .. }
            | TenthFrame::InProgress { first } => first,
        }
    }

    /// Second delivery, if thrown.
    ///
    /// Together with [`first_ball`](Self::first_ball) these are the two
    /// deliveries a strike in frame 9 takes as its bonus.
    pub fn second_ball(&self) -> Option<u8> {
        match *self {
            TenthFrame::Strike { second, .. } => second,
            TenthFrame::Spare { second, .. } | TenthFrame::Open { second, .. } => Some(second),
            TenthFrame::InProgress { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(number: u8, b1: u8, b2: Option<u8>, b3: Option<u8>) -> Frame {
        Frame {
            frame_number: number,
            ball1_score: b1,
            ball2_score: b2,
            ball3_score: b3,
            is_ball1_split: false,
        }
    }

    #[test]
    fn regular_frames_classify_by_pins() {
        assert_eq!(FrameShape::of(&frame(1, 10, None, None)), FrameShape::Strike);
        assert_eq!(
            FrameShape::of(&frame(2, 6, Some(4), None)),
            FrameShape::Spare {
                first: 6,
                second: 4
            }
        );
        assert_eq!(
            FrameShape::of(&frame(3, 0, Some(10), None)),
            FrameShape::Spare {
                first: 0,
                second: 10
            }
        );
        assert_eq!(
            FrameShape::of(&frame(4, 3, Some(5), None)),
            FrameShape::Open {
                first: 3,
                second: 5
            }
        );
        assert_eq!(
            FrameShape::of(&frame(5, 8, None, None)),
            FrameShape::InProgress { first: 8 }
        );
    }

    #[test]
    fn tenth_frame_strike_path() {
        let shape = TenthFrame::of(&frame(10, 10, Some(10), Some(10)));
        assert_eq!(shape.pins(), Some(30));
        assert_eq!(shape.second_ball(), Some(10));

        let shape = TenthFrame::of(&frame(10, 10, Some(7), None));
        assert!(!shape.is_complete());
        assert_eq!(shape.pins(), None);
        assert_eq!(shape.first_ball(), 10);
        assert_eq!(shape.second_ball(), Some(7));
    }

    #[test]
    fn tenth_frame_spare_and_open_paths() {
        let spare = TenthFrame::of(&frame(10, 5, Some(5), Some(5)));
        assert_eq!(
            spare,
            TenthFrame::Spare {
                first: 5,
                second: 5,
                fill: Some(5)
            }
        );
        assert_eq!(spare.pins(), Some(15));

        let open = TenthFrame::of(&frame(10, 0, Some(0), None));
        assert!(open.is_complete());
        assert_eq!(open.pins(), Some(0));
    }

    #[test]
    fn tenth_frame_fill_ignored_without_second_ball() {
        let shape = TenthFrame::of(&frame(10, 10, None, Some(4)));
        assert_eq!(
            shape,
            TenthFrame::Strike {
                second: None,
                fill: None
            }
        );
    }
}

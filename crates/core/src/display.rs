//! Scorecard glyphs for a single frame
//!
//! Pure function of one frame. The only cross-ball dependency is within a
//! frame: a second ball is a spare relative to the first, and in the 10th
//! frame the fill ball may be a spare relative to the second.

use crate::shape::{FrameShape, Shape, TenthFrame};
use crate::types::{Frame, FrameGlyphs, Glyph, PINS};

/// Glyph for a ball thrown at a full rack.
pub fn fresh_rack(pins: u8) -> Glyph {
    match pins {
        PINS => Glyph::Strike,
        0 => Glyph::Miss,
        n => Glyph::Pins(n),
    }
}

/// Glyph for a ball thrown at whatever `previous` left standing.
fn second_on_rack(previous: u8, pins: u8) -> Glyph {
    if u16::from(previous) + u16::from(pins) == u16::from(PINS) {
        Glyph::Spare
    } else if pins == 0 {
        Glyph::Miss
    } else {
        Glyph::Pins(pins)
    }
}

/// Scorecard boxes for one frame.
///
/// # Examples
///
/// ```
/// use league_bowling_core::frame_glyphs;
/// use league_bowling_types::Frame;
///
/// let frame = Frame {
///     frame_number: 10,
///     ball1_score: 10,
///     ball2_score: Some(7),
///     ball3_score: Some(3),
///     is_ball1_split: false,
/// };
/// assert_eq!(frame_glyphs(&frame).to_string(), "X7/");
/// ```
pub fn frame_glyphs(frame: &Frame) -> FrameGlyphs {
    match Shape::of(frame) {
        Shape::Regular(shape) => regular_glyphs(shape),
        Shape::Tenth(tenth) => tenth_glyphs(tenth),
    }
}

fn regular_glyphs(shape: FrameShape) -> FrameGlyphs {
    let (ball1, ball2) = match shape {
        FrameShape::Strike => (Glyph::Strike, Glyph::Blank),
        FrameShape::Spare { first, second } | FrameShape::Open { first, second } => {
            (fresh_rack(first), second_on_rack(first, second))
        }
        FrameShape::InProgress { first } => (fresh_rack(first), Glyph::Blank),
    };
    FrameGlyphs {
        ball1,
        ball2,
        ball3: Glyph::Blank,
    }
}

fn glyph(ball: Option<u8>, render: impl FnOnce(u8) -> Glyph) -> Glyph {
    ball.map_or(Glyph::Blank, render)
}

fn tenth_glyphs(tenth: TenthFrame) -> FrameGlyphs {
    match tenth {
        TenthFrame::Strike { second, fill } => FrameGlyphs {
            ball1: Glyph::Strike,
            ball2: glyph(second, fresh_rack),
            ball3: match second {
                // Double: the fill ball gets a fresh rack.
                Some(PINS) => glyph(fill, fresh_rack),
                Some(second) => glyph(fill, |pins| second_on_rack(second, pins)),
                None => Glyph::Blank,
            },
        },
        TenthFrame::Spare {
            first,
            second,
            fill,
        } => FrameGlyphs {
            ball1: fresh_rack(first),
            ball2: second_on_rack(first, second),
            ball3: glyph(fill, fresh_rack),
        },
        TenthFrame::Open { first, second } => FrameGlyphs {
            ball1: fresh_rack(first),
            ball2: second_on_rack(first, second),
            ball3: Glyph::Blank,
        },
        TenthFrame::InProgress { first } => FrameGlyphs {
            ball1: fresh_rack(first),
            ..FrameGlyphs::default()
        },
    }
}

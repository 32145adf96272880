//! Frame sequencing: battery state in, ordered draw operations out.
//!
//! [`render_frame`] is a pure function of the battery state, the style, the
//! cached geometry, the animation counter and the palette. It decides what to
//! draw and in which order; [`widgets::draw_frame`](crate::widgets::draw_frame)
//! turns the result into pixels.
//!
//! # Draw Order
//!
//! | # | Layer | Sweep | Color | Stroke | When |
//! |---|-------|-------|-------|--------|------|
//! | 1 | Background | 360° | background | thin | always |
//! | 2 | Charge | `3.6 * counter` | ring | thin | charging |
//! | 3 | Level | `3.6 * padded level` | ring | full, dashed for dotted style | always |
//! | 4 | Text | - | ring | - | percent style and level < 100 |
//!
//! Every ring starts at 12 o'clock. The level ring is drawn after the charge
//! ring so it stays on top.
//!
//! # Why No Text At 100%
//!
//! A three digit string does not fit inside the ring, so 100% shows the
//! closed ring only.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::colors::Palette;
use crate::config::{FULL_SWEEP_DEGREES, RING_START_DEGREES};
use crate::geometry::GeometryCache;
use crate::state::{BatteryState, StyleMode};
use crate::thresholds::{LEVEL_MAX, is_low_battery, pad_level, sweep_degrees};

/// Maximum number of operations in one frame.
pub const MAX_FRAME_OPS: usize = 4;

/// Percentage text buffer ("99" plus headroom).
pub type LevelText = String<4>;

/// Which ring an arc belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingLayer {
    Background,
    Charge,
    Level,
}

/// Stroke pattern of an arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokePattern {
    Solid,
    /// 3 px on, 2 px off along the ring.
    Dashed,
}

/// One primitive of a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroked arc on the geometry's ring bounds.
    Arc {
        layer: RingLayer,
        start_degrees: f32,
        sweep_degrees: f32,
        stroke_width: f32,
        color: Rgb565,
        pattern: StrokePattern,
    },
    /// Centered text at the geometry's text origin.
    Text {
        text: LevelText,
        x: f32,
        y: f32,
        color: Rgb565,
    },
}

impl DrawOp {
    /// Arc layer, `None` for text.
    #[inline]
    pub const fn layer(&self) -> Option<RingLayer> {
        match self {
            Self::Arc { layer, .. } => Some(*layer),
            Self::Text { .. } => None,
        }
    }
}

/// Ordered draw operations for one frame.
pub type Frame = Vec<DrawOp, MAX_FRAME_OPS>;

/// Build the draw operations for one frame.
///
/// `anim_counter` is only read while charging.
pub fn render_frame(
    state: BatteryState,
    style: StyleMode,
    geometry: &GeometryCache,
    anim_counter: i32,
    palette: &Palette,
) -> Frame {
    let mut frame = Frame::new();

    let ring_color = palette.ring_color(is_low_battery(state.level));
    let pattern = if style.is_dashed() { StrokePattern::Dashed } else { StrokePattern::Solid };
    let padded = pad_level(state.level);

    // Capacity is MAX_FRAME_OPS and at most four ops are pushed
    frame
        .push(DrawOp::Arc {
            layer: RingLayer::Background,
            start_degrees: RING_START_DEGREES,
            sweep_degrees: FULL_SWEEP_DEGREES,
            stroke_width: geometry.thin_stroke_width,
            color: palette.background,
            pattern: StrokePattern::Solid,
        })
        .ok();

    if state.charging {
        frame
            .push(DrawOp::Arc {
                layer: RingLayer::Charge,
                start_degrees: RING_START_DEGREES,
                sweep_degrees: sweep_degrees(anim_counter),
                stroke_width: geometry.thin_stroke_width,
                color: ring_color,
                pattern: StrokePattern::Solid,
            })
            .ok();
    }

    frame
        .push(DrawOp::Arc {
            layer: RingLayer::Level,
            start_degrees: RING_START_DEGREES,
            sweep_degrees: sweep_degrees(i32::from(padded)),
            stroke_width: geometry.stroke_width,
            color: ring_color,
            pattern,
        })
        .ok();

    if style.shows_percentage() && state.level < LEVEL_MAX {
        let mut text = LevelText::new();
        let _ = write!(text, "{}", state.level);
        frame
            .push(DrawOp::Text {
                text,
                x: geometry.text_x,
                y: geometry.text_y,
                color: ring_color,
            })
            .ok();
    }

    frame
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Paints a sequenced frame onto a draw target.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{draw_centered_text, draw_dashed_arc, draw_solid_arc};
use crate::geometry::GeometryCache;
use crate::render::{DrawOp, StrokePattern};

/// Draw every operation of `frame`, in order, using the cached geometry.
pub fn draw_frame<D>(display: &mut D, frame: &[DrawOp], geometry: &GeometryCache) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for op in frame {
        match op {
            DrawOp::Arc {
                start_degrees,
                sweep_degrees,
                stroke_width,
                color,
                pattern: StrokePattern::Solid,
                ..
            } => draw_solid_arc(display, &geometry.bounds, *start_degrees, *sweep_degrees, *stroke_width, *color)?,
            DrawOp::Arc {
                start_degrees,
                sweep_degrees,
                stroke_width,
                color,
                pattern: StrokePattern::Dashed,
                ..
            } => draw_dashed_arc(display, &geometry.bounds, *start_degrees, *sweep_degrees, *stroke_width, *color)?,
            DrawOp::Text { text, x, y, color } => draw_centered_text(display, text, *x, *y, geometry.text_font, *color)?,
        }
    }
    Ok(())
}

//! Drawing: turns sequenced frames into pixels.
//!
//! - [`primitives`]: solid and dashed arcs, centered text, float-to-pixel rounding
//! - [`ring`]: paints a whole [`Frame`](crate::render::Frame) in order
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` for platform
//! independence, and draw target errors are propagated to the caller.

mod primitives;
mod ring;

pub use primitives::{
    arc_circle,
    dash_degrees,
    draw_centered_text,
    draw_dashed_arc,
    draw_solid_arc,
    to_pixel,
    to_stroke,
};
pub use ring::draw_frame;

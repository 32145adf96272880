//! Low-level drawing primitives for the ring.
//!
//! # Float Geometry, Integer Pixels
//!
//! Ring geometry is computed in `f32` so the ratios match the layout rules
//! exactly. `embedded-graphics` works on integer pixels, so values are rounded
//! here, at the last moment, and nowhere else.
//!
//! # Arcs
//!
//! Strokes are centered on the circle inscribed in the ring bounds, which is
//! the `embedded-graphics` default stroke alignment. Angles follow the screen
//! convention: 0° is 3 o'clock and positive sweeps run clockwise.
//!
//! # Dashes
//!
//! `embedded-graphics` has no dash pattern, so a dashed arc is drawn as a run
//! of short arcs. The pattern is measured in pixels along the ring's center
//! line and converted into degrees for the current diameter, starting with a
//! dash at the start angle. The last dash is cut at the end of the sweep.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, PrimitiveStyle};
use embedded_graphics::text::Text;
use micromath::F32;

use crate::config::{DASH_OFF_PX, DASH_ON_PX, FAKE_BOLD_OFFSET_PX, FULL_SWEEP_DEGREES};
use crate::geometry::RingBounds;
use crate::styles::{CENTERED, TextFont};

/// Round a float coordinate to the nearest pixel.
#[inline]
pub fn to_pixel(value: f32) -> i32 { F32(value).round().0 as i32 }

/// Round a stroke width, never below one pixel.
#[inline]
pub fn to_stroke(width: f32) -> u32 { to_pixel(width).max(1) as u32 }

/// Top-left corner and diameter of the arc circle for the ring bounds.
pub fn arc_circle(bounds: &RingBounds) -> (Point, u32) {
    let top_left = Point::new(to_pixel(bounds.left), to_pixel(bounds.top));
    let diameter = to_pixel(bounds.width()).max(0) as u32;
    (top_left, diameter)
}

/// Draw a solid stroked arc. Sweeps of zero or less draw nothing.
pub fn draw_solid_arc<D>(
    display: &mut D,
    bounds: &RingBounds,
    start_degrees: f32,
    sweep_degrees: f32,
    stroke_width: f32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if sweep_degrees <= 0.0 {
        return Ok(());
    }
    let (top_left, diameter) = arc_circle(bounds);
    if diameter == 0 {
        return Ok(());
    }

    Arc::new(top_left, diameter, start_degrees.deg(), sweep_degrees.deg())
        .into_styled(PrimitiveStyle::with_stroke(color, to_stroke(stroke_width)))
        .draw(display)
}

/// Dash and gap length in degrees for a ring of the given center-line diameter.
///
/// Returns `None` when the ring is too small to carry a pattern.
pub fn dash_degrees(diameter: f32) -> Option<(f32, f32)> {
    let circumference = PI * diameter;
    if circumference <= 0.0 {
        return None;
    }
    let degrees_per_px = FULL_SWEEP_DEGREES / circumference;
    Some((DASH_ON_PX * degrees_per_px, DASH_OFF_PX * degrees_per_px))
}

/// Draw a dashed stroked arc (3 px on, 2 px off).
pub fn draw_dashed_arc<D>(
    display: &mut D,
    bounds: &RingBounds,
    start_degrees: f32,
    sweep_degrees: f32,
    stroke_width: f32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some((on, off)) = dash_degrees(bounds.width()) else {
        return Ok(());
    };

    let mut offset = 0.0;
    while offset < sweep_degrees {
        let dash = on.min(sweep_degrees - offset);
        draw_solid_arc(display, bounds, start_degrees + offset, dash, stroke_width, color)?;
        offset += on + off;
    }
    Ok(())
}

/// Draw centered bold text with its baseline at `(x, y)`.
///
/// Mono fonts have no bold face, so the text is drawn twice with the second
/// pass shifted right by [`FAKE_BOLD_OFFSET_PX`].
pub fn draw_centered_text<D>(
    display: &mut D,
    text: &str,
    x: f32,
    y: f32,
    font: TextFont,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = Point::new(to_pixel(x), to_pixel(y));
    let style = font.style(color);
    Text::with_text_style(text, origin, style, CENTERED).draw(display)?;
    Text::with_text_style(text, origin + Point::new(FAKE_BOLD_OFFSET_PX, 0), style, CENTERED).draw(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::HOLO_BLUE_DARK;
    use crate::geometry::compute_geometry;

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    fn painted(display: &MockDisplay<Rgb565>) -> usize {
        let mut count = 0;
        for y in 0..64 {
            for x in 0..64 {
                if display.get_pixel(Point::new(x, y)).is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_to_pixel_rounds() {
        assert_eq!(to_pixel(2.4), 2);
        assert_eq!(to_pixel(2.6), 3);
        assert_eq!(to_pixel(0.0), 0);
    }

    #[test]
    fn test_to_stroke_minimum_one() {
        assert_eq!(to_stroke(0.2), 1, "Hairline strokes still paint one pixel");
        assert_eq!(to_stroke(4.0), 4);
    }

    #[test]
    fn test_arc_circle_from_bounds() {
        let geo = compute_geometry(28, 0);
        let (top_left, diameter) = arc_circle(&geo.bounds);
        assert_eq!(top_left, Point::new(2, 2));
        assert_eq!(diameter, 24);
    }

    #[test]
    fn test_zero_sweep_draws_nothing() {
        let geo = compute_geometry(28, 0);
        let mut display = mock();
        draw_solid_arc(&mut display, &geo.bounds, 270.0, 0.0, 4.0, HOLO_BLUE_DARK).unwrap();
        assert_eq!(painted(&display), 0);
    }

    #[test]
    fn test_full_ring_paints_pixels() {
        let geo = compute_geometry(28, 0);
        let mut display = mock();
        draw_solid_arc(&mut display, &geo.bounds, 270.0, 360.0, 4.0, HOLO_BLUE_DARK).unwrap();
        assert!(painted(&display) > 0, "A full ring should paint pixels");
        // Ring center stays empty
        assert_eq!(display.get_pixel(Point::new(14, 14)), None);
    }

    #[test]
    fn test_dash_degrees_scale_with_diameter() {
        let (small_on, small_off) = dash_degrees(10.0).unwrap();
        let (large_on, large_off) = dash_degrees(40.0).unwrap();
        assert!(small_on > large_on, "Same pixel dash spans more degrees on a small ring");
        assert!((small_on / small_off - 1.5).abs() < 1e-4, "Dash to gap ratio is 3:2");
        assert!((large_on / large_off - 1.5).abs() < 1e-4);
        assert!(dash_degrees(0.0).is_none());
    }

    #[test]
    fn test_dashed_ring_paints_less_than_solid() {
        let geo = compute_geometry(42, 0);
        let mut solid = mock();
        let mut dashed = mock();
        draw_solid_arc(&mut solid, &geo.bounds, 270.0, 360.0, geo.stroke_width, HOLO_BLUE_DARK).unwrap();
        draw_dashed_arc(&mut dashed, &geo.bounds, 270.0, 360.0, geo.stroke_width, HOLO_BLUE_DARK).unwrap();
        assert!(painted(&dashed) > 0, "Dashes should paint");
        assert!(painted(&dashed) < painted(&solid), "Gaps should leave pixels unpainted");
    }

    #[test]
    fn test_centered_text_paints() {
        let geo = compute_geometry(40, 0);
        let mut display = mock();
        draw_centered_text(&mut display, "42", geo.text_x, geo.text_y, geo.text_font, HOLO_BLUE_DARK).unwrap();
        assert!(painted(&display) > 0);
    }

    #[test]
    fn test_centered_text_is_bold() {
        let geo = compute_geometry(40, 0);
        let origin = Point::new(to_pixel(geo.text_x), to_pixel(geo.text_y));

        let mut regular = mock();
        Text::with_text_style("42", origin, geo.text_font.style(HOLO_BLUE_DARK), CENTERED)
            .draw(&mut regular)
            .unwrap();
        let mut bold = mock();
        draw_centered_text(&mut bold, "42", geo.text_x, geo.text_y, geo.text_font, HOLO_BLUE_DARK).unwrap();

        assert!(painted(&bold) > painted(&regular), "Bold text should thicken the strokes");
        for y in 0..64 {
            for x in 0..63 {
                if regular.get_pixel(Point::new(x, y)).is_some() {
                    assert!(bold.get_pixel(Point::new(x, y)).is_some(), "Regular pass missing at ({x}, {y})");
                    assert!(bold.get_pixel(Point::new(x + 1, y)).is_some(), "Shifted pass missing at ({x}, {y})");
                }
            }
        }
    }
}

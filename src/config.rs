//! Timing and geometry configuration constants.
//!
//! All ratios are relative to the ring diameter, which itself comes from the
//! reference status icon. Nothing here depends on screen density.

use core::time::Duration;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between charge animation ticks.
pub const ANIMATION_TICK: Duration = Duration::from_millis(750);

/// One-shot redraw delay after the ring is attached.
pub const SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Percentage points the charge ring advances per tick.
pub const ANIMATION_STEP: i32 = 6;

const _: () = assert!(SETTLE_DELAY.as_millis() < ANIMATION_TICK.as_millis());

// =============================================================================
// Geometry Configuration
// =============================================================================

/// Level ring stroke width is the diameter divided by this.
pub const STROKE_DIVISOR: f32 = 7.0;

/// Background and charge rings are thinner than the level ring by this factor.
pub const THIN_STROKE_DIVISOR: f32 = 3.5;

/// Text size is the diameter divided by this.
pub const TEXT_SIZE_DIVISOR: f32 = 2.0;

/// Vertical rounding correction added to the text baseline.
pub const TEXT_BASELINE_CORRECTION: f32 = 1.0;

/// Widest string the percentage text can take ("99").
pub const TEXT_SAMPLE: &str = "99";

/// Horizontal offset of the second text pass that fakes a bold face.
pub const FAKE_BOLD_OFFSET_PX: i32 = 1;

// =============================================================================
// Angles
// =============================================================================

/// Rings start at 12 o'clock (0 degrees is 3 o'clock, clockwise positive).
pub const RING_START_DEGREES: f32 = 270.0;

/// Degrees per percentage point (360 / 100).
pub const DEGREES_PER_PERCENT: f32 = 3.6;

/// A full ring.
pub const FULL_SWEEP_DEGREES: f32 = 360.0;

// =============================================================================
// Dash Pattern
// =============================================================================

/// Painted length of one dash, in pixels along the ring.
pub const DASH_ON_PX: f32 = 3.0;

/// Gap after each dash, in pixels along the ring.
pub const DASH_OFF_PX: f32 = 2.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_per_percent_covers_full_ring() {
        assert!((DEGREES_PER_PERCENT * 100.0 - FULL_SWEEP_DEGREES).abs() < f32::EPSILON * 1000.0);
    }

    #[test]
    fn test_animation_timing() {
        assert_eq!(ANIMATION_TICK.as_millis(), 750);
        assert_eq!(SETTLE_DELAY.as_millis(), 250);
        assert_eq!(ANIMATION_STEP, 6);
    }

    #[test]
    fn test_text_sample_is_two_digits() {
        assert_eq!(TEXT_SAMPLE.len(), 2, "Text is measured on the widest two-digit value");
    }
}

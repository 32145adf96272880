//! Color constants and the ring palette.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The defaults below are the platform status bar colors (holo blue, holo red
//! and the darker gray) converted from their 8-bit channels by dropping the
//! low bits.
//!
//! # Theming
//!
//! Nothing in the renderer references the constants directly. Every color
//! comes from a [`Palette`], so a host with a different theme passes its own.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Simulator background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Simulator status text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Status Bar Colors (application-specific)
// =============================================================================

/// Holo blue dark (#0099CC). Level ring, charge ring and text while the battery is healthy.
/// RGB565: (0, 38, 25).
pub const HOLO_BLUE_DARK: Rgb565 = Rgb565::new(0, 38, 25);

/// Holo red light (#FF4444). Used once the level drops to the low-battery warning.
/// RGB565: (31, 17, 8).
pub const HOLO_RED_LIGHT: Rgb565 = Rgb565::new(31, 17, 8);

/// Darker gray (#AAAAAA). Thin background ring behind the level.
/// RGB565: (21, 42, 21).
pub const DARKER_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

// =============================================================================
// Palette
// =============================================================================

/// Colors used by one ring instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Level ring color above the warning threshold.
    pub normal: Rgb565,
    /// Level ring color at or below the warning threshold.
    pub warning: Rgb565,
    /// Full background ring.
    pub background: Rgb565,
}

impl Palette {
    /// Palette matching the stock status bar.
    pub const fn new() -> Self {
        Self {
            normal: HOLO_BLUE_DARK,
            warning: HOLO_RED_LIGHT,
            background: DARKER_GRAY,
        }
    }

    /// Ring color for a battery level.
    ///
    /// The charge ring and the percentage text follow the same color.
    #[inline]
    pub const fn ring_color(&self, low_battery: bool) -> Rgb565 {
        if low_battery { self.warning } else { self.normal }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::new() }
}

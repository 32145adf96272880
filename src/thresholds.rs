//! Battery level thresholds.
//!
//! All thresholds are compile-time constants with validation assertions,
//! shared by the color selection, the sweep padding and the text rule.
//!
//! # Compile-Time Validation
//!
//! Each threshold group includes `const` assertions that verify ordering at
//! compile time. A misconfigured threshold fails the build.

use crate::config::DEGREES_PER_PERCENT;

// =============================================================================
// Level Range
// =============================================================================

/// Lowest level the platform reports.
pub const LEVEL_MIN: u8 = 0;

/// Highest level the platform reports.
pub const LEVEL_MAX: u8 = 100;

// =============================================================================
// Warning Threshold
// =============================================================================

/// Levels at or below this use the warning color.
/// Same level at which the platform shows its low battery warning.
pub const LOW_BATTERY_LEVEL: u8 = 14;

// =============================================================================
// Sweep Padding
// =============================================================================

/// From this level on the level ring is drawn closed.
/// Many devices never report exactly 100 and a hairline gap looks broken.
pub const FULL_PAD_LEVEL: u8 = 97;

const _: () = assert!(LEVEL_MIN < LOW_BATTERY_LEVEL);
const _: () = assert!(LOW_BATTERY_LEVEL < FULL_PAD_LEVEL);
const _: () = assert!(FULL_PAD_LEVEL <= LEVEL_MAX);

/// Check if a level should be drawn in the warning color.
#[inline]
pub const fn is_low_battery(level: u8) -> bool { level <= LOW_BATTERY_LEVEL }

/// Level the level ring displays, padded to a full ring near the top.
#[inline]
pub const fn pad_level(level: u8) -> u8 {
    if level >= FULL_PAD_LEVEL { LEVEL_MAX } else { level }
}

/// Convert a percentage into an arc sweep in degrees.
///
/// Takes `i32` because the charge animation counter may run past 100.
#[inline]
pub fn sweep_degrees(percent: i32) -> f32 { DEGREES_PER_PERCENT * percent as f32 }

/// Clamp a raw platform level into `LEVEL_MIN..=LEVEL_MAX`.
#[inline]
pub fn clamp_level(raw: i32) -> u8 { raw.clamp(i32::from(LEVEL_MIN), i32::from(LEVEL_MAX)) as u8 }

// =============================================================================
// Unit Tests
// =============================================================================

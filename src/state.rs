//! Host-pushed inputs: battery state and style mode.
//!
//! Both are owned by the host and handed to the ring by value. The ring
//! never mutates them, it only keeps the latest copy.
//!
//! # Level Clamping
//!
//! The platform reports levels as plain integers. Anything outside `0..=100`
//! is clamped with a warning rather than rejected: one bad broadcast must not
//! take the indicator down.

use log::warn;

use crate::thresholds::clamp_level;

// =============================================================================
// Battery State
// =============================================================================

/// Latest battery report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatteryState {
    /// Charge level in percent, always within `0..=100`.
    pub level: u8,
    /// Whether a charger is plugged in.
    pub charging: bool,
}

impl BatteryState {
    /// Build a state from a raw platform report, clamping the level.
    pub fn new(raw_level: i32, charging: bool) -> Self {
        let level = clamp_level(raw_level);
        if i32::from(level) != raw_level {
            warn!("battery level {raw_level} out of range, clamped to {level}");
        }
        Self { level, charging }
    }
}

// =============================================================================
// Style Mode
// =============================================================================

/// User-selected indicator style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleMode {
    /// Indicator hidden.
    #[default]
    Off,
    /// Solid ring, no text.
    Circle,
    /// Solid ring with the level as text.
    CirclePercent,
    /// Dashed level ring with the level as text.
    DottedCirclePercent,
}

impl StyleMode {
    /// Setting value for [`StyleMode::Circle`].
    pub const SETTING_CIRCLE: i32 = 2;
    /// Setting value for [`StyleMode::CirclePercent`].
    pub const SETTING_CIRCLE_PERCENT: i32 = 3;
    /// Setting value for [`StyleMode::DottedCirclePercent`].
    pub const SETTING_DOTTED_CIRCLE_PERCENT: i32 = 5;

    /// Map the platform's battery icon setting onto a ring style.
    ///
    /// Every other value selects a non-ring battery icon, so the ring is off.
    pub const fn from_setting(value: i32) -> Self {
        match value {
            Self::SETTING_CIRCLE => Self::Circle,
            Self::SETTING_CIRCLE_PERCENT => Self::CirclePercent,
            Self::SETTING_DOTTED_CIRCLE_PERCENT => Self::DottedCirclePercent,
            _ => Self::Off,
        }
    }

    /// Whether the ring is shown at all.
    #[inline]
    pub const fn is_visible(self) -> bool { !matches!(self, Self::Off) }

    /// Whether the level is drawn as text inside the ring.
    #[inline]
    pub const fn shows_percentage(self) -> bool { matches!(self, Self::CirclePercent | Self::DottedCirclePercent) }

    /// Whether the level ring uses the dash pattern.
    #[inline]
    pub const fn is_dashed(self) -> bool { matches!(self, Self::DottedCirclePercent) }

    /// Cycle through the styles (simulator key binding).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Circle,
            Self::Circle => Self::CirclePercent,
            Self::CirclePercent => Self::DottedCirclePercent,
            Self::DottedCirclePercent => Self::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_state_in_range() {
        let state = BatteryState::new(42, true);
        assert_eq!(state.level, 42);
        assert!(state.charging);
    }

    #[test]
    fn test_battery_state_clamps_out_of_range() {
        assert_eq!(BatteryState::new(-3, false).level, 0, "Negative level should clamp to 0");
        assert_eq!(BatteryState::new(140, false).level, 100, "Level above 100 should clamp to 100");
    }

    #[test]
    fn test_battery_state_default() {
        let state = BatteryState::default();
        assert_eq!(state.level, 0);
        assert!(!state.charging);
    }

    #[test]
    fn test_style_default_is_off() {
        assert_eq!(StyleMode::default(), StyleMode::Off);
        assert!(!StyleMode::Off.is_visible());
    }

    #[test]
    fn test_style_flags() {
        assert!(StyleMode::Circle.is_visible());
        assert!(!StyleMode::Circle.shows_percentage());
        assert!(!StyleMode::Circle.is_dashed());

        assert!(StyleMode::CirclePercent.shows_percentage());
        assert!(!StyleMode::CirclePercent.is_dashed());

        assert!(StyleMode::DottedCirclePercent.shows_percentage());
        assert!(StyleMode::DottedCirclePercent.is_dashed());
    }

    #[test]
    fn test_style_from_setting() {
        assert_eq!(StyleMode::from_setting(0), StyleMode::Off);
        assert_eq!(StyleMode::from_setting(1), StyleMode::Off);
        assert_eq!(StyleMode::from_setting(2), StyleMode::Circle);
        assert_eq!(StyleMode::from_setting(3), StyleMode::CirclePercent);
        assert_eq!(StyleMode::from_setting(4), StyleMode::Off);
        assert_eq!(StyleMode::from_setting(5), StyleMode::DottedCirclePercent);
        assert_eq!(StyleMode::from_setting(-1), StyleMode::Off);
    }

    #[test]
    fn test_style_next_cycle() {
        let mut style = StyleMode::Off;
        for _ in 0..4 {
            style = style.next();
        }
        assert_eq!(style, StyleMode::Off, "Four steps should cycle back to Off");
    }
}

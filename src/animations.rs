//! Charge animation state machine.
//!
//! While a charger is plugged in, a thin secondary ring sweeps from the
//! current level towards full, one step per tick, and starts over from the
//! current level once it runs past 100%.
//!
//! # States
//!
//! | State | Counter | Entered when |
//! |-------|---------|--------------|
//! | `Idle` | `-1` | not charging |
//! | `Animating` | `0..=100+` | charging |
//!
//! # Transitions (evaluated once per frame)
//!
//! | From | Charging | Counter | To | Counter after | Timer |
//! |------|----------|---------|----|---------------|-------|
//! | Idle | no | -1 | Idle | -1 | none |
//! | Animating | no | any | Idle | -1 | cancel |
//! | any | yes | `< 0` or `> 100` | Animating | level | reschedule |
//! | Animating | yes | `0..=100` | Animating | `+ 6` | reschedule |
//!
//! The counter restarts at the current level rather than 0, which keeps the
//! pulse anchored to the real charge. It is not clamped, so a frame may show
//! the charge ring a little past the full circle before it restarts.

use log::debug;

use crate::config::ANIMATION_STEP;
use crate::state::BatteryState;
use crate::thresholds::LEVEL_MAX;

// =============================================================================
// Animation Phase
// =============================================================================

/// Coarse state of the charge animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Not charging, no ticks scheduled.
    Idle,
    /// Charging, one tick pending.
    Animating,
}

/// What the caller must do with the animation timer after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Leave the timer alone.
    None,
    /// Cancel the pending tick.
    Cancel,
    /// Cancel any pending tick and schedule the next one.
    Reschedule,
}

// =============================================================================
// Charge Animation
// =============================================================================

/// Counter driving the charge ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChargeAnimation {
    counter: i32,
}

impl ChargeAnimation {
    /// Counter value while idle.
    pub const IDLE: i32 = -1;

    /// Create an idle animation.
    pub const fn new() -> Self { Self { counter: Self::IDLE } }

    /// Current counter, `-1` when idle.
    #[inline]
    pub const fn counter(&self) -> i32 { self.counter }

    /// Current phase derived from the counter.
    #[inline]
    pub const fn phase(&self) -> AnimationPhase {
        if self.counter == Self::IDLE { AnimationPhase::Idle } else { AnimationPhase::Animating }
    }

    /// Advance the animation for one frame.
    ///
    /// Returns the timer action the caller must apply. Only the transition
    /// into idle cancels; staying idle schedules nothing.
    pub fn step(&mut self, state: BatteryState) -> TimerAction {
        if !state.charging {
            if self.counter == Self::IDLE {
                return TimerAction::None;
            }
            debug!("charge animation stopped at {}", self.counter);
            self.counter = Self::IDLE;
            return TimerAction::Cancel;
        }

        if self.counter > i32::from(LEVEL_MAX) || self.counter < 0 {
            if self.counter == Self::IDLE {
                debug!("charge animation started at {}%", state.level);
            }
            self.counter = i32::from(state.level);
        } else {
            self.counter += ANIMATION_STEP;
        }

        TimerAction::Reschedule
    }

    /// Drop back to idle without producing a timer action.
    ///
    /// Used on detach, where all timers are cancelled anyway.
    #[inline]
    pub const fn reset(&mut self) { self.counter = Self::IDLE; }
}

impl Default for ChargeAnimation {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CHARGING_40: BatteryState = BatteryState { level: 40, charging: true };
    const DISCHARGING_40: BatteryState = BatteryState { level: 40, charging: false };

    #[test]
    fn test_new_is_idle() {
        let anim = ChargeAnimation::new();
        assert_eq!(anim.counter(), -1);
        assert_eq!(anim.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn test_idle_stays_idle_without_timer() {
        let mut anim = ChargeAnimation::new();
        for _ in 0..5 {
            assert_eq!(anim.step(DISCHARGING_40), TimerAction::None, "Idle must never schedule");
        }
        assert_eq!(anim.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn test_start_charging_begins_at_level() {
        let mut anim = ChargeAnimation::new();
        assert_eq!(anim.step(CHARGING_40), TimerAction::Reschedule);
        assert_eq!(anim.counter(), 40, "Animation should start at the current level");
        assert_eq!(anim.phase(), AnimationPhase::Animating);
    }

    #[test]
    fn test_tick_advances_by_six() {
        let mut anim = ChargeAnimation::new();
        anim.step(CHARGING_40);
        anim.step(CHARGING_40);
        assert_eq!(anim.counter(), 46);
        anim.step(CHARGING_40);
        assert_eq!(anim.counter(), 52);
    }

    #[test]
    fn test_every_charging_step_reschedules() {
        let mut anim = ChargeAnimation::new();
        for _ in 0..30 {
            assert_eq!(anim.step(CHARGING_40), TimerAction::Reschedule);
        }
    }

    #[test]
    fn test_overflow_resets_to_level_not_zero() {
        let mut anim = ChargeAnimation::new();
        let state = BatteryState { level: 90, charging: true };
        anim.step(state); // 90
        anim.step(state); // 96
        anim.step(state); // 102
        assert_eq!(anim.counter(), 102, "Counter is not clamped at 100");
        anim.step(state);
        assert_eq!(anim.counter(), 90, "Past 100 the pulse restarts at the level");
    }

    #[test]
    fn test_exactly_100_still_advances() {
        let mut anim = ChargeAnimation { counter: 100 };
        anim.step(BatteryState { level: 70, charging: true });
        assert_eq!(anim.counter(), 106, "100 is in range and advances");
    }

    #[test]
    fn test_reset_follows_current_level() {
        let mut anim = ChargeAnimation { counter: 101 };
        anim.step(BatteryState { level: 55, charging: true });
        assert_eq!(anim.counter(), 55, "Restart uses the level at restart time");
    }

    #[test]
    fn test_stop_charging_cancels_once() {
        let mut anim = ChargeAnimation::new();
        anim.step(CHARGING_40);
        anim.step(CHARGING_40);

        assert_eq!(anim.step(DISCHARGING_40), TimerAction::Cancel);
        assert_eq!(anim.counter(), -1);
        assert_eq!(anim.step(DISCHARGING_40), TimerAction::None, "Second idle step is a no-op");
    }

    #[test]
    fn test_full_pulse_cycle() {
        let mut anim = ChargeAnimation::new();
        let state = BatteryState { level: 70, charging: true };
        let mut seen = heapless::Vec::<i32, 16>::new();
        for _ in 0..9 {
            anim.step(state);
            seen.push(anim.counter()).ok();
        }
        assert_eq!(&seen[..], &[70, 76, 82, 88, 94, 100, 106, 70, 76]);
    }

    #[test]
    fn test_reset_to_idle() {
        let mut anim = ChargeAnimation::new();
        anim.step(CHARGING_40);
        anim.reset();
        assert_eq!(anim.phase(), AnimationPhase::Idle);
        assert_eq!(anim.step(CHARGING_40), TimerAction::Reschedule);
        assert_eq!(anim.counter(), 40);
    }
}

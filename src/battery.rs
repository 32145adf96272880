//! The battery ring component.
//!
//! [`CircleBattery`] owns everything that changes over the ring's life: the
//! latest battery report, the style, the attach state, the derived diameter,
//! the geometry cache and the charge animation. The host pushes changes in
//! and asks for frames; the ring never registers listeners of its own.
//!
//! # Host Interface
//!
//! | Host event | Call | Effect |
//! |------------|------|--------|
//! | Battery broadcast | [`on_battery_state_changed`](CircleBattery::on_battery_state_changed) | clamp and store |
//! | Settings change | [`on_style_changed`](CircleBattery::on_style_changed) | store style |
//! | Attach / detach | [`on_visibility_change`](CircleBattery::on_visibility_change) | arm settle tick / cancel timers, drop geometry |
//! | Timer expiry | [`on_timer`](CircleBattery::on_timer) | redraw if active |
//! | Layout pass | [`measure`](CircleBattery::measure) | derive diameter |
//! | Draw pass | [`draw`](CircleBattery::draw) | step animation, paint frame |
//!
//! Each `on_*` call that can change the picture returns whether the host
//! should schedule a redraw. A redraw is only useful while the ring is
//! *active*: its style is not [`StyleMode::Off`] and it is attached.
//!
//! # Geometry Lifecycle
//!
//! The diameter is read from the reference icon lazily, on the first measure
//! or draw after creation or detach. The geometry cache is rebuilt whenever
//! the diameter or the padding differs from what it was computed for, so a
//! frame is never drawn with stale geometry.

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use log::debug;

use crate::animations::{AnimationPhase, ChargeAnimation, TimerAction};
use crate::colors::Palette;
use crate::config::{ANIMATION_TICK, SETTLE_DELAY};
use crate::error::{ConfigError, DrawError};
use crate::geometry::{GeometryCache, IconSource, compute_geometry, derive_circle_size, measured_size};
use crate::render::{Frame, render_frame};
use crate::state::{BatteryState, StyleMode};
use crate::timer::{Scheduler, TimerToken};
use crate::widgets::draw_frame;

/// Battery ring state owned by one status bar slot.
#[derive(Debug)]
pub struct CircleBattery {
    battery: BatteryState,
    style: StyleMode,
    palette: Palette,
    attached: bool,
    padding_left: u32,
    /// Diameter from the reference icon, 0 until derived.
    circle_size: u32,
    geometry: Option<GeometryCache>,
    animation: ChargeAnimation,
}

impl CircleBattery {
    /// Create a detached ring with the stock palette.
    pub const fn new(style: StyleMode) -> Self { Self::with_palette(style, Palette::new()) }

    /// Create a detached ring with a custom palette.
    pub const fn with_palette(style: StyleMode, palette: Palette) -> Self {
        Self {
            battery: BatteryState {
                level: 0,
                charging: false,
            },
            style,
            palette,
            attached: false,
            padding_left: 0,
            circle_size: 0,
            geometry: None,
            animation: ChargeAnimation::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Latest battery report.
    #[inline]
    pub const fn battery(&self) -> BatteryState { self.battery }

    /// Current style.
    #[inline]
    pub const fn style(&self) -> StyleMode { self.style }

    /// Whether the host should show the ring at all.
    #[inline]
    pub const fn visible(&self) -> bool { self.style.is_visible() }

    /// Whether the ring is attached to the status bar.
    #[inline]
    pub const fn attached(&self) -> bool { self.attached }

    /// Visible and attached: frames and redraws are meaningful.
    #[inline]
    pub const fn is_active(&self) -> bool { self.style.is_visible() && self.attached }

    /// Whether the host should keep delivering battery updates.
    #[inline]
    pub const fn is_listening(&self) -> bool { self.is_active() }

    /// Charge animation counter, `-1` when idle.
    #[inline]
    pub const fn animation_counter(&self) -> i32 { self.animation.counter() }

    /// Charge animation phase.
    #[inline]
    pub const fn animation_phase(&self) -> AnimationPhase { self.animation.phase() }

    /// Cached geometry, `None` until the next frame computes it.
    #[inline]
    pub const fn geometry(&self) -> Option<&GeometryCache> { self.geometry.as_ref() }

    // -------------------------------------------------------------------------
    // Host Events
    // -------------------------------------------------------------------------

    /// Store a battery report. Returns whether a redraw is wanted.
    pub fn on_battery_state_changed(&mut self, raw_level: i32, charging: bool) -> bool {
        self.battery = BatteryState::new(raw_level, charging);
        self.is_active()
    }

    /// Store a new style. Returns whether a redraw is wanted.
    pub fn on_style_changed(&mut self, style: StyleMode) -> bool {
        if style != self.style {
            debug!("battery ring style {:?} -> {style:?}", self.style);
        }
        self.style = style;
        self.is_active()
    }

    /// Change the palette. Returns whether a redraw is wanted.
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        self.palette = palette;
        self.is_active()
    }

    /// Change the left padding; the geometry follows on the next frame.
    pub fn set_padding_left(&mut self, padding_left: u32) {
        if padding_left != self.padding_left {
            self.padding_left = padding_left;
            self.geometry = None;
        }
    }

    /// Attach to or detach from the status bar.
    ///
    /// Attaching arms the one-shot settle tick. Detaching cancels every
    /// timer and forgets the diameter and geometry so both are re-derived on
    /// the next attach. Repeated calls with the same value do nothing.
    pub fn on_visibility_change<S: Scheduler>(&mut self, attached: bool, mut scheduler: S) {
        if attached == self.attached {
            return;
        }
        self.attached = attached;

        if attached {
            debug!("battery ring attached");
            scheduler.schedule(TimerToken::Settle, SETTLE_DELAY);
        } else {
            debug!("battery ring detached");
            scheduler.cancel(TimerToken::Settle);
            scheduler.cancel(TimerToken::Animation);
            self.animation.reset();
            self.geometry = None;
            self.circle_size = 0;
        }
    }

    /// A timer fired. Returns whether a redraw is wanted.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        let redraw = self.is_active();
        if !redraw {
            debug!("timer {token:?} ignored, ring inactive");
        }
        redraw
    }

    // -------------------------------------------------------------------------
    // Layout & Drawing
    // -------------------------------------------------------------------------

    /// Size the host should reserve: ring diameter plus left padding.
    pub fn measure<I: IconSource + ?Sized>(&mut self, icon: &mut I) -> Result<Size, ConfigError> {
        let circle_size = self.ensure_circle_size(icon)?;
        Ok(measured_size(circle_size, self.padding_left))
    }

    /// Step the animation and sequence the next frame.
    ///
    /// Returns `None` while the ring is inactive; nothing is stepped or
    /// scheduled then.
    pub fn prepare_frame<I, S>(&mut self, icon: &mut I, scheduler: S) -> Result<Option<Frame>, ConfigError>
    where
        I: IconSource + ?Sized,
        S: Scheduler,
    {
        if !self.is_active() {
            return Ok(None);
        }
        let geometry = self.ensure_geometry(icon)?;
        self.step_animation(scheduler);

        Ok(Some(render_frame(
            self.battery,
            self.style,
            &geometry,
            self.animation.counter(),
            &self.palette,
        )))
    }

    /// Step the animation and paint the next frame onto `display`.
    ///
    /// Does nothing while the ring is inactive.
    pub fn draw<D, I, S>(&mut self, display: &mut D, icon: &mut I, scheduler: S) -> Result<(), DrawError<D::Error>>
    where
        D: DrawTarget<Color = Rgb565>,
        I: IconSource + ?Sized,
        S: Scheduler,
    {
        let Some(frame) = self.prepare_frame(icon, scheduler)? else {
            return Ok(());
        };
        // prepare_frame only returns a frame after filling the cache
        let Some(geometry) = self.geometry else {
            return Ok(());
        };
        draw_frame(display, &frame, &geometry).map_err(DrawError::Target)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn ensure_circle_size<I: IconSource + ?Sized>(&mut self, icon: &mut I) -> Result<u32, ConfigError> {
        if self.circle_size == 0 {
            self.circle_size = derive_circle_size(icon)?;
        }
        Ok(self.circle_size)
    }

    fn ensure_geometry<I: IconSource + ?Sized>(&mut self, icon: &mut I) -> Result<GeometryCache, ConfigError> {
        let circle_size = self.ensure_circle_size(icon)?;
        match self.geometry {
            Some(geometry) if geometry.matches(circle_size, self.padding_left) => Ok(geometry),
            _ => {
                let geometry = compute_geometry(circle_size, self.padding_left);
                debug!(
                    "battery ring geometry: size {} px, stroke {:.2} px, text {:?}",
                    circle_size, geometry.stroke_width, geometry.text_font
                );
                self.geometry = Some(geometry);
                Ok(geometry)
            }
        }
    }

    fn step_animation<S: Scheduler>(&mut self, mut scheduler: S) {
        match self.animation.step(self.battery) {
            TimerAction::None => {}
            TimerAction::Cancel => scheduler.cancel(TimerToken::Animation),
            TimerAction::Reschedule => {
                scheduler.cancel(TimerToken::Animation);
                scheduler.schedule(TimerToken::Animation, ANIMATION_TICK);
            }
        }
    }
}

impl Default for CircleBattery {
    fn default() -> Self { Self::new(StyleMode::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

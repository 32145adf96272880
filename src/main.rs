// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Desktop simulator for the circular battery indicator.
//!
//! Renders one ring inside a small status bar strip next to the reference
//! icon it takes its height from. The simulator plays the host: it pushes
//! battery reports and style changes into the ring, attaches and detaches
//! it, and drives its timers from the wall clock through a [`TimerQueue`].
//!
//! Set `RUST_LOG=debug` to watch timers, geometry and animation transitions.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up` / `Down` | Battery level ±5 % |
//! | `C` | Toggle charger |
//! | `S` | Cycle style (off, ring, ring + percent, dotted ring + percent) |
//! | `D` | Detach / attach the ring |
//! | `P` | Cycle left padding |
//! | `Q` | Quit |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

use std::thread;
use std::time::{Duration, Instant};

use circle_battery::colors::BLACK;
use circle_battery::{CircleBattery, DrawError, StyleMode, TimerQueue};
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};

// =============================================================================
// Simulator Configuration
// =============================================================================

/// Status bar strip size in pixels.
const BAR_WIDTH: u32 = 96;
const BAR_HEIGHT: u32 = 32;

/// Window pixels per display pixel.
const WINDOW_SCALE: u32 = 6;

/// Target frame time (~50 FPS).
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Level change per key press.
const LEVEL_STEP: i32 = 5;

/// Paddings cycled by `P`.
const PADDINGS: [u32; 3] = [0, 4, 8];

/// Reference icon width in pixels (two bytes per row).
const ICON_WIDTH: u32 = 16;

const _: () = assert!(BAR_HEIGHT >= ICON_DATA.len() as u32 / 2);

/// 16x28 battery glyph, the stand-in for the platform's status icon.
#[rustfmt::skip]
const ICON_DATA: [u8; 56] = [
    0b0000_0111, 0b1110_0000,
    0b0000_0111, 0b1110_0000,
    0b0011_1111, 0b1111_1100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_0000, 0b0000_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_1111, 0b1111_0100,
    0b0010_0000, 0b0000_0100,
    0b0011_1111, 0b1111_1100,
    0b0000_0000, 0b0000_0000,
];

fn main() {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(BAR_WIDTH, BAR_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Circle Battery", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Host State
    // ==========================================================================

    let mut icon = Some(ImageRaw::<BinaryColor>::new(&ICON_DATA, ICON_WIDTH));
    let mut timers = TimerQueue::new();
    let mut ring = CircleBattery::new(StyleMode::CirclePercent);

    let mut level = 50;
    let mut charging = false;
    let mut attached = true;
    let mut padding_index = 0;

    ring.on_battery_state_changed(level, charging);
    ring.on_visibility_change(attached, &mut timers);
    let mut needs_redraw = true;

    let started = Instant::now();
    info!("simulator started, level {level}%, style {:?}", ring.style());

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Up => {
                            level = (level + LEVEL_STEP).min(100);
                            needs_redraw |= ring.on_battery_state_changed(level, charging);
                        }
                        Keycode::Down => {
                            level = (level - LEVEL_STEP).max(0);
                            needs_redraw |= ring.on_battery_state_changed(level, charging);
                        }
                        Keycode::C => {
                            charging = !charging;
                            info!("charger {}", if charging { "connected" } else { "disconnected" });
                            needs_redraw |= ring.on_battery_state_changed(level, charging);
                        }
                        Keycode::S => {
                            let style = ring.style().next();
                            info!("style {style:?}");
                            // A hidden ring leaves stale pixels behind
                            needs_redraw = true;
                            ring.on_style_changed(style);
                        }
                        Keycode::D => {
                            attached = !attached;
                            info!("ring {}", if attached { "attached" } else { "detached" });
                            ring.on_visibility_change(attached, &mut timers);
                            needs_redraw = true;
                        }
                        Keycode::P => {
                            padding_index = (padding_index + 1) % PADDINGS.len();
                            ring.set_padding_left(PADDINGS[padding_index]);
                            needs_redraw = true;
                        }
                        Keycode::Q => return,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Deliver due timers
        for token in timers.advance(started.elapsed()) {
            needs_redraw |= ring.on_timer(token);
        }

        if needs_redraw {
            display.clear(BLACK).ok();

            // Reference icon to the right of the ring
            if let Some(raw) = &icon {
                let x = (BAR_WIDTH - ICON_WIDTH - 4) as i32;
                Image::new(raw, Point::new(x, 2))
                    .draw(&mut display.color_converted::<BinaryColor>())
                    .ok();
            }

            match ring.draw(&mut display, &mut icon, &mut timers) {
                Ok(()) => {}
                Err(DrawError::Config(err)) => {
                    error!("cannot draw battery ring: {err}");
                    return;
                }
                Err(DrawError::Target(err)) => match err {},
            }

            needs_redraw = false;
        }
        window.update(&display);

        // Sleep to maintain target frame rate
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}


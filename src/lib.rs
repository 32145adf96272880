//! Circular battery indicator for a status bar.
//!
//! Draws the charge level as a ring around an optional percentage label,
//! with a pulsing inner ring while charging. The crate holds no platform
//! code: the host pushes battery and style changes in, supplies a scheduler
//! for delayed redraws, and hands over any `DrawTarget<Color = Rgb565>`.
//!
//! - [`battery`]: the [`CircleBattery`] component and its host interface
//! - [`state`]: battery report and style mode
//! - [`geometry`]: diameter derivation and the geometry cache
//! - [`render`]: frame sequencing into draw operations
//! - [`animations`]: charge pulse state machine
//! - [`timer`]: scheduler trait and an explicit-clock timer queue
//! - [`widgets`]: painting frames with `embedded-graphics`
//! - [`colors`], [`config`], [`styles`], [`thresholds`]: constants
//! - [`error`]: configuration and draw errors
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! cargo run --features simulator
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the library itself is
//! `no_std` and runs on embedded targets.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod battery;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod state;
pub mod styles;
pub mod thresholds;
pub mod timer;
pub mod widgets;

// Re-export commonly used items
pub use battery::CircleBattery;
pub use colors::Palette;
pub use error::{ConfigError, DrawError};
pub use geometry::IconSource;
pub use state::{BatteryState, StyleMode};
pub use timer::{Scheduler, TimerQueue, TimerToken};

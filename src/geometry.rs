//! Ring sizing and size-dependent geometry.
//!
//! # Size Derivation
//!
//! The ring diameter is the height of a reference status icon (the full
//! wifi signal icon on the stock status bar). Reusing an existing icon keeps
//! the ring the same height as its neighbours on every screen density
//! without any density-specific constants. If the icon is missing there is
//! no sensible fallback, so this is a [`ConfigError`].
//!
//! # Geometry Cache
//!
//! Everything derived from the diameter is computed once into a
//! [`GeometryCache`] and reused for every frame until the diameter or the
//! left padding changes:
//!
//! | Value | Formula |
//! |-------|---------|
//! | Level stroke | `size / 7` |
//! | Thin stroke | `stroke / 3.5` |
//! | Bounds | inset by `stroke / 2`, shifted right by the padding |
//! | Text size | `size / 2` |
//! | Text x | `size / 2 + padding` (centered) |
//! | Text y | `size / 2 + ink_height("99") / 2 - stroke / 2 + 1` |
//!
//! The trailing `+ 1` on the text baseline is an empirical rounding
//! correction and is kept as is.

use embedded_graphics::geometry::{OriginDimensions, Size};
use log::{debug, error};

use crate::config::{STROKE_DIVISOR, TEXT_BASELINE_CORRECTION, TEXT_SIZE_DIVISOR, THIN_STROKE_DIVISOR};
use crate::error::ConfigError;
use crate::styles::TextFont;

// =============================================================================
// Reference Icon
// =============================================================================

/// Source of the reference status icon the ring takes its height from.
pub trait IconSource {
    /// Load the icon and report its dimensions, `None` if it is unavailable.
    fn reference_icon_size(&mut self) -> Option<Size>;
}

/// A loaded image, or `None` when the asset could not be loaded.
impl<T: OriginDimensions> IconSource for Option<T> {
    fn reference_icon_size(&mut self) -> Option<Size> { self.as_ref().map(OriginDimensions::size) }
}

/// Dimensions known up front.
impl IconSource for Size {
    fn reference_icon_size(&mut self) -> Option<Size> { Some(*self) }
}

/// Derive the ring diameter from the reference icon height.
pub fn derive_circle_size<I: IconSource + ?Sized>(icon: &mut I) -> Result<u32, ConfigError> {
    let Some(size) = icon.reference_icon_size() else {
        error!("reference icon missing, cannot size battery ring");
        return Err(ConfigError::MissingReferenceIcon);
    };
    if size.height == 0 {
        error!("reference icon has zero height, cannot size battery ring");
        return Err(ConfigError::EmptyReferenceIcon);
    }
    debug!("battery ring diameter {} px", size.height);
    Ok(size.height)
}

/// Size the host should reserve: the ring plus its left padding.
#[inline]
pub const fn measured_size(circle_size: u32, padding_left: u32) -> Size {
    Size::new(circle_size + padding_left, circle_size)
}

// =============================================================================
// Geometry Cache
// =============================================================================

/// Rectangle the ring strokes are centered on, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RingBounds {
    #[inline]
    pub fn width(&self) -> f32 { self.right - self.left }

    #[inline]
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Size-dependent drawing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryCache {
    /// Ring diameter the cache was computed for.
    pub circle_size: u32,
    /// Left padding the cache was computed for.
    pub padding_left: u32,
    /// Level ring stroke width.
    pub stroke_width: f32,
    /// Background and charge ring stroke width.
    pub thin_stroke_width: f32,
    /// Rectangle the strokes are centered on.
    pub bounds: RingBounds,
    /// Requested text size in pixels.
    pub text_size: f32,
    /// Font chosen for `text_size`.
    pub text_font: TextFont,
    /// Horizontal text origin (center of the text).
    pub text_x: f32,
    /// Text baseline.
    pub text_y: f32,
}

impl GeometryCache {
    /// Whether this cache is still valid for the given inputs.
    #[inline]
    pub const fn matches(&self, circle_size: u32, padding_left: u32) -> bool {
        self.circle_size == circle_size && self.padding_left == padding_left
    }
}

/// Compute the geometry for a diameter and left padding.
///
/// Pure and idempotent. `circle_size` must be non-zero; callers derive it
/// through [`derive_circle_size`] first.
pub fn compute_geometry(circle_size: u32, padding_left: u32) -> GeometryCache {
    debug_assert!(circle_size > 0, "geometry needs a non-zero ring diameter");

    let size = circle_size as f32;
    let pad = padding_left as f32;

    let stroke_width = size / STROKE_DIVISOR;
    let half_stroke = stroke_width / 2.0;

    let bounds = RingBounds {
        left: pad + half_stroke,
        top: half_stroke,
        right: size - half_stroke + pad,
        bottom: size - half_stroke,
    };

    let text_size = size / TEXT_SIZE_DIVISOR;
    let text_font = TextFont::for_text_size(text_size);
    let numeral_height = text_font.numeral_height() as f32;

    GeometryCache {
        circle_size,
        padding_left,
        stroke_width,
        thin_stroke_width: stroke_width / THIN_STROKE_DIVISOR,
        bounds,
        text_size,
        text_font,
        text_x: size / 2.0 + pad,
        text_y: size / 2.0 + numeral_height / 2.0 - half_stroke + TEXT_BASELINE_CORRECTION,
    }
}

//! Text styles and font selection for the percentage text.
//!
//! The percentage is drawn with `ProFont`. Mono fonts come in fixed sizes, so
//! the requested text size (half the ring diameter) is mapped onto the
//! largest `ProFont` that still fits. The choice is stored in the geometry as a
//! [`TextFont`] so the geometry stays `Copy` and comparable.
//!
//! Text alignment is a `const` style shared by every ring, like the other
//! pre-computed styles: only the color varies per frame.
//!
//! # Ink Height
//!
//! Mono fonts only describe their glyph cell, which is taller than the
//! digits. The numeral height used to place the text is measured by
//! rasterizing [`TEXT_SAMPLE`] into an [`InkRows`] target that records the
//! first and last row actually painted.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::{BinaryColor, Rgb565},
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::config::TEXT_SAMPLE;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text on the alphabetic baseline. The text origin is the
/// horizontal center of the ring and the computed baseline.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Alphabetic)
    .build();

// =============================================================================
// Font Selection
// =============================================================================

/// Available percentage fonts, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFont {
    ProFont7,
    ProFont9,
    ProFont10,
    ProFont12,
    ProFont14,
    ProFont18,
    ProFont24,
}

impl TextFont {
    /// All fonts in ascending size.
    pub const ALL: [Self; 7] = [
        Self::ProFont7,
        Self::ProFont9,
        Self::ProFont10,
        Self::ProFont12,
        Self::ProFont14,
        Self::ProFont18,
        Self::ProFont24,
    ];

    /// Largest font whose glyph cell is no taller than `text_size` pixels.
    /// Falls back to the smallest font for tiny rings.
    pub fn for_text_size(text_size: f32) -> Self {
        let mut chosen = Self::ProFont7;
        for font in Self::ALL {
            if font.font().character_size.height as f32 <= text_size {
                chosen = font;
            }
        }
        chosen
    }

    /// The underlying mono font.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::ProFont7 => &PROFONT_7_POINT,
            Self::ProFont9 => &PROFONT_9_POINT,
            Self::ProFont10 => &PROFONT_10_POINT,
            Self::ProFont12 => &PROFONT_12_POINT,
            Self::ProFont14 => &PROFONT_14_POINT,
            Self::ProFont18 => &PROFONT_18_POINT,
            Self::ProFont24 => &PROFONT_24_POINT,
        }
    }

    /// Painted height of the widest percentage text ("99"), in pixels.
    #[inline]
    pub fn numeral_height(self) -> u32 { self.ink_height(TEXT_SAMPLE) }

    /// Painted height of `text` in this font, from its topmost to its
    /// lowest lit row. Falls back to the baseline offset for blank text.
    pub fn ink_height(self, text: &str) -> u32 {
        let mut rows = InkRows::new();
        let style = MonoTextStyle::new(self.font(), BinaryColor::On);
        let Ok(_) = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut rows);
        rows.height().unwrap_or(self.font().baseline)
    }

    /// Text style in the given color.
    #[inline]
    pub fn style(self, color: Rgb565) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(self.font(), color) }
}

// =============================================================================
// Ink Measurement
// =============================================================================

/// Draw target that only remembers which rows received a lit pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InkRows {
    span: Option<(i32, i32)>,
}

impl InkRows {
    pub const fn new() -> Self { Self { span: None } }

    /// Rows from the first to the last lit one, `None` if nothing was lit.
    pub const fn height(&self) -> Option<u32> {
        match self.span {
            Some((top, bottom)) => Some((bottom - top + 1) as u32),
            None => None,
        }
    }
}

impl OriginDimensions for InkRows {
    // Large enough for any ProFont glyph row
    fn size(&self) -> Size { Size::new(u32::from(u16::MAX), u32::from(u16::MAX)) }
}

impl DrawTarget for InkRows {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_off() {
                continue;
            }
            self.span = Some(match self.span {
                Some((top, bottom)) => (top.min(point.y), bottom.max(point.y)),
                None => (point.y, point.y),
            });
        }
        Ok(())
    }
}

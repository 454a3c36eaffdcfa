// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Font rasterization seam.
//!
//! The normalizer only talks to [`GlyphRasterizer`]; [`FontdueRasterizer`]
//! implements it on top of `fontdue`. Coordinates follow the usual bitmap
//! convention: y grows downwards and glyph offsets are relative to the
//! baseline origin.

use fontdue::{Font, FontSettings};

/// Unscaled vertical metrics in font units. `descent` is negative below the
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

/// 8-bit coverage bitmap of one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    pub coverage: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Left edge relative to the pen position.
    pub x_offset: i32,
    /// Top edge relative to the baseline, negative above it.
    pub y_offset: i32,
}

pub trait GlyphRasterizer {
    /// Scale factor mapping font units to pixels for an em of `size` pixels.
    fn scale_for_size(&self, size: f32) -> f32;

    /// Unscaled ascent, descent and line gap. `None` when the font carries
    /// no horizontal metrics.
    fn v_metrics(&self) -> Option<VMetrics>;

    fn glyph_mask(&self, codepoint: u32, scale: f32) -> GlyphMask;

    /// Horizontal advance in whole pixels.
    fn advance_width(&self, codepoint: u32, scale: f32) -> i32;
}

pub struct FontdueRasterizer {
    font: Font,
}

impl FontdueRasterizer {
    /// Parses TrueType / OpenType data; `None` if the bytes are not a font.
    pub fn from_bytes(data: Vec<u8>) -> Option<Self> {
        Font::from_bytes(data, FontSettings::default())
            .ok()
            .map(|font| Self { font })
    }

    /// Codepoints that are not scalar values fall back to the missing glyph.
    fn glyph_index(&self, codepoint: u32) -> u16 {
        char::from_u32(codepoint).map_or(0, |c| self.font.lookup_glyph_index(c))
    }

    fn px(&self, scale: f32) -> f32 {
        scale * self.font.units_per_em()
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn scale_for_size(&self, size: f32) -> f32 {
        size / self.font.units_per_em()
    }

    fn v_metrics(&self) -> Option<VMetrics> {
        self.font
            .horizontal_line_metrics(self.font.units_per_em())
            .map(|m| VMetrics {
                ascent: m.ascent,
                descent: m.descent,
                line_gap: m.line_gap,
            })
    }

    fn glyph_mask(&self, codepoint: u32, scale: f32) -> GlyphMask {
        let (metrics, coverage) = self
            .font
            .rasterize_indexed(self.glyph_index(codepoint), self.px(scale));
        // fontdue measures ymin upwards from the baseline to the bottom edge
        GlyphMask {
            coverage,
            width: metrics.width as u32,
            height: metrics.height as u32,
            x_offset: metrics.xmin,
            y_offset: -(metrics.ymin + metrics.height as i32),
        }
    }

    fn advance_width(&self, codepoint: u32, scale: f32) -> i32 {
        let metrics = self
            .font
            .metrics_indexed(self.glyph_index(codepoint), self.px(scale));
        metrics.advance_width as i32
    }
}

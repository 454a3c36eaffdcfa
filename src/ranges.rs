// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Glyph range lists: decimal `lo-hi` pairs separated by commas, such as
//! `32-127, 1024-1103`.

use crate::error::{AtlasError, Result};

pub const DEFAULT_GLYPH_RANGES: &str = "32-127";

/// Largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Inclusive codepoint interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    pub lo: u32,
    pub hi: u32,
}

impl GlyphRange {
    pub fn codepoints(&self) -> std::ops::RangeInclusive<u32> {
        self.lo..=self.hi
    }
}

/// Parses a comma separated range list, keeping the given order.
///
/// Whitespace around commas and around the bounds is tolerated, as is one
/// trailing comma. Overlapping ranges are kept as-is, so a codepoint listed
/// twice is rendered twice.
pub fn parse_glyph_ranges(list: &str) -> Result<Vec<GlyphRange>> {
    let invalid = || AtlasError::InvalidGlyphRanges(list.to_string());
    if list.trim().is_empty() {
        return Ok(vec![]);
    }

    let parts: Vec<&str> = list.split(',').collect();
    let last = parts.len() - 1;
    let mut ranges = Vec::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() && i == last && i > 0 {
            break;
        }
        let (lo, hi) = part.split_once('-').ok_or_else(invalid)?;
        let lo = parse_bound(lo).ok_or_else(invalid)?;
        let hi = parse_bound(hi).ok_or_else(invalid)?;
        if lo > hi || hi > MAX_CODEPOINT {
            return Err(invalid());
        }
        ranges.push(GlyphRange { lo, hi });
    }
    Ok(ranges)
}

fn parse_bound(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

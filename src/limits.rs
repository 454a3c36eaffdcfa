// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Hard limits of the atlas packer.
//!
//! Every unbounded allocation (item list, glyph bitmaps, font buffer,
//! atlas canvas) is checked against one of these values first, and hitting
//! a limit is an error rather than a silent truncation.

/// Longest accepted item name, in bytes
pub const MAX_ITEM_NAME: usize = 127;
/// Most items (images plus glyphs) in one atlas
pub const MAX_ITEMS: usize = 20000;
/// Most input directories on one command line
pub const MAX_DIRS: usize = 128;
pub const MIN_ATLAS_WIDTH: u32 = 64;
pub const MIN_ATLAS_HEIGHT: u32 = 64;
pub const MAX_ATLAS_WIDTH: u32 = 8192;
pub const MAX_ATLAS_HEIGHT: u32 = 8192;
/// Largest font file accepted, in bytes
pub const MAX_FONT_SIZE: usize = 1024 * 1024 * 16;

/// Runtime copy of the limits, so callers (and tests) can tighten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_item_name: usize,
    pub max_items: usize,
    pub max_dirs: usize,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub max_font_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_item_name: MAX_ITEM_NAME,
            max_items: MAX_ITEMS,
            max_dirs: MAX_DIRS,
            min_width: MIN_ATLAS_WIDTH,
            min_height: MIN_ATLAS_HEIGHT,
            max_width: MAX_ATLAS_WIDTH,
            max_height: MAX_ATLAS_HEIGHT,
            max_font_size: MAX_FONT_SIZE,
        }
    }
}

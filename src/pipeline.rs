// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! End-to-end atlas build.
//!
//! ```text
//! AtlasSettings ─validate─► AtlasConfig
//!                               │
//!   dirs ──► Assets (items) ──► AtlasSizer (layout) ──► composite ──► Atlas
//!                                                                      │
//!                                          image file ◄── write ───────┤
//!                                          text file  ◄── write ───────┘
//! ```
//!
//! All configuration is checked before the first directory is opened and
//! no output is written until the atlas is fully composited, so a failed
//! run leaves no output files behind.

use crate::asset::{AssetOptions, Assets, Item};
use crate::bitmap::Bitmap;
use crate::codec::{encode_image, OutputFormat};
use crate::compositor::composite;
use crate::error::{AtlasError, Result};
use crate::limits::Limits;
use crate::metadata::write_metadata_file;
use crate::packer::{MaxRectsPacker, Placement};
use crate::ranges::{parse_glyph_ranges, DEFAULT_GLYPH_RANGES};
use crate::sizer::{pack_requests, AtlasSizer, Canvas};
use crate::template::{GlyphNameFormat, LineFormat, DEFAULT_GLYPH_FORMAT, DEFAULT_LINE_FORMAT};
use log::info;
use std::path::{Path, PathBuf};

/// Raw, unchecked settings as a user supplies them.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasSettings {
    pub image_out: PathBuf,
    pub text_out: PathBuf,
    pub padding: i64,
    pub font_size: f64,
    pub line_format: String,
    pub glyph_format: String,
    pub glyph_ranges: String,
    pub trim_ext: bool,
    pub limits: Limits,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            image_out: PathBuf::from("out.png"),
            text_out: PathBuf::from("out.txt"),
            padding: 0,
            font_size: 16.0,
            line_format: DEFAULT_LINE_FORMAT.to_string(),
            glyph_format: DEFAULT_GLYPH_FORMAT.to_string(),
            glyph_ranges: DEFAULT_GLYPH_RANGES.to_string(),
            trim_ext: true,
            limits: Limits::default(),
        }
    }
}

impl AtlasSettings {
    /// Checks every value and parses templates, ranges and output format.
    pub fn validate(&self) -> Result<AtlasConfig> {
        if self.padding < 0 || self.padding > u32::MAX as i64 {
            return Err(AtlasError::InvalidPadding);
        }
        if !(self.font_size > 0.0 && self.font_size.is_finite()) {
            return Err(AtlasError::InvalidFontSize);
        }
        Ok(AtlasConfig {
            image_format: OutputFormat::from_path(&self.image_out)?,
            image_out: self.image_out.clone(),
            text_out: self.text_out.clone(),
            padding: self.padding as u32,
            line_format: LineFormat::parse(&self.line_format)?,
            assets: AssetOptions {
                font_size: self.font_size as f32,
                glyph_format: GlyphNameFormat::parse(&self.glyph_format)?,
                ranges: parse_glyph_ranges(&self.glyph_ranges)?,
                trim_ext: self.trim_ext,
            },
            limits: self.limits,
        })
    }
}

/// Checked configuration of one atlas build.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    pub image_out: PathBuf,
    pub image_format: OutputFormat,
    pub text_out: PathBuf,
    pub padding: u32,
    pub line_format: LineFormat,
    pub assets: AssetOptions,
    pub limits: Limits,
}

/// Accepted canvas, its composited bitmap and the placement of every item.
#[derive(Debug)]
pub struct Atlas {
    pub canvas: Canvas,
    pub bitmap: Bitmap,
    pub placements: Vec<Placement>,
    pub items: Vec<Item>,
    pub padding: u32,
}

impl Atlas {
    /// Sizes and composites the atlas for `items`.
    pub fn build(items: Vec<Item>, padding: u32, limits: Limits) -> Result<Self> {
        let sizes: Vec<(u32, u32)> = items.iter().map(Item::size).collect();
        let requests = pack_requests(&sizes, padding);
        let layout = AtlasSizer::new(&MaxRectsPacker, limits).fit(&requests)?;
        info!(
            "layout accepted: {} items on {}x{}",
            items.len(),
            layout.canvas.width,
            layout.canvas.height
        );
        let bitmap = composite(layout.canvas, &items, &layout.placements, padding);
        Ok(Self {
            canvas: layout.canvas,
            bitmap,
            placements: layout.placements,
            items,
            padding,
        })
    }

    pub fn write_image(&self, path: &Path, format: OutputFormat) -> Result<()> {
        encode_image(&self.bitmap, path, format)
    }

    pub fn write_metadata(&self, path: &Path, format: &LineFormat) -> Result<()> {
        write_metadata_file(path, &self.items, &self.placements, self.padding, format)
    }
}

/// At least one and at most `limits.max_dirs` input directories.
pub fn check_input_dirs(dirs: &[PathBuf], limits: &Limits) -> Result<()> {
    if dirs.is_empty() {
        return Err(AtlasError::NoInputDirs);
    }
    if dirs.len() > limits.max_dirs {
        return Err(AtlasError::TooManyDirs(limits.max_dirs));
    }
    Ok(())
}

/// Loads every input directory in order.
pub fn load_assets(dirs: &[PathBuf], config: &AtlasConfig) -> Result<Assets> {
    check_input_dirs(dirs, &config.limits)?;
    let mut assets = Assets::new(config.limits);
    for dir in dirs {
        info!("loading {}", dir.display());
        assets.load_dir(dir, &config.assets)?;
    }
    Ok(assets)
}

/// Summary of a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasReport {
    pub files: usize,
    pub items: usize,
    pub width: u32,
    pub height: u32,
}

/// Runs the whole build: load, size, composite, then write both outputs.
pub fn build_atlas(dirs: &[PathBuf], config: &AtlasConfig) -> Result<AtlasReport> {
    let assets = load_assets(dirs, config)?;
    let files = assets.file_count();
    let atlas = Atlas::build(assets.into_items(), config.padding, config.limits)?;
    atlas.write_image(&config.image_out, config.image_format)?;
    atlas.write_metadata(&config.text_out, &config.line_format)?;
    Ok(AtlasReport {
        files,
        items: atlas.items.len(),
        width: atlas.canvas.width,
        height: atlas.canvas.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        let config = AtlasSettings::default().validate().unwrap();
        assert_eq!(config.image_format, OutputFormat::Png);
        assert_eq!(config.padding, 0);
        assert_eq!(config.assets.font_size, 16.0);
        assert_eq!(config.assets.ranges.len(), 1);
        assert!(config.assets.trim_ext);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad = |f: fn(&mut AtlasSettings)| {
            let mut s = AtlasSettings::default();
            f(&mut s);
            s.validate().unwrap_err()
        };
        assert!(matches!(bad(|s| s.padding = -1), AtlasError::InvalidPadding));
        assert!(matches!(bad(|s| s.font_size = 0.0), AtlasError::InvalidFontSize));
        assert!(matches!(bad(|s| s.font_size = f64::NAN), AtlasError::InvalidFontSize));
        assert!(matches!(
            bad(|s| s.image_out = PathBuf::from("atlas.bmp")),
            AtlasError::UnsupportedOutputFormat(_)
        ));
        assert!(matches!(
            bad(|s| s.glyph_ranges = "70-60".to_string()),
            AtlasError::InvalidGlyphRanges(_)
        ));
        assert!(matches!(
            bad(|s| s.line_format = "%s %d %d %d".to_string()),
            AtlasError::TooFewSpecifiers { .. }
        ));
        assert!(matches!(
            bad(|s| s.glyph_format = "%d%s".to_string()),
            AtlasError::InvalidSpecifier { .. }
        ));
    }

    #[test]
    fn test_no_dirs_rejected() {
        let config = AtlasSettings::default().validate().unwrap();
        assert!(matches!(load_assets(&[], &config), Err(AtlasError::NoInputDirs)));
    }

    #[test]
    fn test_too_many_dirs_rejected() {
        let mut settings = AtlasSettings::default();
        settings.limits.max_dirs = 1;
        let config = settings.validate().unwrap();
        let dirs = vec![PathBuf::from("a"), PathBuf::from("b")];
        assert!(matches!(load_assets(&dirs, &config), Err(AtlasError::TooManyDirs(1))));
    }

    #[test]
    fn test_input_dirs_checked_without_reading() {
        let limits = Limits {
            max_dirs: 2,
            ..Limits::default()
        };
        let dirs: Vec<PathBuf> = ["x", "y", "z"].iter().map(PathBuf::from).collect();
        assert!(matches!(check_input_dirs(&[], &limits), Err(AtlasError::NoInputDirs)));
        assert!(matches!(check_input_dirs(&dirs, &limits), Err(AtlasError::TooManyDirs(2))));
        // nonexistent directories are only noticed when loading
        assert!(check_input_dirs(&dirs[..2], &limits).is_ok());
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let config = AtlasSettings::default().validate().unwrap();
        let dirs = vec![PathBuf::from("/definitely/not/here")];
        assert!(matches!(load_assets(&dirs, &config), Err(AtlasError::ReadDir { .. })));
    }
}

// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset normalizer: turns the files of the input directories into a flat,
//! ordered list of named RGBA bitmaps.
//!
//! Each file is tried as an image first. If it does not decode, it is tried
//! as a font, and every codepoint of the configured glyph ranges becomes one
//! item of the same height with the glyph drawn on its baseline. A file
//! that is neither is an error for the whole run.

use crate::bitmap::Bitmap;
use crate::codec::decode_image;
use crate::error::{AtlasError, Result};
use crate::font::{FontdueRasterizer, GlyphRasterizer};
use crate::limits::Limits;
use crate::ranges::GlyphRange;
use crate::template::GlyphNameFormat;
use crate::util::item_name;
use log::{debug, info};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One placeable unit: a whole image or one rendered glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub bitmap: Bitmap,
}

impl Item {
    pub fn size(&self) -> (u32, u32) {
        (self.bitmap.width(), self.bitmap.height())
    }
}

/// Settings that shape how files become items.
#[derive(Debug, Clone)]
pub struct AssetOptions {
    pub font_size: f32,
    pub glyph_format: GlyphNameFormat,
    pub ranges: Vec<GlyphRange>,
    pub trim_ext: bool,
}

/// Global vertical layout shared by every glyph of one font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphLayout {
    pub scale: f32,
    pub height: u32,
    pub baseline: i32,
}

impl GlyphLayout {
    /// `height = ceil((ascent - descent + line_gap) * scale) + 1`,
    /// `baseline = floor(ascent * scale) + 1`.
    ///
    /// Fails with `MaxHeightExceeded` when one glyph row would already be
    /// taller than the largest allowed canvas.
    pub fn new<R: GlyphRasterizer + ?Sized>(
        raster: &R,
        font_size: f32,
        name: &str,
        limits: &Limits,
    ) -> Result<Self> {
        let scale = raster.scale_for_size(font_size);
        let vm = raster
            .v_metrics()
            .ok_or_else(|| AtlasError::MissingFontMetrics(name.to_string()))?;
        let s = scale as f64;
        let extent = (vm.ascent as f64 - vm.descent as f64 + vm.line_gap as f64) * s;
        let height = (extent.ceil().max(0.0) as u32).saturating_add(1);
        if height > limits.max_height {
            return Err(AtlasError::MaxHeightExceeded(limits.max_height));
        }
        Ok(Self {
            scale,
            height,
            baseline: (vm.ascent as f64 * s).floor() as i32 + 1,
        })
    }
}

/// Ordered item list plus the count of source files it came from.
#[derive(Debug)]
pub struct Assets {
    items: Vec<Item>,
    files: usize,
    limits: Limits,
}

impl Assets {
    pub fn new(limits: Limits) -> Self {
        Self {
            items: vec![],
            files: 0,
            limits,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of source files loaded so far.
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Loads every regular, non-hidden file of `dir` in file-name order.
    pub fn load_dir(&mut self, dir: &Path, opts: &AssetOptions) -> Result<()> {
        let read_err = |source| AtlasError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };
        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if path.is_dir() {
                debug!("skipping sub-directory {}", path.display());
                continue;
            }
            entries.push((file_name, path));
        }
        entries.sort();

        for (file_name, path) in entries {
            if file_name.len() > self.limits.max_item_name {
                return Err(AtlasError::NameTooLong(file_name));
            }
            let name = item_name(&file_name, opts.trim_ext);
            self.load_file(&path, &name, opts)?;
        }
        Ok(())
    }

    /// Normalizes one file: image first, then font.
    pub fn load_file(&mut self, path: &Path, name: &str, opts: &AssetOptions) -> Result<()> {
        if let Some(bitmap) = decode_image(path) {
            debug!("image {} -> '{}' {}x{}", path.display(), name, bitmap.width(), bitmap.height());
            self.push(Item {
                name: name.to_string(),
                bitmap,
            })?;
            self.files += 1;
            return Ok(());
        }

        let data = self.read_font_file(path, name)?;
        match FontdueRasterizer::from_bytes(data) {
            Some(raster) => {
                let before = self.items.len();
                self.load_font(&raster, name, opts)?;
                info!("font {} -> {} glyphs", path.display(), self.items.len() - before);
                self.files += 1;
                Ok(())
            }
            None => Err(AtlasError::Unrecognized(path.to_path_buf())),
        }
    }

    /// Renders every codepoint of `opts.ranges`, in the order given, as its
    /// own item named through `opts.glyph_format`.
    pub fn load_font<R: GlyphRasterizer + ?Sized>(
        &mut self,
        raster: &R,
        name: &str,
        opts: &AssetOptions,
    ) -> Result<()> {
        let layout = GlyphLayout::new(raster, opts.font_size, name, &self.limits)?;
        for range in &opts.ranges {
            debug!("'{}' glyph range {}-{}", name, range.lo, range.hi);
            for codepoint in range.codepoints() {
                let glyph_name = opts.glyph_format.render(name, codepoint);
                if glyph_name.len() > self.limits.max_item_name {
                    return Err(AtlasError::NameTooLong(glyph_name));
                }
                self.check_capacity()?;
                let bitmap = render_glyph(raster, &layout, codepoint, &self.limits)?;
                self.push(Item {
                    name: glyph_name,
                    bitmap,
                })?;
            }
        }
        Ok(())
    }

    fn read_font_file(&self, path: &Path, name: &str) -> Result<Vec<u8>> {
        let read_err = |source| AtlasError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
        let max = self.limits.max_font_size;
        let mut data = Vec::new();
        File::open(path)
            .map_err(read_err)?
            .take(max as u64 + 1)
            .read_to_end(&mut data)
            .map_err(read_err)?;
        if data.len() > max {
            return Err(AtlasError::FontTooLarge(name.to_string()));
        }
        Ok(data)
    }

    fn check_capacity(&self) -> Result<()> {
        if self.items.len() >= self.limits.max_items {
            return Err(AtlasError::TooManyItems(self.limits.max_items));
        }
        Ok(())
    }

    fn push(&mut self, item: Item) -> Result<()> {
        self.check_capacity()?;
        self.items.push(item);
        Ok(())
    }
}

/// Glyph bitmap of `advance x height` with the coverage mask stamped at its
/// box offset below the shared baseline. The advance is checked against
/// the canvas limit before anything is rasterized or allocated.
fn render_glyph<R: GlyphRasterizer + ?Sized>(
    raster: &R,
    layout: &GlyphLayout,
    codepoint: u32,
    limits: &Limits,
) -> Result<Bitmap> {
    let scale = layout.scale;
    let advance = raster.advance_width(codepoint, scale).max(0) as u32;
    if advance > limits.max_width {
        return Err(AtlasError::MaxWidthExceeded(limits.max_width));
    }
    let mask = raster.glyph_mask(codepoint, scale);
    let mut bitmap = Bitmap::new(advance, layout.height);
    bitmap.blit_alpha_mask(
        &mask.coverage,
        mask.width,
        mask.height,
        mask.x_offset,
        mask.y_offset + layout.baseline,
    );
    Ok(bitmap)
}

// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Image decoding and encoding through the `image` crate.

use crate::bitmap::Bitmap;
use crate::error::{AtlasError, Result};
use image::{ExtendedColorType, ImageFormat, ImageReader};
use log::debug;
use std::path::{Path, PathBuf};

/// Output image formats the atlas can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, compressed
    Png,
    /// Truevision TGA, no lossy compression
    Tga,
}

impl OutputFormat {
    /// Picks the format from the output file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("tga") => Ok(OutputFormat::Tga),
            _ => Err(AtlasError::UnsupportedOutputFormat(path.to_path_buf())),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Tga => ImageFormat::Tga,
        }
    }
}

/// Decodes an image file to RGBA.
///
/// The format is guessed from the content first and from the extension
/// second. Any failure to read or decode is reported as `None`: the caller
/// goes on to try the file as a font.
pub fn decode_image(path: &Path) -> Option<Bitmap> {
    let reader = ImageReader::open(path).ok()?.with_guessed_format().ok()?;
    match reader.decode() {
        Ok(img) => {
            let rgba = img.to_rgba8();
            Bitmap::from_rgba_bytes(rgba.width(), rgba.height(), rgba.as_raw())
        }
        Err(e) => {
            debug!("{} is not an image: {}", path.display(), e);
            None
        }
    }
}

/// Writes `bitmap` to `path` as RGBA8 in the given format.
pub fn encode_image(bitmap: &Bitmap, path: &Path, format: OutputFormat) -> Result<()> {
    image::save_buffer_with_format(
        path,
        &bitmap.to_rgba_bytes(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgba8,
        format.image_format(),
    )
    .map_err(|source| AtlasError::Encode {
        path: PathBuf::from(path),
        source,
    })
}

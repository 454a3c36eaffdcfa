// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_atlas packs every image and every requested font glyph found in a
//! set of directories into a single RGBA texture atlas, and writes a text
//! file describing where each item landed.
//!
//! The build is a straight pipeline:
//! asset (normalize files to named bitmaps) → sizer (grow the canvas until
//! the packer places everything) → compositor (blit items onto the canvas)
//! → codec / metadata (write the image and the text file).
//!
//! Font rasterizing and rectangle packing sit behind the `GlyphRasterizer`
//! and `RectPacker` traits, so both can be swapped or faked in tests.

pub mod asset;
pub mod bitmap;
pub mod codec;
pub mod compositor;
pub mod error;
pub mod font;
pub mod limits;
pub mod log;
pub mod metadata;
pub mod packer;
pub mod pipeline;
pub mod ranges;
pub mod sizer;
pub mod template;
pub mod util;

pub use asset::{AssetOptions, Assets, Item};
pub use bitmap::Bitmap;
pub use error::{AtlasError, Result};
pub use limits::Limits;
pub use pipeline::{build_atlas, Atlas, AtlasConfig, AtlasReport, AtlasSettings};

/// crate version, shown by `atlas --version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

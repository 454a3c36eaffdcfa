// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by every stage of the atlas build.
//!
//! Every error is fatal to the run; the binary prints the message on one
//! line and exits with a non-zero status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    // configuration
    #[error("Expected input directory")]
    NoInputDirs,
    #[error("Maximum input directories ({0}) exceeded")]
    TooManyDirs(usize),
    #[error("Expected padding greater or equal to 0")]
    InvalidPadding,
    #[error("Expected font size greater than 0")]
    InvalidFontSize,
    #[error("Invalid format specifier '%{found}', expected '%{expected}' in '{format}'")]
    InvalidSpecifier {
        format: String,
        found: char,
        expected: char,
    },
    #[error("Too many format specifiers in '{0}'")]
    TooManySpecifiers(String),
    #[error("Too few format specifiers in '{format}', expected {expected}")]
    TooFewSpecifiers { format: String, expected: usize },
    #[error("Incomplete format specifier at end of '{0}'")]
    IncompleteSpecifier(String),
    #[error("Invalid glyph range list '{0}'")]
    InvalidGlyphRanges(String),
    #[error("Unsupported output image format ('{}'), try '.png'", .0.display())]
    UnsupportedOutputFormat(PathBuf),

    // resource limits
    #[error("Maximum images ({0}) exceeded")]
    TooManyItems(usize),
    #[error("File name too long: '{0}'")]
    NameTooLong(String),
    #[error("Font ('{0}') size exceeds font buffer")]
    FontTooLarge(String),
    #[error("Font ('{0}') has no horizontal line metrics")]
    MissingFontMetrics(String),
    #[error("Max atlas width ({0}) exceeded")]
    MaxWidthExceeded(u32),
    #[error("Max atlas height ({0}) exceeded")]
    MaxHeightExceeded(u32),

    // i/o
    #[error("Could not open directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("Could not load '{}' for reading: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("Could not open '{}' for writing: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("Could not write image '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Could not initialise logging: {0}")]
    Log(String),

    // unrecognized assets
    #[error("Could not load file '{}'", .0.display())]
    Unrecognized(PathBuf),
}

pub type Result<T> = std::result::Result<T, AtlasError>;

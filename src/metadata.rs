// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text metadata output: one templated line per placed item, in the order
//! items were discovered.

use crate::asset::Item;
use crate::error::{AtlasError, Result};
use crate::packer::Placement;
use crate::template::LineFormat;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `name x y width height` lines through `format`. Coordinates are
/// the padded position of the bitmap itself, sizes are the bitmap's own.
pub fn write_metadata<W: Write>(
    mut out: W,
    items: &[Item],
    placements: &[Placement],
    padding: u32,
    format: &LineFormat,
) -> io::Result<()> {
    for p in placements.iter().filter(|p| p.placed) {
        let Some(item) = items.get(p.item_index) else {
            continue;
        };
        let line = format.render(
            &item.name,
            (p.x + padding) as i64,
            (p.y + padding) as i64,
            item.bitmap.width() as i64,
            item.bitmap.height() as i64,
        );
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn write_metadata_file(
    path: &Path,
    items: &[Item],
    placements: &[Placement],
    padding: u32,
    format: &LineFormat,
) -> Result<()> {
    let write_err = |source| AtlasError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    write_metadata(BufWriter::new(file), items, placements, padding, format).map_err(write_err)
}

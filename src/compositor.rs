// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Paints every placed item into the final atlas bitmap.

use crate::asset::Item;
use crate::bitmap::Bitmap;
use crate::packer::Placement;
use crate::sizer::Canvas;

/// Allocates a transparent canvas-sized bitmap and blits each placed item
/// at its placement offset plus `padding`. Placements never overlap, so the
/// blit order does not matter.
pub fn composite(canvas: Canvas, items: &[Item], placements: &[Placement], padding: u32) -> Bitmap {
    let mut atlas = Bitmap::new(canvas.width, canvas.height);
    for p in placements.iter().filter(|p| p.placed) {
        if let Some(item) = items.get(p.item_index) {
            atlas.blit_opaque(
                &item.bitmap,
                (p.x + padding) as i32,
                (p.y + padding) as i32,
            );
        }
    }
    atlas
}

// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Grow-and-retry search for the atlas canvas size.
//!
//! ```text
//!   min size ──► pre-size to fit the largest item (powers of two)
//!                   │
//!                   ▼
//!              ┌─ Sizing ─┐  all placed   ┌──────┐
//!              │  pack    ├──────────────►│ Done │
//!              └────┬─────┘               └──────┘
//!                   │ any unplaced: grow (height := width, else width *= 2)
//!                   ▼
//!           over max size? ── yes ──► error
//! ```
//!
//! Every attempt re-packs every item from scratch.

use crate::error::{AtlasError, Result};
use crate::limits::Limits;
use crate::packer::{PackRequest, Placement, RectPacker};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Next size to try after a failed attempt; keeps the canvas close to
    /// square by alternating the axis that grows.
    pub fn grown(self) -> Canvas {
        if self.height < self.width {
            Canvas {
                height: self.width,
                ..self
            }
        } else {
            Canvas {
                width: self.width.saturating_mul(2),
                ..self
            }
        }
    }

    fn check(self, limits: &Limits) -> Result<Canvas> {
        if self.width > limits.max_width {
            return Err(AtlasError::MaxWidthExceeded(limits.max_width));
        }
        if self.height > limits.max_height {
            return Err(AtlasError::MaxHeightExceeded(limits.max_height));
        }
        Ok(self)
    }
}

/// An accepted canvas together with one successful placement per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub canvas: Canvas,
    pub placements: Vec<Placement>,
}

/// Builds the padded packing requests for the given item sizes.
pub fn pack_requests(sizes: &[(u32, u32)], padding: u32) -> Vec<PackRequest> {
    sizes
        .iter()
        .enumerate()
        .map(|(item_index, &(width, height))| PackRequest {
            item_index,
            width: width.saturating_add(padding.saturating_mul(2)),
            height: height.saturating_add(padding.saturating_mul(2)),
        })
        .collect()
}

pub struct AtlasSizer<'a, P: RectPacker> {
    packer: &'a P,
    limits: Limits,
}

impl<'a, P: RectPacker> AtlasSizer<'a, P> {
    pub fn new(packer: &'a P, limits: Limits) -> Self {
        Self { packer, limits }
    }

    /// Smallest canvas, starting from the configured minimum, on which
    /// every request fits according to the packer.
    ///
    /// # Arguments
    /// * `requests` - Padded item sizes, in item order
    ///
    /// # Returns
    /// The accepted canvas with one placed `Placement` per request, or
    /// `MaxWidthExceeded` / `MaxHeightExceeded` once growth passes the limits
    pub fn fit(&self, requests: &[PackRequest]) -> Result<Layout> {
        let mut canvas = self.presize(requests)?;
        let mut attempt = 1;
        loop {
            let placements = self.packer.pack(canvas.width, canvas.height, requests);
            let unplaced = placements.iter().filter(|p| !p.placed).count();
            debug!(
                "pack attempt {} on {}x{}: {} of {} unplaced",
                attempt,
                canvas.width,
                canvas.height,
                unplaced,
                requests.len()
            );
            if unplaced == 0 {
                return Ok(Layout { canvas, placements });
            }
            canvas = canvas.grown().check(&self.limits)?;
            attempt += 1;
        }
    }

    /// Widens the minimum canvas so every single request fits on its own.
    fn presize(&self, requests: &[PackRequest]) -> Result<Canvas> {
        let mut canvas = Canvas {
            width: self.limits.min_width,
            height: self.limits.min_height,
        };
        for req in requests {
            if req.width > canvas.width {
                canvas.width = round_up_po2(req.width);
            }
            if req.height > canvas.height {
                canvas.height = round_up_po2(req.height);
            }
        }
        canvas.check(&self.limits)
    }
}

/// Smallest power of two >= `n`, saturating at `u32::MAX` past 2^31.
fn round_up_po2(n: u32) -> u32 {
    n.checked_next_power_of_two().unwrap_or(u32::MAX)
}

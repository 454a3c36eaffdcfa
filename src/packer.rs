// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Rectangle packing seam and the MaxRects packer used by default.
//!
//! A packer gets a fixed canvas and a list of rectangles and reports, for
//! every rectangle in request order, whether and where it was placed. It
//! never grows the canvas; that is the sizer's job.

/// One rectangle to place: an item's bitmap size plus padding on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackRequest {
    pub item_index: usize,
    pub width: u32,
    pub height: u32,
}

/// Outcome of packing one request. `x`/`y` are meaningless when `placed`
/// is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub item_index: usize,
    pub x: u32,
    pub y: u32,
    pub placed: bool,
}

pub trait RectPacker {
    /// Packs `requests` into a `width` x `height` canvas. Must be
    /// deterministic and return one placement per request, in request order,
    /// with no two placed rectangles overlapping.
    fn pack(&self, width: u32, height: u32, requests: &[PackRequest]) -> Vec<Placement>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Rect {
    fn right(&self) -> u32 {
        self.x + self.width
    }

    fn bottom(&self) -> u32 {
        self.y + self.height
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// MaxRects bin: keeps the list of maximal free rectangles and splits every
/// free rectangle a new placement overlaps.
struct MaxRectsBin {
    free: Vec<Rect>,
}

impl MaxRectsBin {
    /// Creates an empty bin whose single free rectangle is the whole canvas
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    fn new(width: u32, height: u32) -> Self {
        Self {
            free: vec![Rect {
                x: 0,
                y: 0,
                width,
                height,
            }],
        }
    }

    /// Places a `width` x `height` rectangle at its best-area-fit position
    ///
    /// # Arguments
    /// * `width` - Width of the rectangle, padding included
    /// * `height` - Height of the rectangle, padding included
    ///
    /// # Returns
    /// The placed rectangle, or None when no free rectangle can hold it
    fn insert(&mut self, width: u32, height: u32) -> Option<Rect> {
        let node = self.best_area_fit(width, height)?;
        self.place(node);
        Some(node)
    }

    /// Finds the free rectangle with the smallest leftover area
    ///
    /// Ties are broken by the smallest leftover short side, then by the
    /// order of the free list, so the result is deterministic.
    ///
    /// # Arguments
    /// * `width` - Width of the rectangle to place
    /// * `height` - Height of the rectangle to place
    ///
    /// # Returns
    /// The candidate position sized `width` x `height`, or None
    fn best_area_fit(&self, width: u32, height: u32) -> Option<Rect> {
        self.free
            .iter()
            .filter(|r| width <= r.width && height <= r.height)
            .min_by_key(|r| {
                let area_fit = r.width as u64 * r.height as u64 - width as u64 * height as u64;
                let short_side = (r.width - width).min(r.height - height);
                (area_fit, short_side)
            })
            .map(|r| Rect {
                x: r.x,
                y: r.y,
                width,
                height,
            })
    }

    /// Marks `used` as occupied
    ///
    /// Every free rectangle overlapping `used` is replaced by up to four
    /// maximal pieces (above, below, left and right of it), then contained
    /// pieces are pruned.
    ///
    /// # Arguments
    /// * `used` - The rectangle that was just placed
    fn place(&mut self, used: Rect) {
        let mut split = Vec::new();
        self.free.retain(|free| {
            if !free.overlaps(&used) {
                return true;
            }
            // top
            if used.y > free.y {
                split.push(Rect {
                    height: used.y - free.y,
                    ..*free
                });
            }
            // bottom
            if used.bottom() < free.bottom() {
                split.push(Rect {
                    y: used.bottom(),
                    height: free.bottom() - used.bottom(),
                    ..*free
                });
            }
            // left
            if used.x > free.x {
                split.push(Rect {
                    width: used.x - free.x,
                    ..*free
                });
            }
            // right
            if used.right() < free.right() {
                split.push(Rect {
                    x: used.right(),
                    width: free.right() - used.right(),
                    ..*free
                });
            }
            false
        });
        self.free.extend(split);
        self.prune();
    }

    /// Removes free rectangles fully contained in another free rectangle
    ///
    /// Identical rectangles contain each other; only one of them survives.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let mut removed = false;
            let mut j = i + 1;
            while j < self.free.len() {
                if self.free[j].contains(&self.free[i]) {
                    self.free.swap_remove(i);
                    removed = true;
                    break;
                }
                if self.free[i].contains(&self.free[j]) {
                    self.free.swap_remove(j);
                } else {
                    j += 1;
                }
            }
            if !removed {
                i += 1;
            }
        }
    }
}

/// MaxRects best-area-fit packer. Requests are inserted tallest first (then
/// widest, then in request order) and reported back in request order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxRectsPacker;

impl RectPacker for MaxRectsPacker {
    fn pack(&self, width: u32, height: u32, requests: &[PackRequest]) -> Vec<Placement> {
        let mut placements: Vec<Placement> = requests
            .iter()
            .map(|r| Placement {
                item_index: r.item_index,
                x: 0,
                y: 0,
                placed: false,
            })
            .collect();

        let mut order: Vec<usize> = (0..requests.len()).collect();
        order.sort_by(|&a, &b| {
            let (ra, rb) = (&requests[a], &requests[b]);
            rb.height.cmp(&ra.height).then(rb.width.cmp(&ra.width))
        });

        let mut bin = MaxRectsBin::new(width, height);
        for i in order {
            let req = &requests[i];
            if req.width == 0 || req.height == 0 {
                // empty rectangles take no space
                placements[i].placed = true;
                continue;
            }
            if let Some(rect) = bin.insert(req.width, req.height) {
                placements[i].x = rect.x;
                placements[i].y = rect.y;
                placements[i].placed = true;
            }
        }
        placements
    }
}

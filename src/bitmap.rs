// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! RGBA pixel buffer used for every item and for the atlas itself.
//!
//! Pixels are stored row-major from the top-left corner as `u32` values
//! laid out so that `to_le_bytes` yields `[r, g, b, a]`.

/// Packs four channels into one pixel value.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Fully transparent black, the value of a freshly allocated bitmap.
pub const TRANSPARENT: u32 = rgba(0, 0, 0, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Allocates a zero-initialized (fully transparent) bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![TRANSPARENT; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Builds a bitmap from tightly packed RGBA8 bytes.
    ///
    /// Returns `None` when the byte count does not match `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| u32::from_le_bytes([p[0], p[1], p[2], p[3]]))
            .collect();
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Maps a signed destination coordinate to a buffer index, or `None`
    /// when it falls outside the bitmap.
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Copies `src` into this bitmap with its top-left corner at `(x, y)`,
    /// overwriting destination pixels. Pixels landing outside the bitmap
    /// are dropped.
    pub fn blit_opaque(&mut self, src: &Bitmap, x: i32, y: i32) {
        for sy in 0..src.height {
            let dy = y as i64 + sy as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width {
                if let Some(i) = self.index(x as i64 + sx as i64, dy) {
                    self.pixels[i] = src.pixels[sy as usize * src.width as usize + sx as usize];
                }
            }
        }
    }

    /// Stamps an 8-bit coverage mask as white pixels whose alpha is the mask
    /// byte. No blending: destination pixels are replaced. Pixels landing
    /// outside the bitmap are dropped.
    pub fn blit_alpha_mask(&mut self, mask: &[u8], mask_width: u32, mask_height: u32, x: i32, y: i32) {
        for my in 0..mask_height {
            let dy = y as i64 + my as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for mx in 0..mask_width {
                let Some(&alpha) = mask.get(my as usize * mask_width as usize + mx as usize) else {
                    continue;
                };
                if let Some(i) = self.index(x as i64 + mx as i64, dy) {
                    self.pixels[i] = rgba(0xff, 0xff, 0xff, alpha);
                }
            }
        }
    }
}

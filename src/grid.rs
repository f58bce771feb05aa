use crate::{
    bitmap::{Bitmap, or_bits, read_bits},
    error::{CloudError, CloudResult},
};

/// The canvas occupancy state: which pixels are already covered by placed
/// words, and (when a mask is in use) which pixels may ever be covered.
///
/// Single writer, grows by accretion; `stamp` is only called after `fits`
/// succeeded for the same sprite and origin.
pub struct Board {
    width: u32,
    height: u32,
    occupancy: Bitmap,
    allowed: Option<Bitmap>,
}

impl Board {
    pub fn new(width: u32, height: u32, allowed: Option<Bitmap>) -> CloudResult<Board> {
        if width == 0 || height == 0 {
            return Err(CloudError::validation("board width/height must be > 0"));
        }
        if let Some(region) = &allowed
            && (region.width() != width || region.height() != height)
        {
            return Err(CloudError::validation(format!(
                "allowed region is {}x{} but board is {}x{}",
                region.width(),
                region.height(),
                width,
                height
            )));
        }
        Ok(Board {
            width,
            height,
            occupancy: Bitmap::new(width, height),
            allowed,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn occupancy(&self) -> &Bitmap {
        &self.occupancy
    }

    pub fn allowed(&self) -> Option<&Bitmap> {
        self.allowed.as_ref()
    }

    /// Consume the board and hand back the allowed region, if any.
    pub fn into_allowed(self) -> Option<Bitmap> {
        self.allowed
    }

    /// True iff every set pixel of `bm` translated to `(x, y)` lands inside
    /// the board, inside the allowed region, and over free pixels.
    ///
    /// Cost is proportional to the sprite's packed row words, not the board
    /// area: each 64-pixel glyph chunk is tested against the occupancy and
    /// allowed rows with two shifted word reads.
    pub fn fits(&self, bm: &Bitmap, x: u32, y: u32) -> bool {
        if x.checked_add(bm.width()).is_none_or(|r| r > self.width)
            || y.checked_add(bm.height()).is_none_or(|b| b > self.height)
        {
            return false;
        }
        for gy in 0..bm.height() {
            let glyph_row = bm.row(gy);
            let occ_row = self.occupancy.row(y + gy);
            let allowed_row = self.allowed.as_ref().map(|a| a.row(y + gy));
            for (i, &bits) in glyph_row.iter().enumerate() {
                if bits == 0 {
                    continue;
                }
                let offset = x as usize + i * 64;
                if bits & read_bits(occ_row, offset) != 0 {
                    return false;
                }
                if let Some(row) = allowed_row
                    && bits & !read_bits(row, offset) != 0
                {
                    return false;
                }
            }
        }
        true
    }

    /// OR the sprite's footprint into the occupancy grid at `(x, y)`.
    pub fn stamp(&mut self, bm: &Bitmap, x: u32, y: u32) {
        debug_assert!(x + bm.width() <= self.width && y + bm.height() <= self.height);
        for gy in 0..bm.height() {
            let glyph_row = bm.row(gy);
            let occ_row = self.occupancy.row_mut(y + gy);
            for (i, &bits) in glyph_row.iter().enumerate() {
                if bits != 0 {
                    or_bits(occ_row, x as usize + i * 64, bits);
                }
            }
        }
    }
}

use std::path::Path;

use ab_glyph::{Font as _, FontVec, ScaleFont as _};

use crate::{
    bitmap::Bitmap,
    error::{CloudError, CloudResult},
};

/// Orientation of a word on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    /// Horizontal baseline.
    None,
    /// Rotated 90 degrees (vertical text).
    Quarter,
}

impl Rotation {
    pub fn flipped(self) -> Rotation {
        match self {
            Rotation::None => Rotation::Quarter,
            Rotation::Quarter => Rotation::None,
        }
    }
}

/// Rasterized word: the pixels to draw plus the region it occupies.
///
/// `ink` holds the glyph pixels themselves; `footprint` is `ink` dilated by
/// the rasterizer's margin and is what collision tests and occupancy stamps
/// use, so placed words keep a small gap between them. Both bitmaps share
/// the same dimensions.
#[derive(Clone, Debug)]
pub struct GlyphSprite {
    pub ink: Bitmap,
    pub footprint: Bitmap,
}

impl GlyphSprite {
    pub fn width(&self) -> u32 {
        self.footprint.width()
    }

    pub fn height(&self) -> u32 {
        self.footprint.height()
    }
}

/// Turns a word at a font size into a binary occupancy sprite.
///
/// Implementations must be deterministic for fixed inputs; the placement
/// engine calls this once per (word, size, rotation) attempt and relies on
/// identical bitmaps across runs for reproducible layouts.
pub trait GlyphRasterizer {
    fn rasterize(&self, word: &str, px_size: u32, rotation: Rotation) -> CloudResult<GlyphSprite>;
}

/// Real rasterizer over a TTF/OTF font via `ab_glyph`.
///
/// Words are laid out on a single horizontal baseline with kerning, coverage
/// is thresholded at 0.5 into a binary bitmap, and quarter rotation is a
/// bitmap transpose of the horizontal rendering.
pub struct FontRasterizer {
    font: FontVec,
    margin: u32,
}

impl FontRasterizer {
    pub fn new(font_bytes: Vec<u8>, margin: u32) -> CloudResult<Self> {
        let font = FontVec::try_from_vec(font_bytes)
            .map_err(|e| CloudError::font(format!("invalid font data: {e}")))?;
        Ok(Self { font, margin })
    }

    pub fn from_file(path: &Path, margin: u32) -> CloudResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| CloudError::font(format!("read font '{}': {e}", path.display())))?;
        Self::new(bytes, margin)
    }

    fn rasterize_horizontal(&self, word: &str, px_size: u32) -> CloudResult<Bitmap> {
        let scale = ab_glyph::PxScale::from(px_size as f32);
        let scaled = self.font.as_scaled(scale);

        let mut outlined = Vec::new();
        let mut caret = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for ch in word.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, 0.0));
            caret += scaled.h_advance(id);
            prev = Some(id);
            if let Some(og) = self.font.outline_glyph(glyph) {
                outlined.push(og);
            }
        }
        if outlined.is_empty() {
            return Err(CloudError::font(format!(
                "font has no outlines for '{word}'"
            )));
        }

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for og in &outlined {
            let b = og.px_bounds();
            min_x = min_x.min(b.min.x);
            min_y = min_y.min(b.min.y);
            max_x = max_x.max(b.max.x);
            max_y = max_y.max(b.max.y);
        }

        let width = (max_x - min_x).ceil() as u32 + 2 * self.margin;
        let height = (max_y - min_y).ceil() as u32 + 2 * self.margin;
        let mut ink = Bitmap::new(width.max(1), height.max(1));
        for og in &outlined {
            let b = og.px_bounds();
            let ox = (b.min.x - min_x) as i64 + self.margin as i64;
            let oy = (b.min.y - min_y) as i64 + self.margin as i64;
            og.draw(|x, y, c| {
                if c >= 0.5 {
                    let px = ox + x as i64;
                    let py = oy + y as i64;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        ink.set(px as u32, py as u32);
                    }
                }
            });
        }
        Ok(ink)
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn rasterize(&self, word: &str, px_size: u32, rotation: Rotation) -> CloudResult<GlyphSprite> {
        let horizontal = self.rasterize_horizontal(word, px_size)?;
        let ink = match rotation {
            Rotation::None => horizontal,
            Rotation::Quarter => horizontal.rotate_cw(),
        };
        let footprint = dilate(&ink, self.margin);
        Ok(GlyphSprite { ink, footprint })
    }
}

/// Chebyshev dilation: every pixel within `radius` of a set pixel is set.
pub fn dilate(bm: &Bitmap, radius: u32) -> Bitmap {
    if radius == 0 {
        return bm.clone();
    }
    let r = radius as i64;
    let (w, h) = (bm.width() as i64, bm.height() as i64);
    let mut out = bm.clone();
    for y in 0..bm.height() {
        for x in 0..bm.width() {
            if !bm.get(x, y) {
                continue;
            }
            for dy in -r..=r {
                for dx in -r..=r {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0 && ny >= 0 && nx < w && ny < h {
                        out.set(nx as u32, ny as u32);
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_flips_back_and_forth() {
        assert_eq!(Rotation::None.flipped(), Rotation::Quarter);
        assert_eq!(Rotation::Quarter.flipped(), Rotation::None);
    }

    #[test]
    fn dilate_grows_a_point_into_a_square() {
        let mut bm = Bitmap::new(5, 5);
        bm.set(2, 2);
        let grown = dilate(&bm, 1);
        assert_eq!(grown.count_set(), 9);
        assert!(grown.get(1, 1));
        assert!(grown.get(3, 3));
        assert!(!grown.get(0, 0));
    }

    #[test]
    fn dilate_clips_at_edges() {
        let mut bm = Bitmap::new(3, 3);
        bm.set(0, 0);
        let grown = dilate(&bm, 1);
        assert_eq!(grown.count_set(), 4);
    }

    #[test]
    fn dilate_zero_is_identity() {
        let mut bm = Bitmap::new(4, 4);
        bm.set(1, 2);
        assert_eq!(dilate(&bm, 0), bm);
    }
}

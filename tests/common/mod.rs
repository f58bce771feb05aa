use wordcloud::{Bitmap, CloudResult, GlyphRasterizer, GlyphSprite, Rotation};

/// Synthetic rasterizer for layout tests: each word becomes a solid block
/// roughly 0.6em wide per character. Deterministic, no font files needed,
/// and every pixel is set so overlap checks are as strict as possible.
pub struct BlockRasterizer;

impl GlyphRasterizer for BlockRasterizer {
    fn rasterize(&self, word: &str, px_size: u32, rotation: Rotation) -> CloudResult<GlyphSprite> {
        let chars = word.chars().count() as u32;
        let w = (px_size * chars * 6 / 10).max(1);
        let h = px_size.max(1);
        let (w, h) = match rotation {
            Rotation::None => (w, h),
            Rotation::Quarter => (h, w),
        };
        let ink = Bitmap::from_fn(w, h, |_, _| true);
        Ok(GlyphSprite {
            footprint: ink.clone(),
            ink,
        })
    }
}

/// Assert that no two placements share a pixel by accumulating footprints
/// onto a fresh canvas bitmap.
pub fn assert_no_overlap(placements: &[wordcloud::Placement], width: u32, height: u32) {
    let mut canvas = Bitmap::new(width, height);
    for p in placements {
        let fp = &p.sprite.footprint;
        for gy in 0..fp.height() {
            for gx in 0..fp.width() {
                if fp.get(gx, gy) {
                    let (x, y) = (p.x + gx, p.y + gy);
                    assert!(x < width && y < height, "pixel out of canvas bounds");
                    assert!(!canvas.get(x, y), "overlap at ({x}, {y}) from '{}'", p.word);
                    canvas.set(x, y);
                }
            }
        }
    }
}

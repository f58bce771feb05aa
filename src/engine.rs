use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

use crate::{
    config::CloudConfig,
    error::CloudResult,
    frequency::FrequencyTable,
    glyph::{GlyphRasterizer, GlyphSprite, Rotation},
    grid::Board,
    spiral::SpiralSearch,
};

/// One committed word: immutable once appended, never moved or removed.
#[derive(Clone, Debug)]
pub struct Placement {
    pub word: String,
    pub count: u64,
    /// Rank in the frequency-descending order the engine walked (0-based).
    pub rank: usize,
    pub font_size: u32,
    /// Top-left corner of the sprite on the canvas.
    pub x: u32,
    pub y: u32,
    pub rotation: Rotation,
    pub sprite: GlyphSprite,
}

/// Greedy largest-first placement over a shared board.
///
/// Words are attempted in frequency-descending order (ties by first
/// occurrence); each word walks `Sizing -> Searching -> Committed | Dropped`.
/// A word that exhausts the spiral at its current size is retried smaller
/// until it either fits or falls below the minimum font size, at which point
/// it is dropped and the run continues. Committed placements are never
/// revisited, so stopping early at any word cap leaves the board consistent.
pub fn place_words(
    table: &FrequencyTable,
    rasterizer: &dyn GlyphRasterizer,
    board: &mut Board,
    cfg: &CloudConfig,
    word_cap: Option<usize>,
) -> CloudResult<Vec<Placement>> {
    let cap = word_cap.map_or(cfg.max_words, |n| n.min(cfg.max_words));
    let ranked = table.ranked();

    let mut placements: Vec<Placement> = Vec::new();
    let mut last_size = cfg.max_font_size;
    let mut last_count: Option<u64> = None;

    for (rank, (word, count)) in ranked.into_iter().enumerate() {
        if placements.len() >= cap {
            tracing::debug!(word, "dropped: word cap reached");
            continue;
        }

        // Sizing: interpolate between rank-based decay (each word as large
        // as the previous) and pure frequency-proportional scaling.
        let size = match last_count {
            None => cfg.max_font_size,
            Some(prev) => {
                let ratio = count as f64 / prev as f64;
                let scale = cfg.relative_scaling * ratio + (1.0 - cfg.relative_scaling);
                ((last_size as f64 * scale).round() as u32).min(cfg.max_font_size)
            }
        };
        if size < cfg.min_font_size {
            tracing::info!(word, size, "dropped: sized below minimum");
            continue;
        }

        let mut rng = StdRng::seed_from_u64(cfg.seed ^ mix64(rank as u64 + 1));
        let primary = if rng.r#gen::<f64>() < cfg.rotate_ratio {
            Rotation::Quarter
        } else {
            Rotation::None
        };

        match search(
            word, size, primary, rank, rasterizer, board, cfg, &mut rng,
        )? {
            Some(placement) => {
                tracing::debug!(
                    word,
                    size = placement.font_size,
                    x = placement.x,
                    y = placement.y,
                    "committed"
                );
                last_size = placement.font_size;
                last_count = Some(count);
                placements.push(Placement {
                    word: word.to_string(),
                    count,
                    rank,
                    ..placement
                });
            }
            None => {
                tracing::info!(word, "dropped: no position found at any size");
            }
        }
    }

    tracing::info!(placed = placements.len(), total = table.len(), "layout done");
    Ok(placements)
}

/// Searching with shrink-and-retry. Returns the committed placement (word,
/// count, and rank left for the caller to fill) or `None` when the word
/// cannot be placed at or above the minimum size.
#[allow(clippy::too_many_arguments)]
fn search(
    word: &str,
    mut size: u32,
    primary: Rotation,
    rank: usize,
    rasterizer: &dyn GlyphRasterizer,
    board: &mut Board,
    cfg: &CloudConfig,
    rng: &mut StdRng,
) -> CloudResult<Option<Placement>> {
    loop {
        let start = if rank == 0 {
            (board.width() / 2, board.height() / 2)
        } else {
            (
                rng.gen_range(0..board.width()),
                rng.gen_range(0..board.height()),
            )
        };

        // Requested rotation first, then the alternate at the same size.
        for rotation in [primary, primary.flipped()] {
            let sprite = rasterizer.rasterize(word, size, rotation)?;
            if sprite.width() > board.width() || sprite.height() > board.height() {
                continue;
            }
            if let Some((x, y)) = spiral_fit(&sprite, start, board) {
                board.stamp(&sprite.footprint, x, y);
                return Ok(Some(Placement {
                    word: String::new(),
                    count: 0,
                    rank,
                    font_size: size,
                    x,
                    y,
                    rotation,
                    sprite,
                }));
            }
        }

        let smaller = (size as f64 * cfg.shrink_factor).floor() as u32;
        // Floor can stall for tiny sizes; always step down at least one px.
        let smaller = smaller.min(size.saturating_sub(1));
        if smaller < cfg.min_font_size {
            return Ok(None);
        }
        tracing::debug!(word, from = size, to = smaller, "shrinking");
        size = smaller;
    }
}

/// Walk the spiral from `start` and return the first origin where the
/// sprite's footprint fits. Candidates are sprite centers; the returned
/// coordinates are the top-left origin.
fn spiral_fit(sprite: &GlyphSprite, start: (u32, u32), board: &Board) -> Option<(u32, u32)> {
    let (hw, hh) = (sprite.width() / 2, sprite.height() / 2);
    for (cx, cy) in SpiralSearch::new(start, board.width(), board.height()) {
        let Some(x) = cx.checked_sub(hw) else {
            continue;
        };
        let Some(y) = cy.checked_sub(hh) else {
            continue;
        };
        if board.fits(&sprite.footprint, x, y) {
            return Some((x, y));
        }
    }
    None
}

/// splitmix64 finalizer; decorrelates per-word seeds derived from the rank.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Per-word color parameter in [0, 1), derived from the run seed and the
/// word's rank so re-renders of the same layout pick the same colors.
pub fn color_param(seed: u64, rank: usize) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed ^ mix64(0x10C0_0C01 ^ rank as u64));
    rng.r#gen::<f64>()
}

use std::collections::HashSet;

use crate::{
    bitmap::Bitmap,
    config::CloudConfig,
    engine::{Placement, place_words},
    error::CloudResult,
    frequency::{FrequencyTable, tokenize},
    glyph::GlyphRasterizer,
    grid::Board,
    render::{Frame, render},
};

/// Result of one generation run: the surviving frequency table plus the
/// committed layout, ready to render or report.
#[derive(Debug)]
pub struct Cloud {
    pub table: FrequencyTable,
    pub placements: Vec<Placement>,
    pub region: Option<Bitmap>,
    pub width: u32,
    pub height: u32,
}

impl Cloud {
    pub fn render(&self, cfg: &CloudConfig) -> Frame {
        render(
            &self.placements,
            self.region.as_ref(),
            self.width,
            self.height,
            cfg,
        )
    }

    pub fn report(&self) -> String {
        self.table.report()
    }
}

/// Generate a word cloud from raw text: tokenize, count, and lay out.
///
/// Pure apart from logging; all randomness derives from `cfg.seed`. When a
/// mask region is supplied the canvas adopts its dimensions (the configured
/// width/height apply to unmasked runs only). Fails on an empty table
/// (nothing survived filtering) and on invalid configuration; unplaceable
/// words are dropped, not errors.
#[tracing::instrument(skip_all)]
pub fn generate(
    text: &str,
    exclusion: &HashSet<String>,
    rasterizer: &dyn GlyphRasterizer,
    region: Option<Bitmap>,
    cfg: &CloudConfig,
) -> CloudResult<Cloud> {
    cfg.validate()?;

    let tokens = tokenize(text, exclusion);
    let table = FrequencyTable::build(tokens)?;
    tracing::info!(words = table.len(), "frequency table built");

    let (width, height) = match &region {
        Some(r) => (r.width(), r.height()),
        None => (cfg.width, cfg.height),
    };
    let mut board = Board::new(width, height, region)?;
    let placements = place_words(&table, rasterizer, &mut board, cfg, None)?;

    Ok(Cloud {
        table,
        placements,
        region: board.into_allowed(),
        width,
        height,
    })
}

use crate::error::{CloudError, CloudResult};

/// Complete configuration for one word-cloud generation run.
///
/// There is no global state anywhere in the crate; a `CloudConfig` is built
/// once (by the CLI or an embedding caller) and passed by reference into
/// [`crate::generate`]. Two runs with the same config, corpus, and mask
/// produce byte-identical output.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CloudConfig {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// At most this many words are placed; the rest are dropped.
    pub max_words: usize,
    /// Words that cannot be placed at this size (or whose computed size falls
    /// below it) are dropped.
    pub min_font_size: u32,
    /// Font size given to the most frequent word.
    pub max_font_size: u32,
    /// Interpolates between rank-based sizing (0.0) and pure
    /// frequency-proportional sizing (1.0).
    pub relative_scaling: f64,
    /// Multiplier applied to the font size when a word cannot be placed and
    /// must be retried smaller. Must be in (0, 1).
    pub shrink_factor: f64,
    /// Probability that a word is drawn rotated 90 degrees.
    pub rotate_ratio: f64,
    /// Empty pixels kept around each word's glyph bitmap.
    pub margin: u32,
    /// Background color, straight RGBA.
    pub background: [u8; 4],
    /// Width in pixels of the white contour traced around the mask outline.
    /// Zero disables the contour.
    pub contour_width: u32,
    /// Global determinism seed. Start points, rotations, and colors all
    /// derive from this and the word's rank.
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            max_words: 150,
            min_font_size: 10,
            max_font_size: 100,
            relative_scaling: 0.5,
            shrink_factor: 0.9,
            rotate_ratio: 0.1,
            margin: 2,
            background: [0, 0, 0, 255],
            contour_width: 2,
            seed: 0,
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> CloudResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CloudError::validation("canvas width/height must be > 0"));
        }
        if self.max_words == 0 {
            return Err(CloudError::validation("max_words must be > 0"));
        }
        if self.min_font_size == 0 {
            return Err(CloudError::validation("min_font_size must be > 0"));
        }
        if self.min_font_size > self.max_font_size {
            return Err(CloudError::validation(
                "min_font_size must be <= max_font_size",
            ));
        }
        if !(0.0..=1.0).contains(&self.relative_scaling) {
            return Err(CloudError::validation("relative_scaling must be in [0, 1]"));
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(CloudError::validation("shrink_factor must be in (0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.rotate_ratio) {
            return Err(CloudError::validation("rotate_ratio must be in [0, 1]"));
        }
        Ok(())
    }
}

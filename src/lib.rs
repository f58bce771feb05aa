#![forbid(unsafe_code)]

pub mod bitmap;
pub mod color;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod glyph;
pub mod grid;
pub mod mask;
pub mod render;
pub mod runner;
pub mod spiral;
pub mod stopwords;

pub use bitmap::Bitmap;
pub use config::CloudConfig;
pub use engine::{Placement, place_words};
pub use error::{CloudError, CloudResult};
pub use frequency::{FrequencyTable, tokenize};
pub use glyph::{FontRasterizer, GlyphRasterizer, GlyphSprite, Rotation};
pub use grid::Board;
pub use render::{Frame, render, write_png};
pub use runner::{Cloud, generate};
pub use spiral::SpiralSearch;
pub use stopwords::{FILTER_TERMS, STOPWORDS, exclusion_set};

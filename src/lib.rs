//! # tarot-cardgen
//!
//! Generates the fixed 94-card placeholder tarot deck as PNG images:
//! gradient backgrounds, gold borders, and text labels standing in for
//! real card art.
//!
//! ## Design
//!
//! - **Static deck**: the 94 (index, name, category) records are a compile
//!   time table. No runtime card creation or mutation.
//! - **Deterministic output**: given the same font fallback state, two runs
//!   produce pixel-identical files.
//! - **One-shot batch**: strictly sequential, no retries. Filesystem
//!   failures are fatal; a missing system font is not.
//!
//! ## Modules
//!
//! - `deck`: card records, categories, the fixed table
//! - `palette`: (category, index) → gradient color pair
//! - `render`: per-card rasterization and font fallback
//! - `generate`: the driver writing PNGs and the deck manifest

pub mod deck;
pub mod generate;
pub mod palette;
pub mod render;

// Re-export commonly used types
pub use crate::deck::{split_name, CardSpec, Category, DECK, DECK_SIZE};
pub use crate::generate::{generate_deck, GenerateError, MANIFEST_FILE, OUTPUT_DIR};
pub use crate::palette::{card_colors, hsv_to_rgb};
pub use crate::render::{render_card, FontStack, CARD_HEIGHT, CARD_WIDTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

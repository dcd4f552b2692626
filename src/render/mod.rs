//! Card rasterization: fonts, layout, and the per-card drawing pipeline.

pub mod card;
pub mod font;

pub use card::{gradient, render_card, CARD_HEIGHT, CARD_WIDTH, GOLD, WHITE};
pub use font::FontStack;

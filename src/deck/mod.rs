//! The static deck: card records, categories, and the fixed 94-entry table.
//!
//! Every card the generator produces is described by one [`CardSpec`] in
//! [`DECK`]. The table is the single source of truth: category assignment
//! comes from the table itself, never re-derived from index ranges.

pub mod card;
pub mod table;

pub use card::{split_name, CardSpec, Category};
pub use table::{DECK, DECK_SIZE};

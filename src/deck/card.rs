//! Card records and categories.
//!
//! `CardSpec` holds the immutable properties of one card: its position in
//! the deck, its display name, and its category. Cards are defined once in
//! [`crate::deck::DECK`] and never created or mutated at runtime.

use serde::{Deserialize, Serialize};

/// One of the six fixed partitions of the deck.
///
/// The category determines both the card's color palette and the large
/// label drawn at its center. Because the set is closed, the defensive
/// "unknown category" fallbacks of loosely-typed implementations have no
/// equivalent here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The 22 trump cards (deck positions 1-22).
    Major,
    Wands,
    Cups,
    Swords,
    Pentacles,
    /// The 16 extension cards unique to this deck (positions 79-94).
    Hidden,
}

impl Category {
    /// The label drawn in large text at the center of the card.
    ///
    /// A plain word is used instead of a suit glyph because emoji and
    /// symbol coverage in rasterized fonts is unreliable.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Major => "MAJOR",
            Category::Wands => "WANDS",
            Category::Cups => "CUPS",
            Category::Swords => "SWORDS",
            Category::Pentacles => "COINS",
            Category::Hidden => "HIDDEN",
        }
    }

    /// Lowercase category name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Major => "major",
            Category::Wands => "wands",
            Category::Cups => "cups",
            Category::Swords => "swords",
            Category::Pentacles => "pentacles",
            Category::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a single card.
///
/// ## Example
///
/// ```
/// use tarot_cardgen::deck::{CardSpec, Category};
///
/// let fool = CardSpec::new(1, "The Fool", Category::Major);
/// assert_eq!(fool.filename(), "01_The_Fool.png");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardSpec {
    /// Position in the deck, 1-94, unique across the table.
    pub index: u8,

    /// Display name drawn near the bottom of the card.
    pub name: &'static str,

    /// Category, fixed by the table.
    pub category: Category,
}

impl CardSpec {
    /// Create a card record.
    #[must_use]
    pub const fn new(index: u8, name: &'static str, category: Category) -> Self {
        Self {
            index,
            name,
            category,
        }
    }

    /// Output filename: zero-padded 2-digit index, underscore-joined name,
    /// `.png` extension. Unique across the deck because indices are unique.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{:02}_{}.png", self.index, self.name.replace(' ', "_"))
    }
}

/// Split a card name for rendering near the bottom of the card.
///
/// Names longer than two words break into two centered lines at the
/// midpoint word boundary; shorter names render as a single line.
///
/// ```
/// use tarot_cardgen::deck::split_name;
///
/// assert_eq!(split_name("The Fool"), ("The Fool".to_string(), None));
/// assert_eq!(
///     split_name("The Hidden Oracle"),
///     ("The".to_string(), Some("Hidden Oracle".to_string()))
/// );
/// ```
#[must_use]
pub fn split_name(name: &str) -> (String, Option<String>) {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() > 2 {
        let mid = words.len() / 2;
        (words[..mid].join(" "), Some(words[mid..].join(" ")))
    } else {
        (words.join(" "), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_zero_padding() {
        let card = CardSpec::new(7, "The Lovers", Category::Major);
        assert_eq!(card.filename(), "07_The_Lovers.png");

        let card = CardSpec::new(94, "The Heart's Desire", Category::Hidden);
        assert_eq!(card.filename(), "94_The_Heart's_Desire.png");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Major.label(), "MAJOR");
        assert_eq!(Category::Pentacles.label(), "COINS");
        assert_eq!(Category::Hidden.label(), "HIDDEN");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Pentacles).unwrap();
        assert_eq!(json, "\"pentacles\"");

        let back: Category = serde_json::from_str("\"major\"").unwrap();
        assert_eq!(back, Category::Major);
    }

    #[test]
    fn test_split_short_names() {
        assert_eq!(split_name("Strength"), ("Strength".to_string(), None));
        assert_eq!(split_name("The Fool"), ("The Fool".to_string(), None));
    }

    #[test]
    fn test_split_three_words() {
        // Midpoint of 3 words is 1: first word / remaining two.
        let (line1, line2) = split_name("The Hidden Oracle");
        assert_eq!(line1, "The");
        assert_eq!(line2.as_deref(), Some("Hidden Oracle"));
    }

    #[test]
    fn test_split_four_words() {
        let (line1, line2) = split_name("Wheel of Fortune Reversed");
        assert_eq!(line1, "Wheel of");
        assert_eq!(line2.as_deref(), Some("Fortune Reversed"));
    }
}

//! The fixed 94-card table.
//!
//! 22 major arcana, four suits of 14, and 16 hidden cards, in deck order.
//! Indices 1-94 each appear exactly once; the table is the authority on
//! category membership.

use super::card::{CardSpec, Category};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 94;

const fn card(index: u8, name: &'static str, category: Category) -> CardSpec {
    CardSpec::new(index, name, category)
}

/// The full deck, in generation order.
pub const DECK: [CardSpec; DECK_SIZE] = [
    // Major arcana (1-22)
    card(1, "The Fool", Category::Major),
    card(2, "The Magician", Category::Major),
    card(3, "The High Priestess", Category::Major),
    card(4, "The Empress", Category::Major),
    card(5, "The Emperor", Category::Major),
    card(6, "The Hierophant", Category::Major),
    card(7, "The Lovers", Category::Major),
    card(8, "The Chariot", Category::Major),
    card(9, "Strength", Category::Major),
    card(10, "The Hermit", Category::Major),
    card(11, "Wheel of Fortune", Category::Major),
    card(12, "Justice", Category::Major),
    card(13, "The Hanged Man", Category::Major),
    card(14, "Death", Category::Major),
    card(15, "Temperance", Category::Major),
    card(16, "The Devil", Category::Major),
    card(17, "The Tower", Category::Major),
    card(18, "The Star", Category::Major),
    card(19, "The Moon", Category::Major),
    card(20, "The Sun", Category::Major),
    card(21, "Judgement", Category::Major),
    card(22, "The World", Category::Major),
    // Wands (23-36)
    card(23, "Ace of Wands", Category::Wands),
    card(24, "Two of Wands", Category::Wands),
    card(25, "Three of Wands", Category::Wands),
    card(26, "Four of Wands", Category::Wands),
    card(27, "Five of Wands", Category::Wands),
    card(28, "Six of Wands", Category::Wands),
    card(29, "Seven of Wands", Category::Wands),
    card(30, "Eight of Wands", Category::Wands),
    card(31, "Nine of Wands", Category::Wands),
    card(32, "Ten of Wands", Category::Wands),
    card(33, "Page of Wands", Category::Wands),
    card(34, "Knight of Wands", Category::Wands),
    card(35, "Queen of Wands", Category::Wands),
    card(36, "King of Wands", Category::Wands),
    // Cups (37-50)
    card(37, "Ace of Cups", Category::Cups),
    card(38, "Two of Cups", Category::Cups),
    card(39, "Three of Cups", Category::Cups),
    card(40, "Four of Cups", Category::Cups),
    card(41, "Five of Cups", Category::Cups),
    card(42, "Six of Cups", Category::Cups),
    card(43, "Seven of Cups", Category::Cups),
    card(44, "Eight of Cups", Category::Cups),
    card(45, "Nine of Cups", Category::Cups),
    card(46, "Ten of Cups", Category::Cups),
    card(47, "Page of Cups", Category::Cups),
    card(48, "Knight of Cups", Category::Cups),
    card(49, "Queen of Cups", Category::Cups),
    card(50, "King of Cups", Category::Cups),
    // Swords (51-64)
    card(51, "Ace of Swords", Category::Swords),
    card(52, "Two of Swords", Category::Swords),
    card(53, "Three of Swords", Category::Swords),
    card(54, "Four of Swords", Category::Swords),
    card(55, "Five of Swords", Category::Swords),
    card(56, "Six of Swords", Category::Swords),
    card(57, "Seven of Swords", Category::Swords),
    card(58, "Eight of Swords", Category::Swords),
    card(59, "Nine of Swords", Category::Swords),
    card(60, "Ten of Swords", Category::Swords),
    card(61, "Page of Swords", Category::Swords),
    card(62, "Knight of Swords", Category::Swords),
    card(63, "Queen of Swords", Category::Swords),
    card(64, "King of Swords", Category::Swords),
    // Pentacles (65-78)
    card(65, "Ace of Pentacles", Category::Pentacles),
    card(66, "Two of Pentacles", Category::Pentacles),
    card(67, "Three of Pentacles", Category::Pentacles),
    card(68, "Four of Pentacles", Category::Pentacles),
    card(69, "Five of Pentacles", Category::Pentacles),
    card(70, "Six of Pentacles", Category::Pentacles),
    card(71, "Seven of Pentacles", Category::Pentacles),
    card(72, "Eight of Pentacles", Category::Pentacles),
    card(73, "Nine of Pentacles", Category::Pentacles),
    card(74, "Ten of Pentacles", Category::Pentacles),
    card(75, "Page of Pentacles", Category::Pentacles),
    card(76, "Knight of Pentacles", Category::Pentacles),
    card(77, "Queen of Pentacles", Category::Pentacles),
    card(78, "King of Pentacles", Category::Pentacles),
    // Hidden cards (79-94)
    card(79, "The Hidden Oracle", Category::Hidden),
    card(80, "The Shadow Guide", Category::Hidden),
    card(81, "The Light Bearer", Category::Hidden),
    card(82, "The Dream Walker", Category::Hidden),
    card(83, "The Soul Mirror", Category::Hidden),
    card(84, "The Time Keeper", Category::Hidden),
    card(85, "The Fate Weaver", Category::Hidden),
    card(86, "The Spirit Guardian", Category::Hidden),
    card(87, "The Mystic Vision", Category::Hidden),
    card(88, "The Sacred Journey", Category::Hidden),
    card(89, "The Inner Truth", Category::Hidden),
    card(90, "The Cosmic Balance", Category::Hidden),
    card(91, "The Divine Messenger", Category::Hidden),
    card(92, "The Eternal Flame", Category::Hidden),
    card(93, "The Wisdom Keeper", Category::Hidden),
    card(94, "The Heart's Desire", Category::Hidden),
];

//! Renderer property tests.

use image::Rgb;
use proptest::prelude::*;
use tarot_cardgen::render::{gradient, render_card, FontStack, CARD_HEIGHT, CARD_WIDTH};
use tarot_cardgen::{CardSpec, Category, DECK};

proptest! {
    /// Row 0 equals the top color exactly; every channel moves
    /// monotonically toward the bottom color down the rows.
    #[test]
    fn prop_gradient_monotonic(
        top in prop::array::uniform3(0u8..=255),
        bottom in prop::array::uniform3(0u8..=255),
        height in 2u32..256,
    ) {
        let img = gradient(1, height, Rgb(top), Rgb(bottom));
        prop_assert_eq!(img.get_pixel(0, 0).0, top);

        for c in 0..3 {
            let ascending = bottom[c] >= top[c];
            for y in 1..height {
                let prev = img.get_pixel(0, y - 1).0[c];
                let cur = img.get_pixel(0, y).0[c];
                if ascending {
                    prop_assert!(cur >= prev);
                } else {
                    prop_assert!(cur <= prev);
                }
            }

            // Last row lands on the bottom color within rounding.
            let last = img.get_pixel(0, height - 1).0[c];
            let max_step =
                (u16::from(top[c]).abs_diff(u16::from(bottom[c])) / height as u16) + 1;
            prop_assert!(u16::from(last).abs_diff(u16::from(bottom[c])) <= max_step);
        }
    }
}

#[test]
fn test_every_deck_card_renders_at_fixed_size() {
    let fonts = FontStack::bitmap_only();
    for spec in &DECK {
        let img = render_card(spec, &fonts);
        assert_eq!(img.dimensions(), (CARD_WIDTH, CARD_HEIGHT), "card {}", spec.index);
    }
}

#[test]
fn test_category_label_changes_center_pixels() {
    // Same geometry, different label word: the central band must differ.
    let fonts = FontStack::bitmap_only();
    let cups = render_card(&CardSpec::new(40, "Four of Cups", Category::Cups), &fonts);
    let swords = render_card(&CardSpec::new(40, "Four of Cups", Category::Swords), &fonts);

    let band_differs = (0..CARD_WIDTH).any(|x| {
        (200..250).any(|y| {
            let a = cups.get_pixel(x, y);
            let b = swords.get_pixel(x, y);
            // Ignore background difference: only count gold label pixels
            // present in one image and absent in the other.
            (a.0 == [255, 215, 0]) != (b.0 == [255, 215, 0])
        })
    });
    assert!(band_differs);
}

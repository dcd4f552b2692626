//! Color selection: maps (category, index) to a gradient color pair.
//!
//! Major arcana rotate through the hue circle (16 degrees per card) so the
//! 22 trumps form a rainbow when laid out in order. Each suit uses a fixed
//! literal pair; hidden cards use a purple/violet pair.

use image::Rgb;

use crate::deck::Category;

/// Convert HSV to RGB.
///
/// `h_deg` is in degrees (wrapped mod 360), `s` and `v` in `0.0..=1.0`.
/// Channels are scaled to 0-255 and truncated, matching the sector
/// algorithm used by the usual library implementations.
#[must_use]
pub fn hsv_to_rgb(h_deg: f32, s: f32, v: f32) -> Rgb<u8> {
    let h = (h_deg.rem_euclid(360.0)) / 360.0;
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
}

/// Gradient color pair for a card: (top, bottom).
///
/// `index` only influences the result for [`Category::Major`], where it
/// drives the hue rotation.
#[must_use]
pub fn card_colors(category: Category, index: u8) -> (Rgb<u8>, Rgb<u8>) {
    match category {
        Category::Major => {
            let hue = (u32::from(index) * 16 % 360) as f32;
            (
                hsv_to_rgb(hue, 0.7, 0.4),
                hsv_to_rgb(hue + 30.0, 0.5, 0.6),
            )
        }
        Category::Wands => (Rgb([150, 50, 0]), Rgb([255, 150, 50])),
        Category::Cups => (Rgb([0, 50, 150]), Rgb([50, 150, 255])),
        Category::Swords => (Rgb([100, 100, 150]), Rgb([200, 200, 255])),
        Category::Pentacles => (Rgb([0, 100, 0]), Rgb([150, 200, 50])),
        Category::Hidden => (Rgb([75, 0, 130]), Rgb([138, 43, 226])),
    }
}

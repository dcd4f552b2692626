//! Font loading with silent fallback.
//!
//! The renderer prefers a system TrueType font, probing a short list of
//! common install paths. When none loads, every text role falls back to a
//! built-in 5x7 bitmap font scaled to the requested size. Fallback is never
//! an error: placeholder cards must generate on any machine.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// System font files probed in order. First one that loads wins.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Text drawing backend: a loaded TrueType font, or the bitmap fallback.
pub struct FontStack {
    truetype: Option<FontVec>,
}

impl FontStack {
    /// Probe the system font locations; fall back to the bitmap font on
    /// any failure without reporting an error.
    #[must_use]
    pub fn load_system() -> Self {
        let truetype = FONT_CANDIDATES.iter().find_map(|path| {
            let bytes = std::fs::read(path).ok()?;
            FontVec::try_from_vec(bytes).ok()
        });
        Self { truetype }
    }

    /// Construct the bitmap-only stack. Used by tests to pin rendering to
    /// the deterministic fallback path.
    #[must_use]
    pub fn bitmap_only() -> Self {
        Self { truetype: None }
    }

    /// Whether a TrueType font was found.
    #[must_use]
    pub fn has_truetype(&self) -> bool {
        self.truetype.is_some()
    }

    /// Pixel dimensions `(width, height)` of `text` at `size`.
    #[must_use]
    pub fn measure(&self, size: f32, text: &str) -> (u32, u32) {
        match &self.truetype {
            Some(font) => text_size(PxScale::from(size), font, text),
            None => bitmap_text_size(size, text),
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Pixels outside the image bounds are clipped, not an error.
    pub fn draw(
        &self,
        img: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
    ) {
        match &self.truetype {
            Some(font) => draw_text_mut(img, color, x, y, PxScale::from(size), font, text),
            None => draw_bitmap_text(img, color, x, y, size, text),
        }
    }
}

/// Glyph cell geometry for the 5x7 fallback font.
const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

/// Integer upscale factor for a nominal pixel size (5x7 in an 8px cell).
fn bitmap_scale(size: f32) -> u32 {
    ((size / 8.0).round() as u32).max(1)
}

fn bitmap_text_size(size: f32, text: &str) -> (u32, u32) {
    let scale = bitmap_scale(size);
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    // Each glyph advances 6 columns; the last glyph has no trailing gap.
    ((chars * (GLYPH_COLS + 1) - 1) * scale, GLYPH_ROWS * scale)
}

fn draw_bitmap_text(img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: f32, text: &str) {
    let scale = bitmap_scale(size) as i32;
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = bitmap_glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (0b1_0000 >> col) == 0 {
                        continue;
                    }
                    let px = pen_x + col as i32 * scale;
                    let py = y + row as i32 * scale;
                    fill_block(img, color, px, py, scale);
                }
            }
        }
        pen_x += (GLYPH_COLS as i32 + 1) * scale;
    }
}

fn fill_block(img: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: i32) {
    for dy in 0..scale {
        for dx in 0..scale {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Fallback glyphs: digits, uppercase letters, and the apostrophe, which
/// is everything the fixed deck needs. Lowercase maps to uppercase;
/// anything else renders as blank space.
fn bitmap_glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

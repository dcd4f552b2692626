//! Rasterizes one card.
//!
//! Layers are drawn in a fixed order, later layers overwriting earlier
//! pixels: gradient background, gold border, index numbers, name, central
//! category label, corner brackets.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::deck::{split_name, CardSpec};
use crate::palette::card_colors;

use super::font::FontStack;

/// Card width in pixels.
pub const CARD_WIDTH: u32 = 300;
/// Card height in pixels.
pub const CARD_HEIGHT: u32 = 450;

/// Gold used for the border, numbers, label, and corner brackets.
pub const GOLD: Rgb<u8> = Rgb([255, 215, 0]);
/// Card name text color.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Nominal pixel sizes for the three text roles.
const TITLE_SIZE: f32 = 24.0;
const NUMBER_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 48.0;

const BORDER_INSET: i32 = 5;
const BORDER_WIDTH: i32 = 3;
const CORNER_INSET: f32 = 10.0;
const CORNER_LEN: f32 = 30.0;

/// Render one card to a 300x450 RGB raster.
///
/// Infallible for table inputs: drawing clips at the canvas edges and the
/// font stack always has a usable backend.
#[must_use]
pub fn render_card(spec: &CardSpec, fonts: &FontStack) -> RgbImage {
    let (color1, color2) = card_colors(spec.category, spec.index);
    let mut img = gradient(CARD_WIDTH, CARD_HEIGHT, color1, color2);

    draw_border(&mut img);

    // Zero-padded index near both top corners.
    let number = format!("{:02}", spec.index);
    fonts.draw(&mut img, GOLD, 20, 20, NUMBER_SIZE, &number);
    fonts.draw(
        &mut img,
        GOLD,
        CARD_WIDTH as i32 - 40,
        20,
        NUMBER_SIZE,
        &number,
    );

    // Name near the bottom, wrapped onto two lines when long.
    let cx = CARD_WIDTH as i32 / 2;
    match split_name(spec.name) {
        (line1, Some(line2)) => {
            draw_centered(&mut img, fonts, WHITE, cx, CARD_HEIGHT as i32 - 80, TITLE_SIZE, &line1);
            draw_centered(&mut img, fonts, WHITE, cx, CARD_HEIGHT as i32 - 50, TITLE_SIZE, &line2);
        }
        (line, None) => {
            draw_centered(&mut img, fonts, WHITE, cx, CARD_HEIGHT as i32 - 50, TITLE_SIZE, &line);
        }
    }

    // Large category label at the center.
    draw_centered(
        &mut img,
        fonts,
        GOLD,
        cx,
        CARD_HEIGHT as i32 / 2,
        LABEL_SIZE,
        spec.category.label(),
    );

    draw_corner_brackets(&mut img);

    img
}

/// Vertical gradient: row `y` interpolates `top` toward `bottom` with
/// fraction `y / height`, per channel, truncated to integer.
#[must_use]
pub fn gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let f = y as f32 / height as f32;
        let mut row = [0u8; 3];
        for c in 0..3 {
            let a = f32::from(top.0[c]);
            let b = f32::from(bottom.0[c]);
            row[c] = (a + (b - a) * f) as u8;
        }
        for x in 0..width {
            img.put_pixel(x, y, Rgb(row));
        }
    }
    img
}

/// 3px hollow gold rectangle inset 5px from each edge, drawn as three
/// nested 1px outlines growing inward.
fn draw_border(img: &mut RgbImage) {
    for i in 0..BORDER_WIDTH {
        let inset = BORDER_INSET + i;
        let rect = Rect::at(inset, inset).of_size(
            CARD_WIDTH - 2 * inset as u32,
            CARD_HEIGHT - 2 * inset as u32,
        );
        draw_hollow_rect_mut(img, rect, GOLD);
    }
}

fn draw_centered(
    img: &mut RgbImage,
    fonts: &FontStack,
    color: Rgb<u8>,
    cx: i32,
    cy: i32,
    size: f32,
    text: &str,
) {
    let (w, h) = fonts.measure(size, text);
    fonts.draw(img, color, cx - w as i32 / 2, cy - h as i32 / 2, size, text);
}

/// Eight 30px segments, two per corner, forming right-angle brackets
/// inset 10px from the edges. Each segment is doubled for a 2px stroke.
fn draw_corner_brackets(img: &mut RgbImage) {
    let w = CARD_WIDTH as f32;
    let h = CARD_HEIGHT as f32;
    let (i, l) = (CORNER_INSET, CORNER_LEN);

    // (corner point, horizontal end, vertical end)
    let corners = [
        ((i, i), (i + l, i), (i, i + l)),
        ((w - i, i), (w - i - l, i), (w - i, i + l)),
        ((i, h - i), (i + l, h - i), (i, h - i - l)),
        ((w - i, h - i), (w - i - l, h - i), (w - i, h - i - l)),
    ];

    for (origin, h_end, v_end) in corners {
        draw_thick_segment(img, origin, h_end);
        draw_thick_segment(img, origin, v_end);
    }
}

fn draw_thick_segment(img: &mut RgbImage, start: (f32, f32), end: (f32, f32)) {
    draw_line_segment_mut(img, start, end, GOLD);
    // Second pass offset perpendicular to the segment direction.
    let (dx, dy) = if start.1 == end.1 { (0.0, 1.0) } else { (1.0, 0.0) };
    draw_line_segment_mut(
        img,
        (start.0 + dx, start.1 + dy),
        (end.0 + dx, end.1 + dy),
        GOLD,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Category;

    #[test]
    fn test_gradient_endpoints() {
        let top = Rgb([10, 200, 0]);
        let bottom = Rgb([250, 20, 100]);
        let img = gradient(4, 100, top, bottom);

        assert_eq!(*img.get_pixel(0, 0), top);
        // Final row is within one unit of the bottom color per channel.
        let last = img.get_pixel(0, 99);
        for c in 0..3 {
            assert!(i16::from(last.0[c]).abs_diff(i16::from(bottom.0[c])) <= 3);
        }
    }

    #[test]
    fn test_gradient_monotonic_per_channel() {
        let img = gradient(1, 128, Rgb([200, 10, 128]), Rgb([0, 240, 128]));
        for y in 1..128 {
            let prev = img.get_pixel(0, y - 1);
            let cur = img.get_pixel(0, y);
            assert!(cur.0[0] <= prev.0[0]); // descending channel
            assert!(cur.0[1] >= prev.0[1]); // ascending channel
            assert_eq!(cur.0[2], 128); // constant channel
        }
    }

    #[test]
    fn test_card_dimensions() {
        let spec = CardSpec::new(1, "The Fool", Category::Major);
        let img = render_card(&spec, &FontStack::bitmap_only());
        assert_eq!(img.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn test_border_is_gold() {
        let spec = CardSpec::new(40, "Four of Cups", Category::Cups);
        let img = render_card(&spec, &FontStack::bitmap_only());

        // Sample border mid-edges, clear of text and brackets.
        for inset in 5..8 {
            assert_eq!(*img.get_pixel(150, inset), GOLD);
            assert_eq!(*img.get_pixel(150, CARD_HEIGHT - 1 - inset), GOLD);
            assert_eq!(*img.get_pixel(inset, 225), GOLD);
            assert_eq!(*img.get_pixel(CARD_WIDTH - 1 - inset, 225), GOLD);
        }
    }

    #[test]
    fn test_corner_brackets_present() {
        let spec = CardSpec::new(94, "The Heart's Desire", Category::Hidden);
        let img = render_card(&spec, &FontStack::bitmap_only());

        // Top-left bracket: horizontal and vertical arms.
        assert_eq!(*img.get_pixel(25, 10), GOLD);
        assert_eq!(*img.get_pixel(10, 25), GOLD);
        // Bottom-right bracket.
        assert_eq!(*img.get_pixel(CARD_WIDTH - 25, CARD_HEIGHT - 10), GOLD);
    }

    #[test]
    fn test_background_matches_palette() {
        let spec = CardSpec::new(23, "Ace of Wands", Category::Wands);
        let img = render_card(&spec, &FontStack::bitmap_only());
        // Row 0 just inside the corner region is pure top color.
        assert_eq!(*img.get_pixel(150, 0), Rgb([150, 50, 0]));
    }

    #[test]
    fn test_deterministic_render() {
        let spec = CardSpec::new(79, "The Hidden Oracle", Category::Hidden);
        let fonts = FontStack::bitmap_only();
        let a = render_card(&spec, &fonts);
        let b = render_card(&spec, &fonts);
        assert_eq!(a.as_raw(), b.as_raw());
    }
}

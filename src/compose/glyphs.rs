//! Built-in 3x5 bitmap digits for frame-index labels.
//!
//! Labels only ever show decimal indices, and a fixed bitmap keeps atlas output byte-identical
//! across machines regardless of installed fonts.

pub(crate) const GLYPH_W: u32 = 3;
pub(crate) const GLYPH_H: u32 = 5;
/// Blank columns between glyphs.
pub(crate) const GLYPH_GAP: u32 = 1;

// One byte per row, low three bits, MSB of the three is the left column.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Whether glyph pixel `(x, y)` of `digit` is set. Non-digits render blank.
pub(crate) fn digit_pixel(digit: char, x: u32, y: u32) -> bool {
    let Some(d) = digit.to_digit(10) else {
        return false;
    };
    if x >= GLYPH_W || y >= GLYPH_H {
        return false;
    }
    DIGITS[d as usize][y as usize] & (1 << (GLYPH_W - 1 - x)) != 0
}

/// Unscaled pixel width of `text`.
pub(crate) fn text_width(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * GLYPH_W + (n - 1) * GLYPH_GAP
}

#[cfg(test)]
#[path = "../../tests/unit/compose/glyphs.rs"]
mod tests;

//! 3x5 bitmap digits, for drawing numerals on backends without a font.

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;
const SPACING: u32 = 1;

// one row per entry, most significant of the low 3 bits is the leftmost pixel
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// A filled square of the scaled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// Width of `text` in glyph pixels. Non-digits are skipped.
pub fn text_width(text: &str) -> u32 {
    let count = text.chars().filter(char::is_ascii_digit).count() as u32;

    match count {
        0 => 0,
        n => n * GLYPH_WIDTH + (n - 1) * SPACING,
    }
}

/// Lays `text` out centred in the `width` x `height` box at `(x, y)`,
/// scaled to fill roughly half of it.
pub fn blocks(text: &str, x: i32, y: i32, width: u32, height: u32) -> Vec<Block> {
    let columns = text_width(text);

    if columns == 0 {
        return Vec::new();
    }

    let size = ((width / 2) / columns).min((height / 2) / GLYPH_HEIGHT).max(1);
    let left = x + (width as i32 - (columns * size) as i32) / 2;
    let top = y + (height as i32 - (GLYPH_HEIGHT * size) as i32) / 2;

    let mut output = Vec::new();

    for (index, digit) in text.chars().filter_map(|c| c.to_digit(10)).enumerate() {
        let origin = left + (index as u32 * (GLYPH_WIDTH + SPACING) * size) as i32;

        for (row, bits) in DIGITS[digit as usize].iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - column)) != 0 {
                    output.push(Block {
                        x: origin + (column * size) as i32,
                        y: top + (row as u32 * size) as i32,
                        size,
                    });
                }
            }
        }
    }

    output
}

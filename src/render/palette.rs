//! Tile colours, shared by every renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS form, e.g. `#eee4da`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const BOARD: Rgb = Rgb(0xbb, 0xad, 0xa0);
pub const EMPTY: Rgb = Rgb(0xcd, 0xc1, 0xb4);
pub const OVERLAY: Rgb = Rgb(0xee, 0xe4, 0xda);

const DARK_TEXT: Rgb = Rgb(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Rgb = Rgb(0xf9, 0xf6, 0xf2);
const BEYOND: Rgb = Rgb(0x3c, 0x3a, 0x32);

/// Background of a tile. Zero is an empty cell.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => EMPTY,
        2 => Rgb(0xee, 0xe4, 0xda),
        4 => Rgb(0xed, 0xe0, 0xc8),
        8 => Rgb(0xf2, 0xb1, 0x79),
        16 => Rgb(0xf5, 0x95, 0x63),
        32 => Rgb(0xf6, 0x7c, 0x5f),
        64 => Rgb(0xf6, 0x5e, 0x3b),
        128 => Rgb(0xed, 0xcf, 0x72),
        256 => Rgb(0xed, 0xcc, 0x61),
        512 => Rgb(0xed, 0xc8, 0x50),
        1024 => Rgb(0xed, 0xc5, 0x3f),
        2048 => Rgb(0xed, 0xc2, 0x2e),
        _ => BEYOND,
    }
}

/// Numeral colour, dark on the two palest tiles.
pub fn text_color(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

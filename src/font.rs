//! Built-in 5x6 bitmap font.
//!
//! Covers lowercase letters, digits and `,` `.` `-`. Every other character
//! (including uppercase, `j`, `z` and space) resolves to [`Glyph::BLANK`]
//! and renders as empty space.

/// Glyph width in mask cells.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in mask cells.
pub const GLYPH_HEIGHT: u32 = 6;
/// Horizontal advance per character in mask cells (glyph plus one gap).
pub const GLYPH_ADVANCE: u32 = 6;

/// A 5-wide by 6-tall binary mask. Each row holds five bits, the most
/// significant of which (bit 4) is the leftmost cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    /// The empty glyph.
    pub const BLANK: Self = Self::new([0; GLYPH_HEIGHT as usize]);

    /// Create a glyph from its rows, top first.
    #[must_use]
    pub const fn new(rows: [u8; GLYPH_HEIGHT as usize]) -> Self {
        Self { rows }
    }

    /// Whether the cell at `row`, `col` is lit. Out-of-range cells are unlit.
    #[must_use]
    pub const fn is_set(&self, row: u32, col: u32) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        (self.rows[row as usize] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
    }

    /// True if no cell is lit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }
}

/// Look up the glyph for `c`, falling back to [`Glyph::BLANK`].
#[must_use]
pub fn glyph(c: char) -> &'static Glyph {
    lookup(c).unwrap_or(&Glyph::BLANK)
}

/// Look up the glyph for `c` if the font has one.
#[must_use]
#[rustfmt::skip]
pub fn lookup(c: char) -> Option<&'static Glyph> {
    let glyph = match c {
        'a' => &A, 'b' => &B, 'c' => &C, 'd' => &D, 'e' => &E, 'f' => &F,
        'g' => &G, 'h' => &H, 'i' => &I, 'k' => &K, 'l' => &L, 'm' => &M,
        'n' => &N, 'o' => &O, 'p' => &P, 'q' => &Q, 'r' => &R, 's' => &S,
        't' => &T, 'u' => &U, 'v' => &V, 'w' => &W, 'x' => &X, 'y' => &Y,
        '0' => &DIGIT_0, '1' => &DIGIT_1, '2' => &DIGIT_2, '3' => &DIGIT_3,
        '4' => &DIGIT_4, '5' => &DIGIT_5, '6' => &DIGIT_6, '7' => &DIGIT_7,
        '8' => &DIGIT_8, '9' => &DIGIT_9,
        ',' => &COMMA, '.' => &PERIOD, '-' => &HYPHEN,
        _ => return None,
    };
    Some(glyph)
}

#[rustfmt::skip]
mod table {
    use super::Glyph;

    pub(super) const A: Glyph = Glyph::new([0b00000, 0b01100, 0b00010, 0b01110, 0b10010, 0b01110]);
    pub(super) const B: Glyph = Glyph::new([0b10000, 0b10000, 0b11100, 0b10010, 0b10010, 0b11100]);
    pub(super) const C: Glyph = Glyph::new([0b00000, 0b01100, 0b10010, 0b10000, 0b10010, 0b01100]);
    pub(super) const D: Glyph = Glyph::new([0b00010, 0b01110, 0b10010, 0b10010, 0b10010, 0b01110]);
    pub(super) const E: Glyph = Glyph::new([0b00000, 0b01100, 0b10010, 0b11110, 0b10000, 0b01110]);
    pub(super) const F: Glyph = Glyph::new([0b00110, 0b01000, 0b11110, 0b01000, 0b01000, 0b01000]);
    pub(super) const G: Glyph = Glyph::new([0b00000, 0b01100, 0b10010, 0b01110, 0b00010, 0b01100]);
    pub(super) const H: Glyph = Glyph::new([0b10000, 0b10000, 0b11100, 0b10010, 0b10010, 0b10010]);
    pub(super) const I: Glyph = Glyph::new([0b00100, 0b00000, 0b00100, 0b00100, 0b00100, 0b00100]);
    pub(super) const K: Glyph = Glyph::new([0b01000, 0b01000, 0b01010, 0b01100, 0b01100, 0b01010]);
    pub(super) const L: Glyph = Glyph::new([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]);
    pub(super) const M: Glyph = Glyph::new([0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10101]);
    pub(super) const N: Glyph = Glyph::new([0b00000, 0b11100, 0b10010, 0b10010, 0b10010, 0b10010]);
    pub(super) const O: Glyph = Glyph::new([0b00000, 0b01100, 0b10010, 0b10010, 0b10010, 0b01100]);
    pub(super) const P: Glyph = Glyph::new([0b11100, 0b10010, 0b10010, 0b11100, 0b10000, 0b10000]);
    pub(super) const Q: Glyph = Glyph::new([0b01110, 0b10010, 0b10010, 0b01110, 0b00010, 0b00010]);
    pub(super) const R: Glyph = Glyph::new([0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]);
    pub(super) const S: Glyph = Glyph::new([0b00000, 0b01110, 0b10000, 0b01100, 0b00010, 0b11100]);
    pub(super) const T: Glyph = Glyph::new([0b01000, 0b11110, 0b01000, 0b01000, 0b01010, 0b00100]);
    pub(super) const U: Glyph = Glyph::new([0b00000, 0b10010, 0b10010, 0b10010, 0b10010, 0b01110]);
    pub(super) const V: Glyph = Glyph::new([0b00000, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100]);
    pub(super) const W: Glyph = Glyph::new([0b00000, 0b10001, 0b10101, 0b10101, 0b10101, 0b01111]);
    pub(super) const X: Glyph = Glyph::new([0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]);
    pub(super) const Y: Glyph = Glyph::new([0b00000, 0b10010, 0b10010, 0b01110, 0b00010, 0b01100]);

    pub(super) const DIGIT_0: Glyph = Glyph::new([0b01100, 0b10010, 0b10010, 0b10010, 0b10010, 0b01100]);
    pub(super) const DIGIT_1: Glyph = Glyph::new([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]);
    pub(super) const DIGIT_2: Glyph = Glyph::new([0b01100, 0b10010, 0b00010, 0b01100, 0b10000, 0b11110]);
    pub(super) const DIGIT_3: Glyph = Glyph::new([0b01100, 0b10010, 0b00100, 0b00010, 0b10010, 0b01100]);
    pub(super) const DIGIT_4: Glyph = Glyph::new([0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]);
    pub(super) const DIGIT_5: Glyph = Glyph::new([0b11100, 0b10000, 0b11100, 0b00010, 0b10010, 0b01100]);
    pub(super) const DIGIT_6: Glyph = Glyph::new([0b01100, 0b10000, 0b11100, 0b10010, 0b10010, 0b01100]);
    pub(super) const DIGIT_7: Glyph = Glyph::new([0b11110, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]);
    pub(super) const DIGIT_8: Glyph = Glyph::new([0b01100, 0b10010, 0b01100, 0b10010, 0b10010, 0b01100]);
    pub(super) const DIGIT_9: Glyph = Glyph::new([0b01100, 0b10010, 0b10010, 0b01110, 0b00010, 0b01100]);

    pub(super) const COMMA: Glyph = Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00010, 0b00100]);
    pub(super) const PERIOD: Glyph = Glyph::new([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100]);
    pub(super) const HYPHEN: Glyph = Glyph::new([0b00000, 0b00000, 0b00000, 0b11110, 0b00000, 0b00000]);
}

use table::*;

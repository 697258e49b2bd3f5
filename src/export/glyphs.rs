//! 8×8 bitmap glyphs for raster labels.
//!
//! ASCII comes from `font8x8`. The key-label glyphs (modifiers, transparent,
//! no-op) are not in any `font8x8` table, so they are drawn here.

use font8x8::{UnicodeFonts, BASIC_FONTS};

/// One glyph: eight rows, bit `n` of a row is column `n` from the left.
pub type Glyph = [u8; 8];

const SHIFT: [&str; 8] = [
    "...##...",
    "..#..#..",
    ".#....#.",
    "###..###",
    "..#..#..",
    "..#..#..",
    "..####..",
    "........",
];

const CONTROL: [&str; 8] = [
    "........",
    "...##...",
    "..#..#..",
    ".#....#.",
    "#......#",
    "........",
    "........",
    "........",
];

const OPTION: [&str; 8] = [
    "........",
    "###..###",
    "..#.....",
    "...#....",
    "....#...",
    ".....###",
    "........",
    "........",
];

const COMMAND: [&str; 8] = [
    ".##..##.",
    "#..##..#",
    ".######.",
    "..#..#..",
    ".######.",
    "#..##..#",
    ".##..##.",
    "........",
];

const TRANSPARENT: [&str; 8] = [
    "########",
    "#......#",
    ".#....#.",
    ".#....#.",
    "..#..#..",
    "..#..#..",
    "...##...",
    "........",
];

const NO_OP: [&str; 8] = [
    "#......#",
    ".#....#.",
    "..#..#..",
    "...##...",
    "..#..#..",
    ".#....#.",
    "#......#",
    "........",
];

/// Converts an ASCII picture (`#` = ink) into glyph rows.
const fn from_picture(picture: &[&str; 8]) -> Glyph {
    let mut glyph = [0u8; 8];
    let mut row = 0;
    while row < 8 {
        let bytes = picture[row].as_bytes();
        let mut col = 0;
        while col < 8 && col < bytes.len() {
            if bytes[col] == b'#' {
                glyph[row] |= 1u8 << col;
            }
            col += 1;
        }
        row += 1;
    }
    glyph
}

/// Looks up the bitmap for a character, falling back to `?`.
#[must_use]
pub fn glyph_for(ch: char) -> Glyph {
    match ch {
        '⇧' => from_picture(&SHIFT),
        '⌃' => from_picture(&CONTROL),
        '⌥' => from_picture(&OPTION),
        '⌘' => from_picture(&COMMAND),
        '▽' => from_picture(&TRANSPARENT),
        '✗' => from_picture(&NO_OP),
        _ => BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]),
    }
}

/// True when bit (`row`, `col`) of the glyph is inked.
#[must_use]
pub const fn is_set(glyph: &Glyph, row: usize, col: usize) -> bool {
    (glyph[row] >> col) & 1 == 1
}

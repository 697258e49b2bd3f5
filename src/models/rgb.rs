//! Opaque 24-bit colors used for key fills, borders and the canvas.

use anyhow::{bail, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color with 8-bit red, green and blue channels.
///
/// Category colors and the configured background are written as `#RRGGBB`;
/// the raster renderer consumes them as opaque [`Rgba`] pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Label and title ink.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Default canvas background.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Builds a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reads `#RRGGBB` (the `#` is optional, digits are case-insensitive).
    ///
    /// ```
    /// use keyboard_visualizer::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#CC0000").unwrap(), RgbColor::new(0xCC, 0, 0));
    /// assert!(RgbColor::from_hex("red").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("Invalid color '{hex}': expected #RRGGBB");
        }

        let value = u32::from_str_radix(digits, 16)?;
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self::new(r, g, b))
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Fully opaque pixel for raster output.
    #[must_use]
    pub const fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_parse() {
        assert_eq!(
            RgbColor::from_hex("#FFCCCC").unwrap(),
            RgbColor::new(0xFF, 0xCC, 0xCC)
        );
        assert_eq!(
            RgbColor::from_hex("0000cc").unwrap(),
            RgbColor::new(0, 0, 0xCC)
        );
        assert_eq!(
            RgbColor::from_hex(" #f0f0f0\n").unwrap(),
            RgbColor::new(0xF0, 0xF0, 0xF0)
        );
    }

    #[test]
    fn test_malformed_hex_is_rejected() {
        for input in ["", "#", "#CCC", "#CCCCCCC", "#GG0000", "+12345", "white", "#ÄÄÄ"] {
            assert!(RgbColor::from_hex(input).is_err(), "{input:?} parsed");
        }
    }

    #[test]
    fn test_hex_output_is_uppercase() {
        let color = RgbColor::from_hex("#cccc00").unwrap();
        assert_eq!(color.to_hex(), "#CCCC00");
        assert_eq!(color.to_string(), "#CCCC00");
    }

    #[test]
    fn test_pixel_is_opaque() {
        assert_eq!(RgbColor::new(0x66, 0x66, 0x66).to_rgba(), Rgba([0x66, 0x66, 0x66, 255]));
        assert_eq!(RgbColor::default(), RgbColor::WHITE);
    }
}

//! sRGB block colors
//!
//! Colors travel through the generator as 8-bit sRGB triples and are parsed
//! from / printed as `#RRGGBB` hex strings. The renderer receives linear RGB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Fallback for every empty or missing color sample.
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);

    /// Create a color from 8-bit sRGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the `#RGB` shorthand (case-insensitive).
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || Error::InvalidColor(text.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_u32(packed))
            }
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear-light RGB in `[0, 1]`.
    pub fn to_linear(&self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }

    /// Linear-light RGBA with opaque alpha.
    pub fn to_linear_rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, 1.0]
    }
}

#[inline]
fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Color::from_hex("#FF69B4").unwrap(), Color::rgb(0xFF, 0x69, 0xB4));
        assert_eq!(Color::from_hex("228b22").unwrap(), Color::rgb(0x22, 0x8B, 0x22));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::RED);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Color::from_hex("#12345"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#GG0000"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::from_hex(""), Err(Error::InvalidColor(_))));
        assert!(Color::from_hex("#+12345").is_err());
        assert!(Color::from_hex("##FF0000").is_err());
        assert!(Color::from_hex("##F00").is_err());
    }

    #[test]
    fn test_hex_is_uppercase() {
        assert_eq!(Color::rgb(0xff, 0xb6, 0xc1).to_hex(), "#FFB6C1");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let white = Color::WHITE.to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_midpoint_is_darker() {
        let [r, _, _] = Color::rgb(128, 0, 0).to_linear();
        assert!(r > 0.2 && r < 0.23, "got {r}");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0x4A, 0x4A, 0x4A)).unwrap();
        assert_eq!(json, "\"#4A4A4A\"");
        let back: Color = serde_json::from_str("\"#ffff00\"").unwrap();
        assert_eq!(back, Color::rgb(0xFF, 0xFF, 0x00));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}

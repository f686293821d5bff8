//! RGBA colors as picked in the form.
//!
//! Colors travel between JavaScript and Rust as CSS hex strings
//! (`#rgb`, `#rrggbb` or `#rrggbbaa`), so [`Rgba`] serializes to and
//! from that representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string has a length other than 3, 6 or 8 hex digits.
    #[error("Invalid color length in {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidLength(String),

    /// The string contains a character that is not a hex digit.
    #[error("Invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the default module color.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    /// Opaque white, the default background color.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    /// All channels zero.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a hex color. The leading `#` is optional and digits are
    /// case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let short = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);

        let parsed = match digits.len() {
            3 => (short(0), short(1), short(2), Ok(255)),
            6 => (channel(0), channel(2), channel(4), Ok(255)),
            8 => (channel(0), channel(2), channel(4), channel(6)),
            _ => return Err(ColorError::InvalidLength(hex.to_string())),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::new(r, g, b, a)),
            _ => Err(ColorError::InvalidDigit(hex.to_string())),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Convert to the image crate's pixel type.
    #[inline]
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

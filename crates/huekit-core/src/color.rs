//! The Color value type and hex string codec.
//!
//! Stores RGBA as four 8-bit channels. Hex strings use the `#RRGGBB` /
//! `#AARRGGBB` convention; parsing is strict and reports malformed input
//! through [`ParseHexError`] rather than substituting a fallback color.

use peniko::Color as PenikoColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error produced when parsing a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// The string (after the optional `#`) was not 6 or 8 digits long.
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    /// A character outside `[0-9A-Fa-f]` was found.
    #[error("invalid hex digit {0:?} in color string")]
    InvalidDigit(char),
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Format as an uppercase hex string with a leading `#`.
    ///
    /// Returns `#RRGGBB`, or `#AARRGGBB` when `include_alpha` is set.
    pub fn to_hex(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// Parse a hex string, with or without a leading `#`.
    ///
    /// Accepts exactly 6 digits (`RRGGBB`, fully opaque) or 8 digits
    /// (`AARRGGBB`). Anything else is an error; there is no fallback color.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }

        match digits.len() {
            6 => Ok(Self::from_rgb(
                parse_channel(&digits[0..2])?,
                parse_channel(&digits[2..4])?,
                parse_channel(&digits[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_channel(&digits[2..4])?,
                parse_channel(&digits[4..6])?,
                parse_channel(&digits[6..8])?,
                parse_channel(&digits[0..2])?,
            )),
            other => Err(ParseHexError::InvalidLength(other)),
        }
    }
}

fn parse_channel(pair: &str) -> Result<u8, ParseHexError> {
    u8::from_str_radix(pair, 16)
        .map_err(|_| ParseHexError::InvalidDigit(pair.chars().next().unwrap_or('?')))
}

/// Check whether a string is a well-formed hex color.
///
/// True iff, after stripping one leading `#`, the string is 6 or 8 ASCII hex
/// digits. Passing this check guarantees [`Color::from_hex`] succeeds.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    (digits.len() == 6 || digits.len() == 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

impl From<Color> for PenikoColor {
    fn from(color: Color) -> Self {
        PenikoColor::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<PenikoColor> for Color {
    fn from(color: PenikoColor) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

//! Model a color in the sRGB color space as three gamma encoded bytes.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A 24-bit color in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Color {
    /// Create a new color with RGB (red, green, blue) components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Parse a color from 6 hex digits with an optional leading `#`. Either case
/// is accepted for the digits.
pub fn parse_color(hex: &str) -> Result<Color> {
    let invalid = || Error::InvalidColorFormat {
        input: hex.to_owned(),
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

    Ok(Color::new(byte(0)?, byte(2)?, byte(4)?))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

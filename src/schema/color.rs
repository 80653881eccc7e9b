//! RGB color type used for cell state and placement palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
///
/// Serializes as a `#rrggbb` hex string so configs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color {0:?} (expected #rrggbb)")]
    InvalidHex(String),
}

/// Neon placement colors offered to players by default.
pub const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb::new(0xef, 0x44, 0x44), // red
    Rgb::new(0xf9, 0x73, 0x16), // orange
    Rgb::new(0xea, 0xb3, 0x08), // yellow
    Rgb::new(0x22, 0xc5, 0x5e), // green
    Rgb::new(0x06, 0xb6, 0xd4), // cyan
    Rgb::new(0x3b, 0x82, 0xf6), // blue
    Rgb::new(0xa8, 0x55, 0xf7), // purple
    Rgb::new(0xec, 0x48, 0x99), // pink
    Rgb::new(0x14, 0xb8, 0xa6), // teal
    Rgb::new(0xf4, 0x3f, 0x5e), // rose
];

/// Default palette as an owned list (serde default for configs).
pub fn default_palette() -> Vec<Rgb> {
    DEFAULT_PALETTE.to_vec()
}

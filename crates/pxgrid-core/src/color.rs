//! The [`Rgba`] color type and hex parsing.

use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into `0xAARRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from `0xAARRGGBB`.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self {
            a: ((v >> 24) & 0xFF) as u8,
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when the alpha is not 255.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

// ---------------------------------------------------------------------------
// Hex parsing
// ---------------------------------------------------------------------------

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string is not `#` followed by 6 or 8 hex digits.
    BadLength,
    /// A character was not a hex digit.
    BadDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::BadLength => write!(f, "expected #RRGGBB or #RRGGBBAA"),
            ParseColorError::BadDigit => write!(f, "invalid hex digit"),
        }
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError::BadLength)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::BadLength);
        }
        if !hex.is_ascii() {
            return Err(ParseColorError::BadDigit);
        }
        let byte = |i: usize| -> Result<u8, ParseColorError> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError::BadDigit)
        };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: if hex.len() == 8 { byte(6)? } else { 255 },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trip() {
        let c = Rgba::rgba(0xAB, 0xCD, 0xEF, 0x7F);
        assert_eq!(Rgba::from_u32(c.to_u32()), c);
        assert_eq!(Rgba::rgb(1, 2, 3).to_u32(), 0xFF010203);
    }

    #[test]
    fn parse_hex_rgb() {
        let c: Rgba = "#FFA500".parse().unwrap();
        assert_eq!(c, Rgba::rgb(0xFF, 0xA5, 0x00));
        // Lowercase works too.
        assert_eq!("#a52a2a".parse::<Rgba>().unwrap(), Rgba::rgb(0xA5, 0x2A, 0x2A));
    }

    #[test]
    fn parse_hex_rgba() {
        let c: Rgba = "#00FF0080".parse().unwrap();
        assert_eq!(c, Rgba::rgba(0, 255, 0, 0x80));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("FFA500".parse::<Rgba>(), Err(ParseColorError::BadLength));
        assert_eq!("#FFA5".parse::<Rgba>(), Err(ParseColorError::BadLength));
        assert_eq!("#GGGGGG".parse::<Rgba>(), Err(ParseColorError::BadDigit));
    }

    #[test]
    fn display_round_trip() {
        let c = Rgba::rgb(0xFF, 0xC0, 0xCB);
        assert_eq!(c.to_string(), "#FFC0CB");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);
        assert_eq!(Rgba::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn transparency() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::WHITE.is_transparent());
    }
}

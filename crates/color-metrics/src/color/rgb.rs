//! 8-bit RGB color type
//!
//! The metric family only ever reads channel values, so the central
//! abstraction is the [`Color`] accessor trait. [`Rgb`] is the concrete
//! value type used by the palette and by callers that parse hex strings.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Read-only access to the three 8-bit channels of a color.
///
/// Metrics are generic over this trait so that callers can pass their own
/// pixel types without converting first.
pub trait Color {
    /// Red channel (0..=255)
    fn red(&self) -> u8;
    /// Green channel (0..=255)
    fn green(&self) -> u8;
    /// Blue channel (0..=255)
    fn blue(&self) -> u8;
}

/// A color with three 8-bit channels.
///
/// Values are the raw channel readings; no gamma handling happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create an Rgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use color_metrics::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use color_metrics::Rgb;
    /// assert_eq!(Rgb::from_u8(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Color for Rgb {
    #[inline]
    fn red(&self) -> u8 {
        self.r
    }

    #[inline]
    fn green(&self) -> u8 {
        self.g
    }

    #[inline]
    fn blue(&self) -> u8 {
        self.b
    }
}

impl Color for [u8; 3] {
    #[inline]
    fn red(&self) -> u8 {
        self[0]
    }

    #[inline]
    fn green(&self) -> u8 {
        self[1]
    }

    #[inline]
    fn blue(&self) -> u8 {
        self[2]
    }
}

impl Color for (u8, u8, u8) {
    #[inline]
    fn red(&self) -> u8 {
        self.0
    }

    #[inline]
    fn green(&self) -> u8 {
        self.1
    }

    #[inline]
    fn blue(&self) -> u8 {
        self.2
    }
}

impl<C: Color + ?Sized> Color for &C {
    #[inline]
    fn red(&self) -> u8 {
        (**self).red()
    }

    #[inline]
    fn green(&self) -> u8 {
        (**self).green()
    }

    #[inline]
    fn blue(&self) -> u8 {
        (**self).blue()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_u8(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_metrics::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::from_u8(255, 255, 255));
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::from_u8(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Byte slicing below requires single-byte characters
        if !s.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

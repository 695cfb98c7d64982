// SPDX-License-Identifier: MIT
//
// 8-bit sRGB triples and their `#rrggbb` text form.
//
// Hex strings are the interchange format for everything outside the color
// math: seeds arrive as hex, ramps leave as hex, and a persisted theme is
// nothing but hex. Input accepts `#RGB` / `#RRGGBB` in either case with the
// `#` optional; output is always six lowercase digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::srgb_to_linear;

/// Why a string could not be read as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// The digit count (after any leading `#`) was not 3 or 6.
    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),

    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// A gamma-encoded sRGB color with 8 bits per channel.
///
/// `Display` and `Debug` both print `#rrggbb`. With serde it is a plain
/// hex string, so configs and JSON stay human-readable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize gamma-encoded components. Each is clamped to [0, 1], then
    /// scaled and rounded half-up.
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Channels as gamma-encoded floats in [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels as linear-light floats in [0, 1].
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }
}

impl FromStr for Rgb8 {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }

        // All ASCII past this point, so byte indexing is char indexing.
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0]);
                let g = hex_digit(bytes[1]);
                let b = hex_digit(bytes[2]);
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Ok(Self::new(
                hex_byte(bytes[0], bytes[1]),
                hex_byte(bytes[2], bytes[3]),
                hex_byte(bytes[4], bytes[5]),
            )),
            n => Err(ParseHexError::InvalidLength(n)),
        }
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ParseHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb8> for String {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Value of one ASCII hex digit. Callers have already validated the byte.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) << 4 | hex_digit(lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_long_form() {
        assert_eq!("#ff8000".parse::<Rgb8>(), Ok(Rgb8::new(255, 128, 0)));
    }

    #[test]
    fn parses_shorthand() {
        assert_eq!("#f80".parse::<Rgb8>(), Ok(Rgb8::new(255, 136, 0)));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!("00ff00".parse::<Rgb8>(), Ok(Rgb8::new(0, 255, 0)));
    }

    #[test]
    fn case_insensitive() {
        let upper: Rgb8 = "#ABCDEF".parse().unwrap();
        let lower: Rgb8 = "#abcdef".parse().unwrap();
        let bare: Rgb8 = "abcdef".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower, bare);
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!("#12345".parse::<Rgb8>(), Err(ParseHexError::InvalidLength(5)));
        assert_eq!("".parse::<Rgb8>(), Err(ParseHexError::InvalidLength(0)));
        assert_eq!("#ff000080".parse::<Rgb8>(), Err(ParseHexError::InvalidLength(8)));
    }

    #[test]
    fn rejects_bad_digit() {
        assert_eq!("xyz".parse::<Rgb8>(), Err(ParseHexError::InvalidDigit('x')));
        assert_eq!("#12g456".parse::<Rgb8>(), Err(ParseHexError::InvalidDigit('g')));
        assert_eq!("#+12345".parse::<Rgb8>(), Err(ParseHexError::InvalidDigit('+')));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        assert_eq!("##fff".parse::<Rgb8>(), Err(ParseHexError::InvalidDigit('#')));
    }

    #[test]
    fn display_is_lowercase_long_form() {
        assert_eq!(Rgb8::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
        assert_eq!("#FFF".parse::<Rgb8>().unwrap().to_string(), "#ffffff");
        assert_eq!(format!("{:?}", Rgb8::BLACK), "#000000");
    }

    #[test]
    fn quantization_clamps_and_rounds() {
        assert_eq!(Rgb8::from_srgb(-0.2, 1.3, 0.5), Rgb8::new(0, 255, 128));
        assert_eq!(Rgb8::from_srgb(0.0, 1.0, 127.4 / 255.0), Rgb8::new(0, 255, 127));
    }

    #[test]
    fn linearization_matches_transfer_function() {
        let (r, g, b) = Rgb8::WHITE.to_linear_srgb();
        assert!((r - 1.0).abs() < 1e-12 && (g - 1.0).abs() < 1e-12 && (b - 1.0).abs() < 1e-12);
        let (r, _, _) = Rgb8::BLACK.to_linear_srgb();
        assert!(r.abs() < 1e-12);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseHexError::InvalidLength(5).to_string(),
            "expected 3 or 6 hex digits, found 5"
        );
        assert_eq!(ParseHexError::InvalidDigit('z').to_string(), "invalid hex digit 'z'");
    }
}

//! # qp-color: OKLCH color science for qp-ramp
//!
//! The numeric foundation of the palette engine:
//!
//! - **[`hex`]**: `Rgb8` byte triples, `#rrggbb` parsing and formatting
//! - **[`color`]**: `Color` (OKLCH), the sRGB transfer function, Oklab
//!   matrices, and chroma-reducing gamut mapping
//! - **[`hsl`]**: CSS HSL conversions for slider-based pickers
//!
//! Everything here is a pure function of its inputs. Nothing allocates
//! except hex formatting, and nothing can fail except parsing.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Lightness/chroma/hue locals are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod hex;
pub mod hsl;

pub use color::{
    ACHROMATIC_EPSILON, Color, GAMUT_EPSILON, GAMUT_ITERATIONS, hex_to_oklch, map_to_gamut, oklch_to_hex,
    srgb_to_linear,
};
pub use hex::{ParseHexError, Rgb8};
pub use hsl::Hsl;

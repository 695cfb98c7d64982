//! # qp-theme: Perceptual palette engine
//!
//! Turns a single seed color into a full 13-step palette and the CSS that
//! exposes it. One hex string in, a complete light/dark theme out.
//!
//! # Architecture
//!
//! ```text
//! seed hex (per slot: primary / secondary1 / secondary2)
//!     │
//!     ▼
//! qp-color:       hex → linear sRGB → Oklab → OKLCH (keep C, H)
//!     │
//!     ▼
//! ramp.rs:        13 fixed lightness rungs, gamut-mapped by chroma
//!     │
//!     ▼
//! contrast.rs:    black/white text for each exact seed
//!     │
//!     ▼
//! stylesheet.rs:  --color-<slot>-<step>, accents, surfaces
//! ```
//!
//! # Statelessness
//!
//! Nothing here caches or mutates shared state. The only value a caller
//! needs to keep is [`ThemeSeeds`]; ramps and stylesheets are recomputed
//! from it and are identical every time.

pub mod builtin;
pub mod contrast;
pub mod ramp;
pub mod stylesheet;

pub use contrast::{contrast_ratio, contrast_text_color, relative_luminance};
pub use ramp::{Ramp, STEPS, generate_neutral_ramp, generate_ramp};
pub use stylesheet::{Slot, ThemeSeeds};

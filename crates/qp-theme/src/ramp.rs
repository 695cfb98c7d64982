//! Thirteen-step lightness ramps.
//!
//! A ramp keeps the seed's hue and chroma and throws its lightness away.
//! Each step gets a lightness from a fixed linear ladder in OKLCH, so the
//! same step number is equally light in every ramp regardless of seed:
//!
//! ```text
//! step:   100   200   300   …   1200  1300
//! L:      0.95  0.879 0.808 …   0.171 0.10
//! ```
//!
//! Saturated seeds do not fit in sRGB at the ends of the ladder. Those
//! steps are gamut-mapped by lowering chroma, so realized chroma can dip
//! at the extremes while hue and lightness stay exact.

use std::collections::BTreeMap;
use std::fmt;

use qp_color::{Color, ParseHexError, Rgb8};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The canonical step numbers, lightest first.
pub const STEPS: [u16; 13] = [
    100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300,
];

/// OKLCH lightness at step 100.
pub const L_MAX: f64 = 0.95;

/// OKLCH lightness at step 1300.
pub const L_MIN: f64 = 0.10;

const FIRST_STEP: u16 = 100;
const LAST_STEP: u16 = 1300;

/// Target OKLCH lightness for a step.
///
/// Linear from [`L_MAX`] at 100 to [`L_MIN`] at 1300. Depends on nothing
/// but the step number. Off-ladder steps extrapolate.
#[must_use]
pub fn step_lightness(step: u16) -> f64 {
    let t = (f64::from(step) - f64::from(FIRST_STEP)) / f64::from(LAST_STEP - FIRST_STEP);
    L_MAX - t * (L_MAX - L_MIN)
}

/// Position of a canonical step in [`STEPS`].
const fn step_index(step: u16) -> Option<usize> {
    if step >= FIRST_STEP && step <= LAST_STEP && step % 100 == 0 {
        Some((step / 100 - 1) as usize)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

/// A complete 13-step palette, one in-gamut sRGB color per step.
///
/// Ramps are always recomputed from a seed and never need storing.
/// They serialize (one way) as an ordered `{"100": "#rrggbb", …}` map.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ramp {
    swatches: [Rgb8; STEPS.len()],
}

impl Ramp {
    /// Build the ramp for a seed color.
    #[must_use]
    pub fn from_seed(seed: Rgb8) -> Self {
        Self::from_color(Color::from_rgb8(seed))
    }

    /// Build a ramp that keeps `seed`'s chroma and hue. Its lightness is
    /// ignored.
    #[must_use]
    pub fn from_color(seed: Color) -> Self {
        let swatches = STEPS.map(|step| seed.set_lightness(step_lightness(step)).to_rgb8());
        Self { swatches }
    }

    /// The zero-chroma ramp: grays on the same lightness ladder.
    #[must_use]
    pub fn neutral() -> Self {
        Self::from_color(Color::BLACK)
    }

    /// Color at a canonical step, or `None` for any other number.
    #[must_use]
    pub const fn get(&self, step: u16) -> Option<Rgb8> {
        match step_index(step) {
            Some(i) => Some(self.swatches[i]),
            None => None,
        }
    }

    /// `(step, color)` pairs from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Rgb8)> + '_ {
        STEPS.iter().copied().zip(self.swatches.iter().copied())
    }

    /// The ramp as a step → `#rrggbb` map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<u16, String> {
        self.iter().map(|(step, rgb)| (step, rgb.to_string())).collect()
    }
}

impl fmt::Debug for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for Ramp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STEPS.len()))?;
        for (step, rgb) in self.iter() {
            map.serialize_entry(&step, &rgb)?;
        }
        map.end()
    }
}

/// Generate the ramp for a hex seed (`#RGB` or `#RRGGBB`, `#` optional,
/// any case).
///
/// # Errors
///
/// Returns [`ParseHexError`] if `seed_hex` is not a hex color. Nothing is
/// generated for invalid input.
pub fn generate_ramp(seed_hex: &str) -> Result<Ramp, ParseHexError> {
    seed_hex.parse().map(Ramp::from_seed)
}

/// Generate the neutral (gray) ramp used for unset seed slots.
#[must_use]
pub fn generate_neutral_ramp() -> Ramp {
    Ramp::neutral()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// SPDX-License-Identifier: MIT
//
// qp-color OKLCH core: perceptual color with exact Oklab constants.
//
// Every ramp the theme engine produces is built here: the seed is decoded
// into OKLCH, its lightness is replaced, and the result is gamut-mapped
// back into sRGB by reducing chroma only. Lightness and hue are the two
// attributes a viewer anchors on, so they are never touched by mapping.
//
// Conversion pipeline:
//
//   hex ↔ sRGB ↔ Linear sRGB ↔ LMS ↔ Oklab ↔ OKLCH
//
// All math is f64. The matrix constants are the 10-decimal values from
// Björn Ottosson's published Oklab definition; ramp output is pinned to
// them, so they must not be re-derived or rounded.

use std::fmt;

use log::trace;

use crate::hex::{ParseHexError, Rgb8};

/// Tolerance applied to each linear-sRGB channel when testing gamut
/// membership. Absorbs floating-point noise at the cube faces.
pub const GAMUT_EPSILON: f64 = 0.001;

/// Number of chroma bisection steps performed by [`map_to_gamut`].
pub const GAMUT_ITERATIONS: usize = 20;

/// Chroma below which a color counts as gray and its hue is reported as 0.
/// The Oklab matrices leave 8-bit grays with chroma near 1e-8.
pub const ACHROMATIC_EPSILON: f64 = 1e-5;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space.
///
/// OKLCH is the cylindrical form of Oklab: `l` is perceptual lightness,
/// `c` is chroma (colorfulness) and `h` is the hue angle. Equal numeric
/// steps in `l` look like equal steps in brightness, which is what makes a
/// linearly interpolated lightness ladder read as evenly spaced.
///
/// A `Color` may lie outside the sRGB gamut. Conversions to bytes or hex
/// always go through [`Color::to_gamut`] first.
///
/// # Examples
///
/// ```
/// use qp_color::Color;
///
/// let cyan = Color::hex("#00e3ff").unwrap();
/// assert!(cyan.c > 0.1);
///
/// // Same hue and chroma intent, new lightness, back to displayable sRGB.
/// let pale = cyan.set_lightness(0.95);
/// assert_eq!(pale.to_hex(), "#cef7ff");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma: 0.0 (gray) upward. sRGB tops out around 0.32.
    pub c: f64,

    /// Hue angle in degrees, [0, 360). Zero for achromatic colors.
    pub h: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Create a color from gamma-encoded sRGB components (0.0 to 1.0).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from an 8-bit sRGB triple.
    #[must_use]
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        let (r, g, b) = rgb.to_srgb();
        Self::srgb(r, g, b)
    }

    /// Create a color from a hex string (`#RGB` or `#RRGGBB`, `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`ParseHexError`] if the string is not a 3- or 6-digit hex color.
    pub fn hex(s: &str) -> Result<Self, ParseHexError> {
        s.parse::<Rgb8>().map(Self::from_rgb8)
    }

    /// A pure gray at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_EPSILON
    }

    /// Whether this color's linear-sRGB channels all lie within
    /// `[-GAMUT_EPSILON, 1 + GAMUT_EPSILON]`.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = self.to_linear_srgb();
        in_gamut_linear(r, g, b)
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// Replace lightness, keeping chroma and hue.
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Replace chroma (clamped to >= 0.0), keeping lightness and hue.
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Lightness and hue are held fixed. See [`map_to_gamut`].
    #[must_use]
    pub fn to_gamut(self) -> Self {
        let (l, c, h) = map_to_gamut(self.l, self.c, self.h);
        Self { l, c, h }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to Oklab `(L, a, b)`.
    #[must_use]
    pub fn to_oklab(self) -> (f64, f64, f64) {
        oklch_to_oklab(self.l, self.c, self.h)
    }

    /// Convert to linear sRGB without any clamping (may be out of range).
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_oklab();
        oklab_to_linear_srgb(l, a, b)
    }

    /// Gamut-map and quantize to an 8-bit sRGB triple.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        let (r, g, b) = self.to_gamut().to_linear_srgb();
        Rgb8::from_srgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    /// Gamut-map and format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb8().to_string()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb8> for Color {
    fn from(rgb: Rgb8) -> Self {
        Self::from_rgb8(rgb)
    }
}

/// Absolute hue difference along the shortest arc.
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Gamut Mapping ───────────────────────────────────────────────────────────

/// Whether a linear-sRGB triple is displayable, within [`GAMUT_EPSILON`].
#[inline]
#[must_use]
pub fn in_gamut_linear(r: f64, g: f64, b: f64) -> bool {
    let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
    range.contains(&r) && range.contains(&g) && range.contains(&b)
}

/// Bring an OKLCH color into the sRGB gamut by lowering chroma.
///
/// Returns `(l, c', h)` with `c' <= c`. An in-gamut input comes back
/// unchanged. Otherwise chroma is bisected over `[0, c]` for exactly
/// [`GAMUT_ITERATIONS`] rounds and the last in-gamut value is kept, so the
/// result converges to within `c / 2^20` of the boundary.
///
/// Channels are never clipped here: clipping would shift both hue and
/// lightness.
#[must_use]
pub fn map_to_gamut(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let fits = |chroma: f64| {
        let (lab_l, a, b) = oklch_to_oklab(l, chroma, h);
        let (r, g, bl) = oklab_to_linear_srgb(lab_l, a, b);
        in_gamut_linear(r, g, bl)
    };

    if fits(c) {
        return (l, c, h);
    }

    let mut lo = 0.0;
    let mut hi = c;
    for _ in 0..GAMUT_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    trace!("gamut mapped oklch({l:.4}, {c:.4}, {h:.1}) to chroma {lo:.4}");
    (l, lo, h)
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Polar → Cartesian: `(L, C, H°)` to `(L, a, b)`.
#[inline]
#[must_use]
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

/// Cartesian → polar: `(L, a, b)` to `(L, C, H°)` with H in [0, 360).
#[inline]
#[must_use]
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = a.hypot(b);
    let h = if c < ACHROMATIC_EPSILON {
        0.0 // Achromatic: hue is undefined
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (l, c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The conversion passes through an LMS cone-response space. Forward it is
// matrix → cube root → matrix; inverse it is matrix → cube → matrix.

/// Convert linear sRGB to Oklab `(L, a, b)`.
#[must_use]
pub fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_)),
        0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_))),
        0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_)),
    )
}

/// Convert Oklab `(L, a, b)` to linear sRGB. Out-of-gamut inputs produce
/// components outside [0, 1].
#[must_use]
pub fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m))),
        0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m)),
        1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m))),
    )
}

// ─── Linear sRGB ↔ sRGB (IEC 61966-2-1 transfer) ────────────────────────────

/// Apply the sRGB transfer function to one linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB transfer function from one gamma-encoded component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Gamma-encoded sRGB (0.0–1.0) → OKLCH.
#[must_use]
pub fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    oklab_to_oklch(l, a, b_ok)
}

/// Parse a hex string and return its OKLCH coordinates `(L, C, H)`.
///
/// # Errors
///
/// Returns [`ParseHexError`] for anything but a 3- or 6-digit hex color.
pub fn hex_to_oklch(hex: &str) -> Result<(f64, f64, f64), ParseHexError> {
    let (r, g, b) = hex.parse::<Rgb8>()?.to_srgb();
    Ok(srgb_to_oklch(r, g, b))
}

/// Gamut-map an OKLCH color and format it as lowercase `#rrggbb`.
#[must_use]
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    Color::oklch(l, c, h).to_hex()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

//! Black-or-white text selection for colored backgrounds.
//!
//! Accent surfaces (buttons, chips, column headers) are painted with the
//! user's exact seed color, so their label color must be picked per seed.
//! The choice uses WCAG relative luminance, computed directly from the
//! background's sRGB bytes. There is no OKLCH round trip here.

use qp_color::Rgb8;

/// Luminance above which black text reads better than white.
///
/// This is the crossover where black-on-color and white-on-color give the
/// same contrast ratio. It is a fixed output-compatibility constant.
pub const CONTRAST_THRESHOLD: f64 = 0.179;

/// Relative luminance of an sRGB color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb8) -> f64 {
    let (r, g, b) = color.to_linear_srgb();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0].
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb8, b: Rgb8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Text color for a background: [`Rgb8::BLACK`] when its luminance is
/// strictly above [`CONTRAST_THRESHOLD`], otherwise [`Rgb8::WHITE`].
#[must_use]
pub fn contrast_text_color(background: Rgb8) -> Rgb8 {
    if relative_luminance(background) > CONTRAST_THRESHOLD {
        Rgb8::BLACK
    } else {
        Rgb8::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// SPDX-License-Identifier: MIT
//
// CSS-style HSL, the model color pickers expose as three sliders.
//
// HSL is not perceptual and never feeds the ramp math; it only turns slider
// positions into a hex seed and back.

use crate::hex::Rgb8;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Rgb8 {
    /// Convert to HSL. Grays report hue and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if self.r == self.g && self.g == self.b {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if self.r >= self.g && self.r >= self.b {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if self.g >= self.b {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Convert from HSL. Hue wraps; saturation and lightness clamp to
    /// [0, 100].
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let t = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            a.mul_add(-t, l)
        };

        Self::from_srgb(channel(0.0), channel(8.0), channel(4.0))
    }
}

//! Preset seed swatches offered during onboarding and in settings.

use qp_color::Rgb8;

use crate::contrast::contrast_text_color;
use crate::ramp::Ramp;
use crate::stylesheet::ThemeSeeds;

/// A named seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Kebab-case identifier (`"deep-gold"`).
    pub id: &'static str,
    /// Human-readable label (`"Deep Gold"`).
    pub label: &'static str,
    pub seed: Rgb8,
}

impl Preset {
    const fn new(id: &'static str, label: &'static str, seed: Rgb8) -> Self {
        Self { id, label, seed }
    }

    /// The ramp generated from this preset.
    #[must_use]
    pub fn ramp(&self) -> Ramp {
        Ramp::from_seed(self.seed)
    }

    /// Text color for labels drawn on this swatch.
    #[must_use]
    pub fn on_accent(&self) -> Rgb8 {
        contrast_text_color(self.seed)
    }
}

/// Seed for the primary slot before the user picks anything (Cyan).
pub const DEFAULT_PRIMARY: Rgb8 = Rgb8::new(0x00, 0xe3, 0xff);

const PRESETS: [Preset; 9] = [
    Preset::new("cyan", "Cyan", DEFAULT_PRIMARY),
    Preset::new("blue", "Blue", Rgb8::new(0x4f, 0x86, 0xf7)),
    Preset::new("purple", "Purple", Rgb8::new(0x7c, 0x5c, 0xfc)),
    Preset::new("pink", "Pink", Rgb8::new(0xe8, 0x43, 0x93)),
    Preset::new("orange", "Orange", Rgb8::new(0xff, 0x6b, 0x35)),
    Preset::new("green", "Green", Rgb8::new(0x2e, 0xcc, 0x71)),
    Preset::new("gold", "Gold", Rgb8::new(0xf1, 0xc4, 0x0f)),
    Preset::new("deep-gold", "Deep Gold", Rgb8::new(0xc9, 0xb4, 0x58)),
    Preset::new("warm-grey", "Warm Grey", Rgb8::new(0xa8, 0x99, 0x8a)),
];

/// All presets in display order.
#[must_use]
pub const fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by id or label, ignoring case.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(name) || p.label.eq_ignore_ascii_case(name))
}

/// The theme a first-time user starts with: Cyan primary, neutral
/// secondaries.
#[must_use]
pub const fn default_theme() -> ThemeSeeds {
    ThemeSeeds::with_primary(DEFAULT_PRIMARY)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

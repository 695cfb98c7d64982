//! Theme state and its CSS custom-property serialization.
//!
//! A theme is nothing but three optional seeds. Everything a page needs
//! (39 ramp variables, accent tokens, on-accent text colors, surface
//! aliases for light and dark mode) is derived from them on demand, so the
//! stylesheet is a pure function of [`ThemeSeeds`].

use std::fmt;

use log::debug;
use qp_color::Rgb8;
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_text_color;
use crate::ramp::{Ramp, STEPS};

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the three named seed positions in a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Secondary1,
    Secondary2,
}

impl Slot {
    /// All slots in emission order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary1, Self::Secondary2];

    /// The slot's name as used in CSS variable names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary1 => "secondary1",
            Self::Secondary2 => "secondary2",
        }
    }

    /// Ramp step standing in for an unset accent in light mode.
    const fn light_fallback_step(self) -> u16 {
        match self {
            Self::Primary => 400,
            Self::Secondary1 | Self::Secondary2 => 600,
        }
    }

    /// Ramp step standing in for an unset accent in dark mode.
    const fn dark_fallback_step(self) -> u16 {
        match self {
            Self::Primary => 400,
            Self::Secondary1 | Self::Secondary2 => 500,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `--color-<slot>-<step>`
#[must_use]
pub fn ramp_variable(slot: Slot, step: u16) -> String {
    format!("--color-{slot}-{step}")
}

// ---------------------------------------------------------------------------
// ThemeSeeds
// ---------------------------------------------------------------------------

/// The user's chosen seed colors. `None` means "use the neutral ramp".
///
/// This is the only theme value worth persisting; ramps and CSS are
/// recomputed from it every time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSeeds {
    pub primary: Option<Rgb8>,
    pub secondary1: Option<Rgb8>,
    pub secondary2: Option<Rgb8>,
}

impl ThemeSeeds {
    /// A theme with only a primary seed.
    #[must_use]
    pub const fn with_primary(primary: Rgb8) -> Self {
        Self {
            primary: Some(primary),
            secondary1: None,
            secondary2: None,
        }
    }

    /// The seed assigned to `slot`, if any.
    #[must_use]
    pub const fn seed(&self, slot: Slot) -> Option<Rgb8> {
        match slot {
            Slot::Primary => self.primary,
            Slot::Secondary1 => self.secondary1,
            Slot::Secondary2 => self.secondary2,
        }
    }

    /// Assign or clear the seed for `slot`.
    pub const fn set(&mut self, slot: Slot, seed: Option<Rgb8>) {
        match slot {
            Slot::Primary => self.primary = seed,
            Slot::Secondary1 => self.secondary1 = seed,
            Slot::Secondary2 => self.secondary2 = seed,
        }
    }

    /// Whether no slot has a seed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary1.is_none() && self.secondary2.is_none()
    }

    /// The ramp for `slot`, neutral when the slot is unset.
    #[must_use]
    pub fn ramp(&self, slot: Slot) -> Ramp {
        self.seed(slot).map_or_else(
            || {
                debug!("slot {slot} unset, using neutral ramp");
                Ramp::neutral()
            },
            Ramp::from_seed,
        )
    }

    /// Every `--color-<slot>-<step>` variable with its value, slots in
    /// [`Slot::ALL`] order and steps ascending.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, Rgb8)> {
        Slot::ALL
            .iter()
            .flat_map(|&slot| {
                self.ramp(slot)
                    .iter()
                    .map(move |(step, rgb)| (ramp_variable(slot, step), rgb))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Render the full theme stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        debug!("rendering stylesheet for {self:?}");
        Stylesheet { seeds: self }.to_string()
    }
}

// ---------------------------------------------------------------------------
// Stylesheet rendering
// ---------------------------------------------------------------------------

/// Display adapter that writes the `:root` and dark-mode blocks.
struct Stylesheet<'a> {
    seeds: &'a ThemeSeeds,
}

impl Stylesheet<'_> {
    fn write_accents(&self, f: &mut fmt::Formatter<'_>, dark: bool) -> fmt::Result {
        for slot in Slot::ALL {
            match self.seeds.seed(slot) {
                Some(seed) => writeln!(f, "  --accent-{slot}: {seed};")?,
                None => {
                    let step = if dark {
                        slot.dark_fallback_step()
                    } else {
                        slot.light_fallback_step()
                    };
                    writeln!(f, "  --accent-{slot}: var({});", ramp_variable(slot, step))?;
                }
            }
        }
        for slot in Slot::ALL {
            if let Some(seed) = self.seeds.seed(slot) {
                writeln!(f, "  --on-accent-{slot}: {};", contrast_text_color(seed))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stylesheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for slot in Slot::ALL {
            for (step, rgb) in self.seeds.ramp(slot).iter() {
                writeln!(f, "  {}: {rgb};", ramp_variable(slot, step))?;
            }
        }
        self.write_accents(f, false)?;
        writeln!(f, "  --surface-canvas: var({});", ramp_variable(Slot::Primary, STEPS[0]))?;
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, "[data-theme=\"dark\"] {{")?;
        self.write_accents(f, true)?;
        writeln!(f, "  --surface-canvas: var({});", ramp_variable(Slot::Primary, 800))?;
        writeln!(
            f,
            "  --surface-header: color-mix(in srgb, var({}) 70%, transparent);",
            ramp_variable(Slot::Primary, 1200)
        )?;
        writeln!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb(hex: &str) -> Rgb8 {
        hex.parse().unwrap()
    }

    fn blocks(css: &str) -> (&str, &str) {
        css.split_once("\n\n").unwrap()
    }

    // ── Slots ───────────────────────────────────────────────────────

    #[test]
    fn slot_names() {
        let names: Vec<&str> = Slot::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["primary", "secondary1", "secondary2"]);
        assert_eq!(ramp_variable(Slot::Primary, 400), "--color-primary-400");
    }

    #[test]
    fn set_and_get_seeds() {
        let mut seeds = ThemeSeeds::default();
        assert!(seeds.is_empty());
        seeds.set(Slot::Secondary2, Some(rgb("#e84393")));
        assert_eq!(seeds.seed(Slot::Secondary2), Some(rgb("#e84393")));
        assert_eq!(seeds.seed(Slot::Primary), None);
        seeds.set(Slot::Secondary2, None);
        assert!(seeds.is_empty());
    }

    #[test]
    fn unset_slots_use_neutral_ramp() {
        let seeds = ThemeSeeds::with_primary(rgb("#00e3ff"));
        assert_eq!(seeds.ramp(Slot::Secondary1), Ramp::neutral());
        assert_eq!(seeds.ramp(Slot::Primary), Ramp::from_seed(rgb("#00e3ff")));
    }

    // ── Variables ───────────────────────────────────────────────────

    #[test]
    fn thirty_nine_ramp_variables_in_order() {
        let vars = ThemeSeeds::default().css_variables();
        assert_eq!(vars.len(), 39);
        assert_eq!(vars[0].0, "--color-primary-100");
        assert_eq!(vars[12].0, "--color-primary-1300");
        assert_eq!(vars[13].0, "--color-secondary1-100");
        assert_eq!(vars[38].0, "--color-secondary2-1300");
    }

    // ── Stylesheet ──────────────────────────────────────────────────

    #[test]
    fn primary_only_stylesheet() {
        let css = ThemeSeeds::with_primary(rgb("#00E3FF")).stylesheet();
        let (root, dark) = blocks(&css);

        assert!(root.starts_with(":root {\n"));
        assert!(root.contains("  --color-primary-100: #cef7ff;\n"));
        assert!(root.contains("  --color-primary-700: #007888;\n"));
        assert!(root.contains("  --color-secondary1-100: #eeeeee;\n"));
        assert_eq!(root.matches("  --color-").count(), 39);

        assert!(root.contains("  --accent-primary: #00e3ff;\n"));
        assert!(root.contains("  --accent-secondary1: var(--color-secondary1-600);\n"));
        assert!(root.contains("  --accent-secondary2: var(--color-secondary2-600);\n"));
        assert!(root.contains("  --on-accent-primary: #000000;\n"));
        assert!(!root.contains("--on-accent-secondary"));
        assert!(root.ends_with("  --surface-canvas: var(--color-primary-100);\n}"));

        assert!(dark.starts_with("[data-theme=\"dark\"] {\n"));
        assert!(!dark.contains("  --color-"));
        assert!(dark.contains("var(--color-primary-1200)"));
        assert!(dark.contains("  --accent-primary: #00e3ff;\n"));
        assert!(dark.contains("  --accent-secondary1: var(--color-secondary1-500);\n"));
        assert!(dark.contains("  --on-accent-primary: #000000;\n"));
        assert!(dark.contains("  --surface-canvas: var(--color-primary-800);\n"));
        assert!(dark.ends_with(
            "  --surface-header: color-mix(in srgb, var(--color-primary-1200) 70%, transparent);\n}\n"
        ));
    }

    #[test]
    fn empty_theme_falls_back_everywhere() {
        let css = ThemeSeeds::default().stylesheet();
        assert!(css.contains("  --accent-primary: var(--color-primary-400);\n"));
        assert!(!css.contains("--on-accent-"));
        let (root, dark) = blocks(&css);
        assert!(root.contains("  --accent-secondary2: var(--color-secondary2-600);\n"));
        assert!(dark.contains("  --accent-secondary2: var(--color-secondary2-500);\n"));
        assert!(dark.contains("  --accent-primary: var(--color-primary-400);\n"));
    }

    #[test]
    fn on_accent_follows_accents() {
        let seeds = ThemeSeeds {
            primary: Some(rgb("#2b6cb0")),
            secondary1: None,
            secondary2: Some(rgb("#f1c40f")),
        };
        let css = seeds.stylesheet();
        let (root, _) = blocks(&css);
        let tail: Vec<&str> = root
            .lines()
            .skip_while(|line| !line.contains("--accent-"))
            .collect();
        assert_eq!(
            tail,
            [
                "  --accent-primary: #2b6cb0;",
                "  --accent-secondary1: var(--color-secondary1-600);",
                "  --accent-secondary2: #f1c40f;",
                "  --on-accent-primary: #ffffff;",
                "  --on-accent-secondary2: #000000;",
                "  --surface-canvas: var(--color-primary-100);",
                "}",
            ]
        );
    }

    #[test]
    fn stylesheet_is_deterministic() {
        let seeds = ThemeSeeds::with_primary(rgb("#7c5cfc"));
        assert_eq!(seeds.stylesheet(), seeds.stylesheet());
    }

    // ── Serde ───────────────────────────────────────────────────────

    #[test]
    fn seeds_serialize_as_hex_strings() {
        let seeds = ThemeSeeds::with_primary(rgb("#00E3FF"));
        let json = serde_json::to_string(&seeds).unwrap();
        assert_eq!(json, r##"{"primary":"#00e3ff","secondary1":null,"secondary2":null}"##);
    }

    #[test]
    fn seeds_deserialize_with_missing_fields() {
        let seeds: ThemeSeeds = serde_json::from_str(r##"{"secondary1":"#abc"}"##).unwrap();
        assert_eq!(seeds.primary, None);
        assert_eq!(seeds.secondary1, Some(rgb("#aabbcc")));
    }

    #[test]
    fn seeds_reject_invalid_hex() {
        let err = serde_json::from_str::<ThemeSeeds>(r#"{"primary":"teal"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid hex digit"), "{err}");
    }

    #[test]
    fn seeds_reject_unknown_slots() {
        assert!(serde_json::from_str::<ThemeSeeds>(r##"{"tertiary":"#fff"}"##).is_err());
    }
}

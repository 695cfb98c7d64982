// SPDX-License-Identifier: MIT
//
// Theme config files: the three seed slots as TOML.
//
//   primary = "#00e3ff"
//   secondary1 = "#7c5cfc"
//   # secondary2 unset → neutral ramp
//
// Only seeds are ever stored. Ramps are recomputed on every run.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use qp_color::Rgb8;
use qp_theme::ThemeSeeds;
use qp_theme::builtin::preset;

/// Parse a theme config from TOML text.
pub fn parse(text: &str) -> Result<ThemeSeeds> {
    toml::from_str(text).context("invalid theme config")
}

/// Read and parse a theme config file.
pub fn load(path: &Path) -> Result<ThemeSeeds> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let seeds = parse(&text).with_context(|| format!("in {}", path.display()))?;
    info!("loaded theme seeds from {}", path.display());
    Ok(seeds)
}

/// Serialize seeds as TOML. Unset slots are omitted.
pub fn render(seeds: &ThemeSeeds) -> Result<String> {
    toml::to_string(seeds).context("failed to serialize theme config")
}

/// Write seeds to `path`, refusing to overwrite unless `force` is set.
pub fn save(path: &Path, seeds: &ThemeSeeds, force: bool) -> Result<()> {
    let text = render(seeds)?;
    let mut options = OpenOptions::new();
    if force {
        options.write(true).create(true).truncate(true);
    } else {
        options.write(true).create_new(true);
    }
    let mut file = match options.open(path) {
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display())
        }
        other => other.with_context(|| format!("failed to open {}", path.display()))?,
    };
    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote theme seeds to {}", path.display());
    Ok(())
}

/// Command-line seed argument: a preset name (`cyan`, `deep-gold`) or a
/// hex color.
pub fn parse_seed(arg: &str) -> Result<Rgb8, String> {
    if let Some(p) = preset(arg) {
        return Ok(p.seed);
    }
    arg.parse::<Rgb8>()
        .map_err(|e| format!("`{arg}` is neither a preset nor a hex color: {e}"))
}

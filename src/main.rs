// SPDX-License-Identifier: MIT
//
// qp-ramp: command-line front-end for the palette engine.
//
// Wires the library crates to a shell:
//
//   qp-color → hex parsing, OKLCH math, gamut mapping
//   qp-theme → ramps, contrast text, stylesheet serialization
//
// Intended for build steps that precompute static palettes and for
// eyeballing a seed before committing it to a theme:
//
//   qp-ramp ramp "#00e3ff"          13 step/hex lines
//   qp-ramp ramp cyan --json        same, as a JSON object
//   qp-ramp css --config theme.toml full :root + dark stylesheet
//   qp-ramp contrast "#2b6cb0"      on-accent text color
//
// Logging goes to stderr through env_logger; set RUST_LOG=debug to see
// slot fallbacks and gamut-mapping decisions.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use qp_color::{Hsl, Rgb8};
use qp_theme::builtin::{default_theme, presets};
use qp_theme::{Ramp, Slot, ThemeSeeds, contrast_ratio, contrast_text_color};

#[derive(Parser)]
#[command(name = "qp-ramp")]
#[command(version, about = "Generate OKLCH color ramps and theme CSS from seed colors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 13-step ramp for a seed (hex or preset name)
    Ramp {
        #[arg(value_parser = config::parse_seed)]
        seed: Rgb8,
        /// Emit a JSON object instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Print the neutral (gray) ramp
    Neutral {
        /// Emit a JSON object instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Print the black/white text color for a background
    Contrast {
        #[arg(value_parser = config::parse_seed)]
        background: Rgb8,
    },
    /// Print the theme stylesheet (CSS custom properties)
    Css {
        /// TOML file with primary/secondary1/secondary2 seeds
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Primary seed (overrides the config file)
        #[arg(long, value_parser = config::parse_seed)]
        primary: Option<Rgb8>,
        /// First secondary seed (overrides the config file)
        #[arg(long, value_parser = config::parse_seed)]
        secondary1: Option<Rgb8>,
        /// Second secondary seed (overrides the config file)
        #[arg(long, value_parser = config::parse_seed)]
        secondary2: Option<Rgb8>,
    },
    /// Write a starter theme config (Cyan primary)
    Init {
        /// Destination file
        #[arg(default_value = "qp-theme.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// List the preset swatches
    Presets,
    /// Convert an HSL triple (degrees, percent, percent) to hex
    Hsl {
        #[arg(allow_negative_numbers = true)]
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("qp-ramp: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Ramp { seed, json } => {
            debug!("generating ramp for {seed}");
            write_ramp(&mut out, &Ramp::from_seed(seed), json)?;
        }
        Command::Neutral { json } => write_ramp(&mut out, &Ramp::neutral(), json)?,
        Command::Contrast { background } => {
            let text = contrast_text_color(background);
            writeln!(out, "{text}  ({:.2}:1 on {background})", contrast_ratio(text, background))?;
        }
        Command::Css {
            config,
            primary,
            secondary1,
            secondary2,
        } => {
            let mut seeds = match config {
                Some(path) => config::load(&path)?,
                None => ThemeSeeds::default(),
            };
            for (slot, seed) in [
                (Slot::Primary, primary),
                (Slot::Secondary1, secondary1),
                (Slot::Secondary2, secondary2),
            ] {
                if seed.is_some() {
                    seeds.set(slot, seed);
                }
            }
            write!(out, "{}", seeds.stylesheet())?;
        }
        Command::Init { path, force } => {
            config::save(&path, &default_theme(), force)?;
            writeln!(out, "wrote {}", path.display())?;
        }
        Command::Presets => {
            for p in presets() {
                writeln!(out, "{:<10} {}  text {}", p.id, p.seed, p.on_accent())?;
            }
        }
        Command::Hsl {
            hue,
            saturation,
            lightness,
        } => {
            let rgb = Rgb8::from_hsl(Hsl::new(hue, saturation, lightness));
            writeln!(out, "{rgb}")?;
        }
    }

    Ok(())
}

/// Print a ramp as `step hex` lines or as a JSON object.
fn write_ramp(out: &mut impl Write, ramp: &Ramp, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, ramp)?;
        writeln!(out)?;
    } else {
        for (step, rgb) in ramp.iter() {
            writeln!(out, "{step:>4} {rgb}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(ramp: &Ramp, json: bool) -> String {
        let mut buf = Vec::new();
        write_ramp(&mut buf, ramp, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn ramp_lines() {
        let text = render(&Ramp::neutral(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], " 100 #eeeeee");
        assert_eq!(lines[12], "1300 #030303");
    }

    #[test]
    fn ramp_json_is_step_keyed_object() {
        let seed: Rgb8 = "#00e3ff".parse().unwrap();
        let text = render(&Ramp::from_seed(seed), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 13);
        assert_eq!(obj["100"], "#cef7ff");
        assert_eq!(obj["1300"], "#000509");
    }

    #[test]
    fn parses_css_overrides() {
        let cli = Cli::try_parse_from(["qp-ramp", "css", "--primary", "cyan", "--secondary2", "#f1c40f"])
            .unwrap();
        let Command::Css {
            config,
            primary,
            secondary1,
            secondary2,
        } = cli.command
        else {
            panic!("expected css subcommand");
        };
        assert!(config.is_none());
        assert_eq!(primary, "#00e3ff".parse::<Rgb8>().ok());
        assert_eq!(secondary1, None);
        assert_eq!(secondary2, "#f1c40f".parse::<Rgb8>().ok());
    }

    #[test]
    fn rejects_malformed_seed() {
        assert!(Cli::try_parse_from(["qp-ramp", "ramp", "#12345"]).is_err());
    }

    #[test]
    fn hsl_accepts_negative_hue() {
        let cli = Cli::try_parse_from(["qp-ramp", "hsl", "-240", "100", "50"]).unwrap();
        assert!(matches!(cli.command, Command::Hsl { hue, .. } if (hue + 240.0).abs() < 1e-12));
    }
}

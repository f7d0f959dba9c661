pub mod completions;
pub mod convert;
pub mod palette;
pub mod sample;
pub mod wheel;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::error::Result;

/// swatch - Colour picker toolkit
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default: ./swatch.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a hex colour as hex and HSLA
    Convert(convert::ConvertArgs),

    /// Build a colour from hue, saturation and lightness
    Hsl(convert::HslArgs),

    /// Render a hue-shifted colour wheel
    Wheel(wheel::WheelArgs),

    /// Print the colour under a pixel of an image
    Sample(sample::SampleArgs),

    /// Manage the custom colour palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings from `--config`, or discovered in the working directory.
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => {
            let base = path.parent().unwrap_or(Path::new("."));
            Ok(Settings::load(path)?.relative_to(base))
        }
        None => Settings::discover(Path::new(".")),
    }
}

//! Wheel command implementation.
//!
//! Renders the base colour wheel with its hue rotated and writes a PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{write_png, HueWheel, WheelSource};

use super::load_settings;

/// Render a hue-shifted colour wheel
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct WheelArgs {
    /// Hue rotation in degrees
    #[arg(long, default_value = "0")]
    pub hue: f64,

    /// Base wheel image (default: from settings, else built-in gradient)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short, default_value = "wheel.png")]
    pub output: PathBuf,
}

pub fn run(args: WheelArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let source = match args.input {
        Some(path) => WheelSource::File(path),
        None => load_settings(config)?.wheel_source(),
    };

    let wheel = HueWheel::new(source);
    let rotated = wheel.rotated(args.hue)?;

    write_png(&rotated, &args.output)?;

    printer.success(
        "Rendered",
        &format!(
            "{} ({}x{}, hue {:+})",
            display_path(&args.output),
            rotated.width(),
            rotated.height(),
            args.hue
        ),
    );

    Ok(())
}

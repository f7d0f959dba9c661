//! Convert and hsl command implementations.
//!
//! Both print the colour on stdout as hex plus HSLA; `--json` switches to
//! a machine-readable object.

use clap::Args;
use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::output::Printer;
use crate::types::{hex_to_colour, hsla_to_rgba, rgba_to_hsla, Colour, Hsla};

/// Show a hex colour as hex and HSLA
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colour as RRGGBB or #RRGGBB
    pub colour: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Build a colour from hue, saturation and lightness
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct HslArgs {
    /// Hue in degrees (wrapped into 0..360)
    pub hue: f64,

    /// Saturation, 0 to 1
    pub saturation: f64,

    /// Lightness, 0 to 1
    pub lightness: f64,

    /// Alpha, 0 to 255
    #[arg(long, default_value = "255")]
    pub alpha: u8,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    hex: String,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    hsla: Hsla,
}

impl Report {
    fn new(colour: Colour) -> Self {
        Self {
            hex: colour.to_hex(),
            r: colour.r(),
            g: colour.g(),
            b: colour.b(),
            a: colour.a(),
            hsla: rgba_to_hsla(colour),
        }
    }

    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(self).map_err(|e| SwatchError::Format {
                message: format!("Failed to encode JSON: {}", e),
                help: None,
            });
        }
        Ok(format!(
            "#{}  rgba({}, {}, {}, {})  hsla({:.1}, {:.3}, {:.3}, {})",
            self.hex,
            self.r,
            self.g,
            self.b,
            self.a,
            self.hsla.hue,
            self.hsla.saturation,
            self.hsla.lightness,
            self.hsla.alpha
        ))
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let colour = hex_to_colour(&args.colour)?;
    printer.status("Converted", &args.colour);
    println!("{}", Report::new(colour).render(args.json)?);
    Ok(())
}

pub fn run_hsl(args: HslArgs, printer: &Printer) -> Result<()> {
    let colour = hsla_to_rgba(args.hue, args.saturation, args.lightness, args.alpha);
    printer.status("Converted", &format!("hsl({}, {}, {})", args.hue, args.saturation, args.lightness));
    println!("{}", Report::new(colour).render(args.json)?);
    Ok(())
}

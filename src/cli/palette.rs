//! Palette command implementation.
//!
//! Lists and edits the custom colours stored in the palette file named by
//! the settings. Every edit is written back immediately.

use std::path::Path;

use clap::{Args, Subcommand};

use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::types::{hex_to_colour, Palette, Swatch};

use super::load_settings;

/// Manage the custom colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(subcommand)]
    pub action: PaletteAction,
}

#[derive(Subcommand, Debug)]
pub enum PaletteAction {
    /// List custom colours (add --builtin for the preset swatches)
    List {
        /// Also list the built-in swatches
        #[arg(long)]
        builtin: bool,
    },

    /// Add a custom colour
    Add {
        /// Colour as RRGGBB or #RRGGBB
        colour: String,

        /// Optional display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove the custom colour at an index (as shown by list)
    Remove {
        index: usize,
    },

    /// Remove every custom colour
    Clear,
}

pub fn run(args: PaletteArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    let settings = load_settings(config)?;
    if !settings.custom_palette && !matches!(args.action, PaletteAction::List { .. }) {
        return Err(SwatchError::Format {
            message: "Custom colours are disabled".to_string(),
            help: Some("Set custom_palette: true in swatch.yaml".to_string()),
        });
    }

    let mut palette = settings.open_palette();
    apply(&mut palette, args.action, printer)
}

fn apply(palette: &mut Palette, action: PaletteAction, printer: &Printer) -> Result<()> {
    let location = palette
        .path()
        .map(display_path)
        .unwrap_or_else(|| "memory".to_string());

    match action {
        PaletteAction::List { builtin } => {
            if builtin {
                print_swatches("primary", palette.primary_swatch());
                print_swatches("secondary", palette.secondary_swatch());
            }
            print_swatches("custom", palette.custom());
            printer.info(
                "Listed",
                &format!("{} in {}", plural(palette.custom().len(), "custom colour", "custom colours"), location),
            );
        }
        PaletteAction::Add { colour, name } => {
            let colour = hex_to_colour(&colour)?;
            let swatch = match name {
                Some(name) => Swatch::named(colour, name),
                None => Swatch::new(colour),
            };
            palette.add_custom(swatch);
            printer.success("Added", &format!("{} to {}", colour, location));
        }
        PaletteAction::Remove { index } => {
            let removed = palette.remove_custom(index).ok_or_else(|| SwatchError::Format {
                message: format!(
                    "No custom colour at index {} ({})",
                    index,
                    plural(palette.custom().len(), "entry", "entries")
                ),
                help: Some("Run `swatch palette list` to see indices".to_string()),
            })?;
            printer.success("Removed", &format!("{} from {}", removed.colour, location));
        }
        PaletteAction::Clear => {
            let count = palette.custom().len();
            palette.clear_custom();
            printer.success("Cleared", &format!("{} from {}", plural(count, "colour", "colours"), location));
        }
    }

    Ok(())
}

fn print_swatches(group: &str, swatches: &[Swatch]) {
    for (i, swatch) in swatches.iter().enumerate() {
        match &swatch.name {
            Some(name) => println!("{}[{}]: {} {}", group, i, swatch.colour, name),
            None => println!("{}[{}]: {}", group, i, swatch.colour),
        }
    }
}

//! Core domain types for swatch.
//!
//! This module contains the fundamental colour types:
//! - `Colour` - immutable RGBA colour values and hex text
//! - `Hsla` - hue/saturation/lightness view of a colour
//! - `Palette` - built-in and custom swatches

mod colour;
mod hsla;
mod palette;

pub use colour::{colour_to_hex, hex_to_colour, Colour};
pub use hsla::{hsla_to_rgba, normalize_hue, rgba_to_hsla, Hsla};
pub use palette::{
    builtin_swatches, Palette, Swatch, PRIMARY_SWATCH_LEN, SECONDARY_SWATCH_LEN,
};

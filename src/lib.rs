//! swatch - Colour picker toolkit
//!
//! The pieces of a colour picker that do not depend on a UI toolkit:
//! RGB/HSL/hex conversion, built-in and custom swatch palettes, the XML
//! palette file, and hue-shifted colour wheel images.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod picker;
pub mod render;
pub mod types;

pub use config::Settings;
pub use error::{Result, SwatchError};
pub use picker::{Channel, Picker};
pub use render::{
    neutral_wheel, read_png, render_hue_shift, write_png, ChannelOrder, HueWheel, PixelBuffer,
    WheelSource,
};
pub use types::{
    builtin_swatches, colour_to_hex, hex_to_colour, hsla_to_rgba, rgba_to_hsla, Colour, Hsla,
    Palette, Swatch,
};

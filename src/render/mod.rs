//! Rendering module for swatch.
//!
//! This module handles raw pixel buffers, hue rotation of whole images,
//! and the colour wheel surface built on top of them.

mod buffer;
mod hue;
mod png;
mod wheel;

pub use buffer::{ChannelOrder, PixelBuffer, BYTES_PER_PIXEL};
pub use hue::render_hue_shift;
pub use png::{decode_png, read_png, write_png};
pub use wheel::{neutral_wheel, HueWheel, WheelSource};

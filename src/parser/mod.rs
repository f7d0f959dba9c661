//! Parsers for swatch data files.
//!
//! Currently this is the custom palette file; see [`palette`] for the
//! format.

pub mod palette;

pub use palette::{parse_palette_file, write_palette_file};

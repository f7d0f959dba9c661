//! Sample command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};
use crate::render::read_png;

/// Print the colour under a pixel of an image
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Image to sample
    pub file: PathBuf,

    /// Column, from the left edge
    pub x: u32,

    /// Row, from the top edge
    pub y: u32,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let image = read_png(&args.file)?;

    let colour = image.sample(args.x, args.y).ok_or_else(|| SwatchError::Format {
        message: format!(
            "({}, {}) is outside the {}x{} image",
            args.x,
            args.y,
            image.width(),
            image.height()
        ),
        help: None,
    })?;

    printer.status(
        "Sampled",
        &format!("{} at ({}, {})", display_path(&args.file), args.x, args.y),
    );
    println!("{}", colour);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{write_png, ChannelOrder, PixelBuffer};
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_sample_out_of_bounds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dot.png");
        let image = PixelBuffer::from_fn(1, 1, ChannelOrder::Rgba, |_, _| Colour::BLACK);
        write_png(&image, &path).unwrap();

        let inside = SampleArgs {
            file: path.clone(),
            x: 0,
            y: 0,
        };
        assert!(run(inside, &Printer::new()).is_ok());

        let outside = SampleArgs { file: path, x: 1, y: 0 };
        assert!(run(outside, &Printer::new()).is_err());
    }
}

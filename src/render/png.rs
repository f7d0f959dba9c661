//! PNG input and output for pixel buffers.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{Result, SwatchError};

use super::buffer::{ChannelOrder, PixelBuffer};

/// Decode a PNG (or any format `image` understands) into an RGBA buffer.
pub fn read_png(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgba8();

    decode_rgba(img)
}

/// Decode in-memory image bytes into an RGBA buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| SwatchError::Image {
            message: format!("Failed to decode image: {}", e),
        })?
        .to_rgba8();

    decode_rgba(img)
}

/// Write a buffer to a PNG file, converting from its channel order.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let rgba = buffer.to_order(ChannelOrder::Rgba);

    let img: RgbaImage = ImageBuffer::from_raw(buffer.width(), buffer.height(), rgba.into_bytes())
        .ok_or_else(|| SwatchError::Image {
            message: "Pixel buffer does not match its dimensions".to_string(),
        })?;

    img.save(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

fn decode_rgba(img: RgbaImage) -> Result<PixelBuffer> {
    let (width, height) = img.dimensions();
    PixelBuffer::from_raw(width, height, ChannelOrder::Rgba, img.into_raw())
}

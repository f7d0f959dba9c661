//! Hue rotation over whole pixel buffers.

use std::borrow::Cow;

use crate::types::{hsla_to_rgba, normalize_hue, rgba_to_hsla};

use super::buffer::{PixelBuffer, BYTES_PER_PIXEL};

/// Rotate the hue of every pixel by `degrees`.
///
/// A rotation that wraps to 0 (0, 360, -720, ...) or an empty buffer
/// returns the source itself without touching a pixel. Otherwise a new
/// buffer with the same size and channel order is returned; the source
/// is never modified.
///
/// Saturation and lightness are kept. Alpha is always written as 255,
/// so any transparency in the source is dropped.
pub fn render_hue_shift(source: &PixelBuffer, degrees: f64) -> Cow<'_, PixelBuffer> {
    let rotation = normalize_hue(degrees);
    if rotation == 0.0 || source.is_empty() {
        return Cow::Borrowed(source);
    }

    let order = source.order();
    let mut output = source.clone();

    for px in output.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        let hsla = rgba_to_hsla(order.decode(px));
        let shifted = hsla.rotate(rotation);
        let colour = hsla_to_rgba(shifted.hue, shifted.saturation, shifted.lightness, 255);
        order.encode(colour, px);
    }

    Cow::Owned(output)
}

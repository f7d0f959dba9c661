//! Raw 32-bit pixel buffers.

use std::fmt;

use crate::error::{Result, SwatchError};
use crate::types::Colour;

/// Bytes per pixel in every buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte layout of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// B, G, R, A: native 32bpp ARGB on little-endian hosts.
    Bgra,
    /// A, R, G, B: native 32bpp ARGB on big-endian hosts.
    Argb,
    /// R, G, B, A: decoded images from the `image` crate.
    Rgba,
}

impl ChannelOrder {
    /// Layout of a native 32bpp ARGB bitmap on this host.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            ChannelOrder::Bgra
        } else {
            ChannelOrder::Argb
        }
    }

    /// Decode one pixel. `bytes` must hold at least four bytes.
    pub fn decode(self, bytes: &[u8]) -> Colour {
        match self {
            ChannelOrder::Bgra => Colour::from_argb(bytes[3], bytes[2], bytes[1], bytes[0]),
            ChannelOrder::Argb => Colour::from_argb(bytes[0], bytes[1], bytes[2], bytes[3]),
            ChannelOrder::Rgba => Colour::from_argb(bytes[3], bytes[0], bytes[1], bytes[2]),
        }
    }

    /// Encode one pixel into the first four bytes of `out`.
    pub fn encode(self, colour: Colour, out: &mut [u8]) {
        let bytes = match self {
            ChannelOrder::Bgra => [colour.b(), colour.g(), colour.r(), colour.a()],
            ChannelOrder::Argb => [colour.a(), colour.r(), colour.g(), colour.b()],
            ChannelOrder::Rgba => [colour.r(), colour.g(), colour.b(), colour.a()],
        };
        out[..BYTES_PER_PIXEL].copy_from_slice(&bytes);
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelOrder::Bgra => write!(f, "BGRA"),
            ChannelOrder::Argb => write!(f, "ARGB"),
            ChannelOrder::Rgba => write!(f, "RGBA"),
        }
    }
}

/// A width x height image stored as packed 4-byte pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with transparent black.
    pub fn new(width: u32, height: u32, order: ChannelOrder) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            order,
            data: vec![0; len],
        }
    }

    /// Wrap existing pixel bytes.
    ///
    /// Fails if `data` is not exactly `width * height * 4` bytes long.
    pub fn from_raw(width: u32, height: u32, order: ChannelOrder, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(SwatchError::Format {
                message: format!(
                    "Pixel buffer of {}x{} needs {} bytes, got {}",
                    width,
                    height,
                    expected,
                    data.len()
                ),
                help: None,
            });
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        order: ChannelOrder,
        mut f: impl FnMut(u32, u32) -> Colour,
    ) -> Self {
        let mut buffer = Self::new(width, height, order);
        for y in 0..height {
            for x in 0..width {
                buffer.put(x, y, f(x, y));
            }
        }
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Colour under the point, or `None` outside the image.
    pub fn sample(&self, x: u32, y: u32) -> Option<Colour> {
        let offset = self.offset(x, y)?;
        Some(self.order.decode(&self.data[offset..offset + BYTES_PER_PIXEL]))
    }

    /// Overwrite a pixel; points outside the image are ignored.
    pub fn put(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(offset) = self.offset(x, y) {
            self.order.encode(colour, &mut self.data[offset..]);
        }
    }

    /// Iterate over decoded pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        let order = self.order;
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(move |px| order.decode(px))
    }

    /// Re-encode every pixel with another channel order.
    pub fn to_order(&self, order: ChannelOrder) -> PixelBuffer {
        if order == self.order {
            return self.clone();
        }
        let mut out = PixelBuffer::new(self.width, self.height, order);
        for (src, dst) in self
            .data
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(out.data.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            order.encode(self.order.decode(src), dst);
        }
        out
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

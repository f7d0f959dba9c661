//! The hue-mapped colour wheel surface.
//!
//! A `HueWheel` keeps the neutral (unrotated) wheel image in memory and
//! hands out hue-shifted copies of it. The base image is loaded the first
//! time it is needed and reused for every later rotation.

use std::borrow::Cow;
use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::types::{hsla_to_rgba, Colour};

use super::buffer::{ChannelOrder, PixelBuffer};
use super::hue::render_hue_shift;
use super::png::read_png;

/// Where the neutral wheel image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelSource {
    /// Decode an image file.
    File(PathBuf),
    /// Generate the built-in hue/lightness gradient at this size.
    Generated { width: u32, height: u32 },
}

/// Lazily loaded base wheel plus hue rotation.
#[derive(Debug)]
pub struct HueWheel {
    source: WheelSource,
    base: OnceCell<PixelBuffer>,
}

impl HueWheel {
    pub fn new(source: WheelSource) -> Self {
        Self {
            source,
            base: OnceCell::new(),
        }
    }

    /// Wheel built from an already decoded image.
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        let wheel = Self::new(WheelSource::Generated {
            width: buffer.width(),
            height: buffer.height(),
        });
        // freshly created cell, cannot already be set
        let _ = wheel.base.set(buffer);
        wheel
    }

    pub fn source(&self) -> &WheelSource {
        &self.source
    }

    /// Whether the base image has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.base.get().is_some()
    }

    /// The neutral wheel, loading it on first use.
    pub fn base(&self) -> Result<&PixelBuffer> {
        if let Some(base) = self.base.get() {
            return Ok(base);
        }

        let buffer = match &self.source {
            WheelSource::File(path) => {
                debug!(path = %path.display(), "loading wheel image");
                read_png(path)?
            }
            WheelSource::Generated { width, height } => {
                debug!(width, height, "generating wheel image");
                neutral_wheel(*width, *height)
            }
        };

        Ok(self.base.get_or_init(|| buffer))
    }

    /// The wheel with every hue advanced by `degrees`.
    ///
    /// Rotations that wrap to 0 return the cached base image itself.
    pub fn rotated(&self, degrees: f64) -> Result<Cow<'_, PixelBuffer>> {
        Ok(render_hue_shift(self.base()?, degrees))
    }

    /// Colour at a point of the wheel rotated by `degrees`.
    pub fn sample(&self, degrees: f64, x: u32, y: u32) -> Result<Option<Colour>> {
        Ok(self.rotated(degrees)?.sample(x, y))
    }
}

/// The built-in neutral wheel: hue sweeps left to right from 0 to 360,
/// lightness top to bottom from white to black, at full saturation.
pub fn neutral_wheel(width: u32, height: u32) -> PixelBuffer {
    let hue_step = 360.0 / width.max(1) as f64;
    let light_step = 1.0 / height.saturating_sub(1).max(1) as f64;

    PixelBuffer::from_fn(width, height, ChannelOrder::native(), |x, y| {
        let hue = x as f64 * hue_step;
        let lightness = 1.0 - y as f64 * light_step;
        hsla_to_rgba(hue, 1.0, lightness, 255)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::write_png;
    use crate::types::rgba_to_hsla;
    use tempfile::tempdir;

    #[test]
    fn test_neutral_wheel_layout() {
        let wheel = neutral_wheel(12, 5);
        assert_eq!((wheel.width(), wheel.height()), (12, 5));
        assert_eq!(wheel.order(), ChannelOrder::native());

        assert_eq!(wheel.sample(0, 0), Some(Colour::WHITE));
        assert_eq!(wheel.sample(7, 4), Some(Colour::BLACK));
        assert_eq!(wheel.sample(0, 2), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(wheel.sample(4, 2), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(wheel.sample(8, 2), Some(Colour::rgb(0, 0, 255)));
    }

    #[test]
    fn test_lazy_load() {
        let wheel = HueWheel::new(WheelSource::Generated {
            width: 8,
            height: 4,
        });
        assert!(!wheel.is_loaded());

        let first = wheel.rotated(0.0).unwrap();
        assert!(matches!(first, Cow::Borrowed(_)));
        assert!(wheel.is_loaded());

        let base: *const PixelBuffer = wheel.base().unwrap();
        assert!(std::ptr::eq(base, &*first));
    }

    #[test]
    fn test_rotation_shifts_hue() {
        let wheel = HueWheel::new(WheelSource::Generated {
            width: 12,
            height: 5,
        });
        let pixel = wheel.sample(120.0, 0, 2).unwrap().unwrap();
        assert_eq!(pixel, Colour::rgb(0, 255, 0));

        let hsla = rgba_to_hsla(wheel.sample(45.0, 4, 2).unwrap().unwrap());
        assert!((hsla.hue - 165.0).abs() < 1.0);

        // the cached base is untouched by rotation
        assert_eq!(wheel.base().unwrap().sample(0, 2), Some(Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wheel.png");
        write_png(&neutral_wheel(6, 3), &path).unwrap();

        let wheel = HueWheel::new(WheelSource::File(path));
        let base = wheel.base().unwrap();
        assert_eq!(base.order(), ChannelOrder::Rgba);
        assert_eq!(base.sample(0, 1), Some(Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_missing_file_source() {
        let dir = tempdir().unwrap();
        let wheel = HueWheel::new(WheelSource::File(dir.path().join("gone.png")));
        assert!(wheel.rotated(30.0).is_err());
        assert!(!wheel.is_loaded());
    }

    #[test]
    fn test_from_buffer_is_loaded() {
        let wheel = HueWheel::from_buffer(neutral_wheel(2, 2));
        assert!(wheel.is_loaded());
        assert_eq!(wheel.sample(0.0, 5, 5).unwrap(), None);
    }
}

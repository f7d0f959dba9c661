//! Colour picker state.
//!
//! `Picker` is the model behind a picker widget: channel sliders, HSL
//! sliders, a hex box, swatches and sampled wheel pixels all funnel into
//! it. Each edit builds a new `Colour`, stores it, and notifies the
//! `on_pick` listeners.

use std::fmt;

use crate::error::Result;
use crate::render::PixelBuffer;
use crate::types::{hex_to_colour, hsla_to_rgba, rgba_to_hsla, Colour, Hsla, Swatch};

/// An RGBA channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

type Listener = Box<dyn FnMut(Colour)>;

/// Current colour plus change listeners.
pub struct Picker {
    colour: Colour,
    listeners: Vec<Listener>,
}

impl Picker {
    /// Picker starting at white.
    pub fn new() -> Self {
        Self::with_colour(Colour::WHITE)
    }

    pub fn with_colour(colour: Colour) -> Self {
        Self {
            colour,
            listeners: Vec::new(),
        }
    }

    /// Register a callback run after every change of colour.
    pub fn on_pick(&mut self, listener: impl FnMut(Colour) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn hsla(&self) -> Hsla {
        rgba_to_hsla(self.colour)
    }

    /// Current colour as `RRGGBB`.
    pub fn hex(&self) -> String {
        self.colour.to_hex()
    }

    pub fn set_colour(&mut self, colour: Colour) -> Colour {
        self.colour = colour;
        for listener in &mut self.listeners {
            listener(colour);
        }
        colour
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) -> Colour {
        let c = self.colour;
        let next = match channel {
            Channel::Red => c.with_red(value),
            Channel::Green => c.with_green(value),
            Channel::Blue => c.with_blue(value),
            Channel::Alpha => c.with_alpha(value),
        };
        self.set_colour(next)
    }

    /// Replace the hue (degrees), keeping saturation, lightness and alpha.
    pub fn set_hue(&mut self, hue: f64) -> Colour {
        let hsla = self.hsla();
        self.set_colour(hsla_to_rgba(hue, hsla.saturation, hsla.lightness, hsla.alpha))
    }

    /// Replace the saturation, keeping hue, lightness and alpha.
    pub fn set_saturation(&mut self, saturation: f64) -> Colour {
        let hsla = self.hsla();
        self.set_colour(hsla_to_rgba(hsla.hue, saturation, hsla.lightness, hsla.alpha))
    }

    /// Replace the lightness, keeping hue, saturation and alpha.
    pub fn set_lightness(&mut self, lightness: f64) -> Colour {
        let hsla = self.hsla();
        self.set_colour(hsla_to_rgba(hsla.hue, hsla.saturation, lightness, hsla.alpha))
    }

    /// Take the colour typed into a hex box.
    ///
    /// Bad input leaves the current colour alone and notifies nobody.
    /// Hex text carries no alpha, so the result is opaque.
    pub fn set_hex(&mut self, text: &str) -> Result<Colour> {
        let colour = hex_to_colour(text)?;
        Ok(self.set_colour(colour))
    }

    pub fn pick_swatch(&mut self, swatch: &Swatch) -> Colour {
        self.set_colour(swatch.colour)
    }

    /// Take the colour under a point of an image, if the point is inside it.
    pub fn sample(&mut self, image: &PixelBuffer, x: u32, y: u32) -> Option<Colour> {
        let colour = image.sample(x, y)?;
        Some(self.set_colour(colour))
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("colour", &self.colour)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

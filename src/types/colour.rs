//! Colour type and hex conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// An RGBA colour value.
///
/// Colours are immutable: the `with_*` methods return a new value rather
/// than editing a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour from ARGB components, in that argument order.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    pub const fn a(self) -> u8 {
        self.a
    }

    /// Copy with a new red channel.
    pub const fn with_red(self, r: u8) -> Self {
        Self { r, ..self }
    }

    /// Copy with a new green channel.
    pub const fn with_green(self, g: u8) -> Self {
        Self { g, ..self }
    }

    /// Copy with a new blue channel.
    pub const fn with_blue(self, b: u8) -> Self {
        Self { b, ..self }
    }

    /// Copy with a new alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse a `RRGGBB` hex string, optionally prefixed with `#`.
    ///
    /// Alpha is not part of the text and is always 255.
    pub fn from_hex(s: &str) -> Result<Self> {
        hex_to_colour(s)
    }

    /// Format as uppercase `RRGGBB` without alpha.
    pub fn to_hex(self) -> String {
        colour_to_hex(self)
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Format the RGB channels as six uppercase hex digits. Alpha is dropped.
pub fn colour_to_hex(colour: Colour) -> String {
    format!("{:02X}{:02X}{:02X}", colour.r, colour.g, colour.b)
}

/// Parse six hex digits (optionally `#`-prefixed) into an opaque colour.
pub fn hex_to_colour(s: &str) -> Result<Colour> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SwatchError::Format {
            message: format!("Invalid hex colour: {:?}", s),
            help: Some("Use RRGGBB or #RRGGBB".to_string()),
        });
    }

    let r = parse_hex_byte(&hex[0..2])?;
    let g = parse_hex_byte(&hex[2..4])?;
    let b = parse_hex_byte(&hex[4..6])?;
    Ok(Colour::rgb(r, g, b))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Format {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        let c = hex_to_colour("#1a2b3c").unwrap();
        assert_eq!(c, Colour::from_argb(255, 26, 43, 60));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = hex_to_colour("FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_trims_whitespace() {
        let c = hex_to_colour("  #00ff00\n").unwrap();
        assert_eq!(c, Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(hex_to_colour("GGGGGG").unwrap_err().is_format());
        assert!(hex_to_colour("#12345").is_err());
        assert!(hex_to_colour("#1234567").is_err());
        assert!(hex_to_colour("#FFF").is_err());
        assert!(hex_to_colour("").is_err());
        assert!(hex_to_colour("##123456").is_err());
        assert!(hex_to_colour("+12345").is_err());
    }

    #[test]
    fn test_from_hex_rejects_multibyte() {
        // six bytes, but not six hex digits
        assert!(hex_to_colour("ééé").is_err());
    }

    #[test]
    fn test_to_hex_drops_alpha() {
        assert_eq!(colour_to_hex(Colour::new(1, 171, 255, 7)), "01ABFF");
    }

    #[test]
    fn test_hex_keeps_rgb() {
        for &c in &[
            Colour::new(0, 0, 0, 0),
            Colour::new(18, 52, 86, 120),
            Colour::new(255, 254, 253, 1),
        ] {
            let back = hex_to_colour(&colour_to_hex(c)).unwrap();
            assert_eq!((back.r(), back.g(), back.b()), (c.r(), c.g(), c.b()));
            assert!(back.is_opaque());
        }
    }

    #[test]
    fn test_with_channel_returns_new_value() {
        let base = Colour::rgb(10, 20, 30);
        let red = base.with_red(200);
        assert_eq!(base.r(), 10);
        assert_eq!(red, Colour::rgb(200, 20, 30));
        assert_eq!(base.with_alpha(0).a(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#ABCDEF".parse().unwrap();
        assert_eq!(c, Colour::rgb(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::default(), Colour::WHITE);
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::BLACK.is_opaque());
    }
}

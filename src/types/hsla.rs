//! HSL colour model and conversions to and from RGBA bytes.

use serde::{Deserialize, Serialize};

use super::Colour;

/// Slack added before truncating a channel to a byte.
///
/// Far below one byte step; it only absorbs floating-point error so that
/// a value meant to be exactly `n / 255` does not truncate to `n - 1`.
const QUANTIZE_EPSILON: f64 = 1e-6;

/// Hue (degrees), saturation, lightness and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation, `[0, 1]`.
    pub saturation: f64,
    /// Lightness, `[0, 1]`.
    pub lightness: f64,
    /// Alpha, copied through untouched.
    pub alpha: u8,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Copy with the hue advanced by `degrees`, wrapped into `[0, 360)`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            hue: normalize_hue(self.hue + degrees),
            ..self
        }
    }

    /// Convert back to RGBA bytes.
    pub fn to_colour(self) -> Colour {
        hsla_to_rgba(self.hue, self.saturation, self.lightness, self.alpha)
    }
}

impl From<Colour> for Hsla {
    fn from(colour: Colour) -> Self {
        rgba_to_hsla(colour)
    }
}

impl From<Hsla> for Colour {
    fn from(hsla: Hsla) -> Self {
        hsla.to_colour()
    }
}

/// Wrap any finite angle into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Derive hue, saturation and lightness from RGB bytes.
///
/// When several channels share the maximum, red wins over green and
/// green over blue. Greys (max == min) have hue and saturation 0.
pub fn rgba_to_hsla(colour: Colour) -> Hsla {
    let r = colour.r() as f64 / 255.0;
    let g = colour.g() as f64 / 255.0;
    let b = colour.b() as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if colour.r() == colour.g() && colour.g() == colour.b() {
        return Hsla::new(0.0, 0.0, lightness, colour.a());
    }

    let delta = max - min;

    let hue = if colour.r() >= colour.g() && colour.r() >= colour.b() {
        (g - b) / delta
    } else if colour.g() >= colour.b() {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let hue = normalize_hue(hue * 60.0);

    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsla::new(hue, saturation, lightness, colour.a())
}

/// Build RGBA bytes from hue, saturation, lightness and alpha.
///
/// The hue may be any finite angle; saturation and lightness are clamped
/// to `[0, 1]`. Channels are truncated, not rounded.
pub fn hsla_to_rgba(hue: f64, saturation: f64, lightness: f64, alpha: u8) -> Colour {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = quantize(l);
        return Colour::new(v, v, v, alpha);
    }

    let (max, min) = if l <= 0.5 {
        (l + l * s, l - l * s)
    } else {
        (l + s - l * s, l - s + l * s)
    };
    let span = max - min;

    let h = normalize_hue(hue) / 60.0;
    let sextant = (h.floor() as u8).min(5);
    let f = h - sextant as f64;
    let rising = min + f * span;
    let falling = max - f * span;

    let (r, g, b) = match sextant {
        0 => (max, rising, min),
        1 => (falling, max, min),
        2 => (min, max, rising),
        3 => (min, falling, max),
        4 => (rising, min, max),
        _ => (max, min, falling),
    };

    Colour::new(quantize(r), quantize(g), quantize(b), alpha)
}

fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + QUANTIZE_EPSILON).min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{Hsl, IntoColor, Srgb};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primaries() {
        let red = rgba_to_hsla(Colour::rgb(255, 0, 0));
        assert!(approx(red.hue, 0.0));
        assert!(approx(red.saturation, 1.0));
        assert!(approx(red.lightness, 0.5));

        assert!(approx(rgba_to_hsla(Colour::rgb(0, 255, 0)).hue, 120.0));
        assert!(approx(rgba_to_hsla(Colour::rgb(0, 0, 255)).hue, 240.0));
    }

    #[test]
    fn test_tie_break_prefers_red_then_green() {
        // yellow: red and green share the max
        assert!(approx(rgba_to_hsla(Colour::rgb(255, 255, 0)).hue, 60.0));
        // cyan: green and blue share the max
        assert!(approx(rgba_to_hsla(Colour::rgb(0, 255, 255)).hue, 180.0));
        // magenta: red and blue share the max
        assert!(approx(rgba_to_hsla(Colour::rgb(255, 0, 255)).hue, 300.0));
    }

    #[test]
    fn test_achromatic() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let hsla = rgba_to_hsla(Colour::new(v, v, v, 42));
            assert_eq!(hsla.hue, 0.0);
            assert_eq!(hsla.saturation, 0.0);
            assert!(approx(hsla.lightness, v as f64 / 255.0));
            assert_eq!(hsla.alpha, 42);
        }
    }

    #[test]
    fn test_hsla_to_rgba_normalizes_hue() {
        let a = hsla_to_rgba(120.0, 1.0, 0.5, 255);
        assert_eq!(a, Colour::rgb(0, 255, 0));
        assert_eq!(hsla_to_rgba(480.0, 1.0, 0.5, 255), a);
        assert_eq!(hsla_to_rgba(-240.0, 1.0, 0.5, 255), a);
        assert_eq!(hsla_to_rgba(360.0, 1.0, 0.5, 255), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_hsla_to_rgba_truncates() {
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(hsla_to_rgba(0.0, 0.0, 0.5, 255), Colour::rgb(127, 127, 127));
        // hue 30: green channel lands on 127.5
        assert_eq!(hsla_to_rgba(30.0, 1.0, 0.5, 255), Colour::rgb(255, 127, 0));
    }

    #[test]
    fn test_hsla_to_rgba_clamps() {
        assert_eq!(hsla_to_rgba(0.0, 2.0, 1.5, 9), Colour::new(255, 255, 255, 9));
        assert_eq!(hsla_to_rgba(0.0, -1.0, -0.5, 9), Colour::new(0, 0, 0, 9));
    }

    #[test]
    fn test_round_trip_every_rgb() {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let a = r ^ g ^ b;
                    let c = Colour::new(r, g, b, a);
                    let back = rgba_to_hsla(c).to_colour();
                    assert_eq!(back, c, "round trip failed for {:?}", c);
                }
            }
        }
    }

    #[test]
    fn test_rotate_wraps() {
        let h = Hsla::new(300.0, 1.0, 0.5, 255).rotate(90.0);
        assert!(approx(h.hue, 30.0));
        let h = Hsla::new(10.0, 1.0, 0.5, 255).rotate(-20.0);
        assert!(approx(h.hue, 350.0));
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert!(approx(normalize_hue(-90.0), 270.0));
        assert!(approx(normalize_hue(725.0), 5.0));
    }

    #[test]
    fn test_matches_palette_crate() {
        let samples = [
            Colour::rgb(26, 43, 60),
            Colour::rgb(200, 16, 99),
            Colour::rgb(3, 250, 180),
            Colour::rgb(90, 90, 200),
        ];
        for c in samples {
            let ours = rgba_to_hsla(c);
            let rgb = Srgb::new(c.r(), c.g(), c.b()).into_format::<f64>();
            let theirs: Hsl<palette::encoding::Srgb, f64> = rgb.into_color();
            let hue = theirs.hue.into_positive_degrees();
            assert!((ours.hue - hue).abs() < 1e-6, "hue for {:?}", c);
            assert!((ours.saturation - theirs.saturation).abs() < 1e-6);
            assert!((ours.lightness - theirs.lightness).abs() < 1e-6);
        }
    }
}

//! Colors - hue/saturation/brightness and 8-bit RGB
//!
//! Generators that carry color (the color-cycling rings) describe it in HSB,
//! since cycling is just an offset on the hue wheel. Renderers usually want
//! RGB bytes, so `Hsb::to_rgb` does the conversion.

use serde::{Deserialize, Serialize};

/// A color on the hue wheel, every channel in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to 8-bit RGB
    ///
    /// Channels are clamped to [0, 1] first; a hue of exactly 1 is red, the
    /// same as 0.
    pub fn to_rgb(self) -> Rgb {
        let h = self.hue.clamp(0.0, 1.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h * 6.0) as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::from_unit(r + m, g + m, b + m)
    }
}

/// An 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        hsb.to_rgb()
    }
}

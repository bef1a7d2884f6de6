//! HSL value type. Hue is a fraction of the wheel in `[0, 1)`; saturation and lightness in `[0, 1]`.

use serde::{Deserialize, Serialize};

use super::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Continuous conversion from unit RGB channels.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;
        if rangec == 0.0 {
            return Self::new(0.0, 0.0, l);
        }
        let s = if l <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - sumc)
        };
        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;
        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        Self::new((h / 6.0).rem_euclid(1.0), s, l)
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        Self::from_unit_rgb(r, g, b)
    }

    /// Continuous conversion to unit RGB channels.
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        let Self { h, s, l } = self;
        if s == 0.0 {
            return (l, l, l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        (
            hue_channel(m1, m2, h + ONE_THIRD),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Quantize to 8-bit channels. Truncates (`floor(c * 255)`), it does not round.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = self.to_unit_rgb();
        Rgb(quantize(r), quantize(g), quantize(b))
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Rotate hue by `delta` turns, wrapping into `[0, 1)`.
    pub fn rotate(self, delta: f64) -> Self {
        Self {
            h: (self.h + delta).rem_euclid(1.0),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Hsl::from_rgb(rgb)
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

fn quantize(channel: f64) -> u8 {
    (channel * 255.0).floor().clamp(0.0, 255.0) as u8
}

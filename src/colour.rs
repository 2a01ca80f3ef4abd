/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create an RGB colour from hue, lightness and saturation, all ranging from 0.0 to 1.0.
    /// The hue wraps around, so 1.0 is the same hue as 0.0.
    pub fn from_hls(hue: f32, lightness: f32, saturation: f32) -> Colour {
        if saturation == 0.0 {
            return Colour::RGB {
                r: lightness,
                g: lightness,
                b: lightness,
            };
        }

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - (lightness * saturation)
        };
        let m1 = 2.0 * lightness - m2;

        Colour::RGB {
            r: hls_channel(m1, m2, hue + 1.0 / 3.0),
            g: hls_channel(m1, m2, hue),
            b: hls_channel(m1, m2, hue - 1.0 / 3.0),
        }
    }

    /// The (hue, lightness, saturation) of this colour, each ranging from 0.0 to 1.0
    pub fn to_hls(&self) -> (f32, f32, f32) {
        let (r, g, b) = self.rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (min + max) / 2.0;
        if max == min {
            return (0.0, lightness, 0.0);
        }

        let spread = max - min;
        let saturation = if lightness <= 0.5 {
            spread / (max + min)
        } else {
            spread / (2.0 - max - min)
        };

        let rc = (max - r) / spread;
        let gc = (max - g) / spread;
        let bc = (max - b) / spread;
        let hue = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        ((hue / 6.0).rem_euclid(1.0), lightness, saturation)
    }

    /// The colour as red, green, and blue components
    pub fn rgb(&self) -> (f32, f32, f32) {
        match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::Grey { g } => (g, g, g),
        }
    }
}

fn hls_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

/// One display pixel: alpha, red, green and blue, colour channels
/// premultiplied by alpha.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const TRANSPARENT: Self = Self { a: 0, r: 0, g: 0, b: 0 };
    pub const BLACK: Self = Self { a: 255, r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Byte layout used by the pixel buffer.
    #[must_use]
    pub const fn to_argb(self) -> [u8; 4] {
        [self.a, self.r, self.g, self.b]
    }

    #[must_use]
    pub fn to_hsba(self) -> Hsba {
        let alpha = channel_to_unit(self.a);

        // un-premultiply before leaving 8-bit space
        let (r, g, b) = if self.a == 0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                (channel_to_unit(self.r) / alpha).min(1.0),
                (channel_to_unit(self.g) / alpha).min(1.0),
                (channel_to_unit(self.b) / alpha).min(1.0),
            )
        };

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Hsba {
            hue,
            saturation,
            brightness: max,
            alpha,
        }
    }
}

/// Hue, saturation, brightness and alpha, each in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Hsba {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            hue: lerp(self.hue, other.hue, t),
            saturation: lerp(self.saturation, other.saturation, t),
            brightness: lerp(self.brightness, other.brightness, t),
            alpha: lerp(self.alpha, other.alpha, t),
        }
    }

    /// Hue wraps, the other components clamp.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        let hue = self.hue.rem_euclid(1.0);
        let saturation = self.saturation.clamp(0.0, 1.0);
        let value = self.brightness.clamp(0.0, 1.0);
        let alpha = self.alpha.clamp(0.0, 1.0);

        let sector = hue * 6.0;
        let index = sector.floor();
        let f = sector - index;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match index as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Colour {
            a: unit_to_channel(alpha),
            r: unit_to_channel(r * alpha),
            g: unit_to_channel(g * alpha),
            b: unit_to_channel(b * alpha),
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn channel_to_unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

fn unit_to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_argb_byte_order() {
        let colour = Colour { a: 1, r: 2, g: 3, b: 4 };
        assert_eq!(colour.to_argb(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsba::new(0.0, 1.0, 1.0, 1.0).to_colour(), Colour::opaque(255, 0, 0));
        assert_eq!(Hsba::new(1.0 / 3.0, 1.0, 1.0, 1.0).to_colour(), Colour::opaque(0, 255, 0));
        assert_eq!(Hsba::new(2.0 / 3.0, 1.0, 1.0, 1.0).to_colour(), Colour::opaque(0, 0, 255));
    }

    #[test]
    fn test_hue_of_one_wraps_to_red() {
        assert_eq!(Hsba::new(1.0, 1.0, 1.0, 1.0).to_colour(), Colour::opaque(255, 0, 0));
    }

    #[test]
    fn test_zero_brightness_is_black() {
        assert_eq!(Hsba::new(0.4, 1.0, 0.0, 1.0).to_colour(), Colour::BLACK);
    }

    #[test]
    fn test_alpha_is_premultiplied() {
        let colour = Hsba::new(0.0, 1.0, 1.0, 0.5).to_colour();
        assert_eq!(colour, Colour { a: 128, r: 128, g: 0, b: 0 });
    }

    #[test]
    fn test_round_trip_through_hsba() {
        let colours = [
            Colour::opaque(0, 7, 100),
            Colour::opaque(32, 107, 203),
            Colour::opaque(237, 255, 255),
            Colour::opaque(255, 170, 0),
            Colour::opaque(0, 2, 0),
            Colour::opaque(0, 0, 70),
            Colour::opaque(128, 128, 128),
        ];

        for colour in colours {
            assert_eq!(colour.to_hsba().to_colour(), colour, "round trip of {colour:?}");
        }
    }

    #[test]
    fn test_grey_has_no_saturation() {
        let hsba = Colour::opaque(128, 128, 128).to_hsba();
        assert_eq!(hsba.saturation, 0.0);
        assert_eq!(hsba.hue, 0.0);
    }

    #[test]
    fn test_transparent_to_hsba() {
        let hsba = Colour::TRANSPARENT.to_hsba();
        assert_eq!(hsba, Hsba::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = Hsba::new(0.0, 0.0, 0.0, 0.0);
        let to = Hsba::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(from.lerp(to, 0.5), Hsba::new(0.5, 0.5, 0.5, 0.5));
    }
}

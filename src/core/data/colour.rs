pub const OPAQUE_ALPHA: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a colour from channel intensities in `0.0..=255.0`.
    ///
    /// Values are floored, and anything outside the byte range (including NaN)
    /// is clamped into it.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_byte(r),
            g: channel_to_byte(g),
            b: channel_to_byte(b),
        }
    }

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, OPAQUE_ALPHA]
    }
}

fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_channels_floors_values() {
        let colour = Colour::from_channels(127.9, 0.5, 254.999);

        assert_eq!(colour, Colour { r: 127, g: 0, b: 254 });
    }

    #[test]
    fn from_channels_clamps_out_of_range_values() {
        let colour = Colour::from_channels(-12.0, 300.0, f64::NAN);

        assert_eq!(colour, Colour { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn to_rgba_appends_opaque_alpha() {
        assert_eq!(Colour { r: 1, g: 2, b: 3 }.to_rgba(), [1, 2, 3, 255]);
        assert_eq!(Colour::BLACK.to_rgba(), [0, 0, 0, 255]);
    }
}

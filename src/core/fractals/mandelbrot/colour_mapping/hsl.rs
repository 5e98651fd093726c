use crate::core::data::colour::Colour;

/// Converts an HSL triple to RGB.
///
/// `hue` is in turns (`0.0..=1.0`, wrapping), `saturation` and `lightness`
/// in `0.0..=1.0`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let level = lightness * 255.0;
        return Colour::from_channels(level, level, level);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour::from_channels(
        hue_to_rgb(p, q, hue + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, hue) * 255.0,
        hue_to_rgb(p, q, hue - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

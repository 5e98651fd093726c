use crate::core::data::colour::Colour;
use crate::core::data::frame_stats::FrameStats;
use crate::core::fractals::mandelbrot::colour_mapping::hsl::hsl_to_rgb;

const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.5;

/// One full turn of hue across the range, at full saturation.
#[must_use]
pub fn rainbow(count: u32, range: FrameStats) -> Colour {
    hsl_to_rgb(range.ratio(count), SATURATION, LIGHTNESS)
}

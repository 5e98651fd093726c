use crate::core::data::colour::Colour;
use crate::core::data::frame_stats::FrameStats;

#[must_use]
pub fn ocean(count: u32, range: FrameStats) -> Colour {
    let ratio = range.ratio(count);

    Colour::from_channels(0.0, 105.0 * ratio, 255.0 * (1.0 - ratio))
}

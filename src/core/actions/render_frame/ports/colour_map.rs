use crate::core::data::colour::Colour;
use crate::core::data::frame_stats::FrameStats;

/// Turns an escape count into a colour, given the normalization window in
/// effect for that pixel.
pub trait ColourMap {
    fn map(&self, count: u32, range: FrameStats) -> Colour;

    fn display_name(&self) -> &str;
}

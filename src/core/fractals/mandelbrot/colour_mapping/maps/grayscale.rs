use crate::core::data::colour::Colour;
use crate::core::data::frame_stats::FrameStats;

/// Interior points (count 0) are black; everything else fades from white at
/// the bottom of the range to black at the top.
#[must_use]
pub fn grayscale(count: u32, range: FrameStats) -> Colour {
    if count == 0 {
        return Colour::BLACK;
    }

    let level = 255.0 - range.ratio(count) * 255.0;

    Colour::from_channels(level, level, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_is_black_regardless_of_range() {
        assert_eq!(grayscale(0, FrameStats::new(0, 100)), Colour::BLACK);
        assert_eq!(grayscale(0, FrameStats::new(0, 0)), Colour::BLACK);
        assert_eq!(grayscale(0, FrameStats::empty(1000)), Colour::BLACK);
    }

    #[test]
    fn fades_from_white_to_black_across_range() {
        let range = FrameStats::new(0, 100);

        assert_eq!(grayscale(1, range), Colour::grey(252));
        assert_eq!(grayscale(50, range), Colour::grey(127));
        assert_eq!(grayscale(100, range), Colour::grey(0));
    }

    #[test]
    fn degenerate_range_is_white() {
        assert_eq!(grayscale(1000, FrameStats::new(1000, 1000)), Colour::grey(255));
    }
}

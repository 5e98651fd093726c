use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::frame_stats::FrameStats;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    grayscale::grayscale, ocean::ocean, rainbow::rainbow, sunset::sunset,
};

impl ColourMap for ColourScheme {
    fn map(&self, count: u32, range: FrameStats) -> Colour {
        match self {
            Self::Grayscale => grayscale(count, range),
            Self::Rainbow => rainbow(count, range),
            Self::Sunset => sunset(count, range),
            Self::Ocean => ocean(count, range),
        }
    }

    fn display_name(&self) -> &str {
        (*self).display_name()
    }
}

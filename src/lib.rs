mod adapters;
mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::CliArgs;
pub use controllers::cli::render_command::CliRenderController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::viewport::controller::ViewportController;
pub use controllers::viewport::errors::ViewportControllerError;
pub use controllers::viewport::limits::ExplorerLimits;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::evaluate_escape_times::evaluate_escape_times::{
    EvaluateError, evaluate_escape_times,
};
pub use crate::core::actions::evaluate_escape_times::evaluate_escape_times_rayon::evaluate_escape_times_rayon;
pub use crate::core::actions::evaluate_escape_times::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::errors::RenderError;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::render_frame::{
    Frame, render, render_cancelable, render_config, render_tagged,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_stats::FrameStats;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_target::RasterTarget;
pub use crate::core::data::render_config::{NormalizationMode, RenderConfig};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeParseError;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::escape_time::{MandelbrotAlgorithm, escape_time};
pub use crate::core::util::viewport_mapping::{complex_to_pixel, pixel_to_complex};

use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::complex::Complex;
use crate::core::data::raster_target::{DEFAULT_RASTER_HEIGHT, DEFAULT_RASTER_WIDTH, RasterTarget};
use crate::core::data::render_config::{DEFAULT_MAX_ITERATIONS, NormalizationMode, RenderConfig};
use crate::core::data::viewport::{DEFAULT_CENTER, DEFAULT_ZOOM, Viewport};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render one Mandelbrot frame to a PPM image")]
pub struct CliArgs {
    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_RASTER_WIDTH)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_RASTER_HEIGHT)]
    pub height: u32,

    /// Real part of the view center
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    pub center_re: f64,

    /// Imaginary part of the view center
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    pub center_im: f64,

    /// Pixels per unit of the complex plane
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// grayscale, rainbow, sunset or ocean
    #[arg(long, default_value_t = ColourScheme::default().tag().to_owned())]
    pub scheme: String,

    /// streaming or two-pass
    #[arg(long, default_value_t = NormalizationMode::default())]
    pub normalization: NormalizationMode,

    /// Where the PPM image is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Default for CliArgs {
    fn default() -> Self {
        let config = RenderConfig::default();

        Self {
            width: config.raster.width,
            height: config.raster.height,
            center_re: config.viewport.center().real,
            center_im: config.viewport.center().imag,
            zoom: config.viewport.zoom(),
            max_iterations: config.max_iterations,
            scheme: config.scheme.tag().to_owned(),
            normalization: config.normalization,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CliArgs {
    /// Builds the render snapshot. Raster size and iteration budget are left
    /// for the renderer to judge.
    pub fn render_config(&self) -> Result<RenderConfig, Box<dyn Error>> {
        let viewport = Viewport::new(Complex::new(self.center_re, self.center_im), self.zoom)?;
        let scheme = self
            .scheme
            .parse::<ColourScheme>()
            .map_err(RenderError::from)?;

        Ok(RenderConfig {
            raster: RasterTarget::new(self.width, self.height),
            viewport,
            max_iterations: self.max_iterations,
            scheme,
            normalization: self.normalization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_match_default_config() {
        let args = CliArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(args.render_config().unwrap(), RenderConfig::default());
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_default_args_match_parsed_args() {
        let parsed = CliArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();
        let default = CliArgs::default();

        assert_eq!(
            parsed.render_config().unwrap(),
            default.render_config().unwrap()
        );
        assert_eq!(parsed.output, default.output);
    }

    #[test]
    fn test_all_flags_are_applied() {
        let args = CliArgs::try_parse_from([
            "mandelbrot_explorer",
            "--width",
            "320",
            "--height",
            "240",
            "--center-re",
            "-0.75",
            "--center-im",
            "0.1",
            "--zoom",
            "1000",
            "--max-iterations",
            "250",
            "--scheme",
            "Sunset",
            "--normalization",
            "two-pass",
            "--output",
            "frames/deep.ppm",
        ])
        .unwrap();

        let config = args.render_config().unwrap();

        assert_eq!(config.raster, RasterTarget::new(320, 240));
        assert_eq!(config.viewport.center(), Complex::new(-0.75, 0.1));
        assert_eq!(config.viewport.zoom(), 1000.0);
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.scheme, ColourScheme::Sunset);
        assert_eq!(config.normalization, NormalizationMode::TwoPass);
        assert_eq!(args.output, PathBuf::from("frames/deep.ppm"));
    }

    #[test]
    fn test_unknown_scheme_is_invalid_scheme() {
        let args = CliArgs {
            scheme: "infrared".to_owned(),
            ..CliArgs::default()
        };

        let err = args.render_config().unwrap_err();

        assert_eq!(
            err.downcast_ref::<RenderError>(),
            Some(&RenderError::InvalidScheme {
                tag: "infrared".to_owned()
            })
        );
    }

    #[test]
    fn test_non_positive_zoom_is_rejected() {
        let args = CliArgs {
            zoom: 0.0,
            ..CliArgs::default()
        };

        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_unknown_normalization_is_a_parse_error() {
        assert!(
            CliArgs::try_parse_from(["mandelbrot_explorer", "--normalization", "lazy"]).is_err()
        );
    }
}

use crate::core::actions::evaluate_escape_times::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_target::RasterTarget;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::viewport_mapping::pixel_to_complex;
use std::convert::Infallible;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape count for `c`, reported as the iteration budget left over.
///
/// The orbit starts at `z = c`. `max_iterations` means the point escaped on
/// the first check and `0` means it never escaped.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut remaining = max_iterations;

    while remaining > 0 && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        remaining -= 1;
    }

    remaining
}

/// Per-pixel escape-time evaluation over one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    raster: RasterTarget,
    viewport: Viewport,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        raster: RasterTarget,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            raster,
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex(
            f64::from(pixel.x),
            f64::from(pixel.y),
            self.raster,
            self.viewport,
        );

        Ok(escape_time(c, self.max_iterations))
    }

    fn raster(&self) -> RasterTarget {
        self.raster
    }
}

use crate::core::data::point::Point;
use crate::core::data::raster_target::RasterTarget;
use std::error::Error;

/// Per-pixel evaluation over a fixed raster.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn raster(&self) -> RasterTarget;
}

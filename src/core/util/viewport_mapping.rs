use crate::core::data::complex::Complex;
use crate::core::data::raster_target::RasterTarget;
use crate::core::data::viewport::Viewport;

/// Maps a raster position to the complex plane.
///
/// The raster midpoint lands on the viewport center. Positions need not be
/// integral, so sub-pixel click coordinates map just as well.
#[must_use]
pub fn pixel_to_complex(x: f64, y: f64, raster: RasterTarget, viewport: Viewport) -> Complex {
    let center = viewport.center();
    let half_width = f64::from(raster.width) / 2.0;
    let half_height = f64::from(raster.height) / 2.0;

    Complex {
        real: (x - half_width) / viewport.zoom() + center.real,
        imag: (y - half_height) / viewport.zoom() + center.imag,
    }
}

/// Inverse of [`pixel_to_complex`].
#[must_use]
pub fn complex_to_pixel(point: Complex, raster: RasterTarget, viewport: Viewport) -> (f64, f64) {
    let center = viewport.center();
    let half_width = f64::from(raster.width) / 2.0;
    let half_height = f64::from(raster.height) / 2.0;

    (
        (point.real - center.real) * viewport.zoom() + half_width,
        (point.imag - center.imag) * viewport.zoom() + half_height,
    )
}

use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ZOOM: f64 = 200.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a finite value greater than zero: {}", zoom)
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane shown on the raster.
///
/// `center` lands on the raster midpoint and `zoom` is measured in pixels per
/// unit of the complex plane, so larger values magnify.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        Ok(Self { center, zoom })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn with_center(&self, center: Complex) -> Result<Self, ViewportError> {
        Self::new(center, self.zoom)
    }

    pub fn with_zoom(&self, zoom: f64) -> Result<Self, ViewportError> {
        Self::new(self.center, zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

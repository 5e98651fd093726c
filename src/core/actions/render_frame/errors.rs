use crate::core::actions::cancellation::Cancelled;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeParseError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The target has a zero dimension; nothing was allocated.
    InvalidRaster { width: u32, height: u32 },
    InvalidScheme { tag: String },
    ZeroMaxIterations,
    Cancelled(Cancelled),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRaster { width, height } => {
                write!(f, "raster dimensions must be positive: {}x{}", width, height)
            }
            Self::InvalidScheme { tag } => write!(f, "unknown colour scheme: {}", tag),
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            _ => None,
        }
    }
}

impl From<ColourSchemeParseError> for RenderError {
    fn from(err: ColourSchemeParseError) -> Self {
        Self::InvalidScheme { tag: err.tag }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        match err {
            MandelbrotError::ZeroMaxIterationsError => Self::ZeroMaxIterations,
        }
    }
}

impl From<Cancelled> for RenderError {
    fn from(err: Cancelled) -> Self {
        Self::Cancelled(err)
    }
}

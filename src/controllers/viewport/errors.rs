use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::viewport::ViewportError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportControllerError {
    Viewport(ViewportError),
    Render(RenderError),
    IterationsOutOfRange { requested: u32, max: u32 },
}

impl fmt::Display for ViewportControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::IterationsOutOfRange { requested, max } => {
                write!(
                    f,
                    "iteration budget {} is outside the allowed range 1..={}",
                    requested, max
                )
            }
        }
    }
}

impl Error for ViewportControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::IterationsOutOfRange { .. } => None,
        }
    }
}

impl From<ViewportError> for ViewportControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderError> for ViewportControllerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

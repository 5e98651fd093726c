use crate::core::data::raster_target::RasterTarget;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// How iteration counts are rescaled before colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizationMode {
    /// Colour each pixel against the range seen so far in row-major order.
    /// Early pixels see a narrower window, which bands the top-left of every
    /// frame.
    #[default]
    Streaming,
    /// Evaluate every count first and colour against the final frame range.
    TwoPass,
}

impl NormalizationMode {
    pub const ALL: &'static [Self] = &[Self::Streaming, Self::TwoPass];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::TwoPass => "two-pass",
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationModeParseError {
    pub tag: String,
}

impl fmt::Display for NormalizationModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown normalization mode: {}", self.tag)
    }
}

impl std::error::Error for NormalizationModeParseError {}

impl FromStr for NormalizationMode {
    type Err = NormalizationModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NormalizationModeParseError { tag: s.to_owned() })
    }
}

/// Immutable snapshot of everything a single frame depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub raster: RasterTarget,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub scheme: ColourScheme,
    pub normalization: NormalizationMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            raster: RasterTarget::default(),
            viewport: Viewport::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scheme: ColourScheme::default(),
            normalization: NormalizationMode::default(),
        }
    }
}

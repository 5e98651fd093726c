use crate::core::actions::cancellation::{CancelToken, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS};
use crate::core::actions::evaluate_escape_times::evaluate_escape_times::EvaluateError;
use crate::core::actions::evaluate_escape_times::evaluate_escape_times_rayon::evaluate_escape_times_rayon;
use crate::core::actions::evaluate_escape_times::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::frame_stats::FrameStats;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_target::RasterTarget;
use crate::core::data::render_config::{NormalizationMode, RenderConfig};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::escape_time::MandelbrotAlgorithm;
use std::convert::Infallible;
use std::time::Instant;
use tracing::{debug, warn};

/// One finished frame: the pixels and the escape-count range they span.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub pixel_buffer: PixelBuffer,
    pub stats: FrameStats,
}

impl Frame {
    #[must_use]
    pub fn into_parts(self) -> (PixelBuffer, FrameStats) {
        (self.pixel_buffer, self.stats)
    }
}

/// Renders one frame with streaming normalization.
pub fn render(
    raster: RasterTarget,
    viewport: Viewport,
    max_iterations: u32,
    scheme: ColourScheme,
) -> Result<Frame, RenderError> {
    render_config(&RenderConfig {
        raster,
        viewport,
        max_iterations,
        scheme,
        normalization: NormalizationMode::Streaming,
    })
}

/// Like [`render`], with the scheme given as a tag such as `"ocean"`.
pub fn render_tagged(
    raster: RasterTarget,
    viewport: Viewport,
    max_iterations: u32,
    scheme_tag: &str,
) -> Result<Frame, RenderError> {
    let scheme: ColourScheme = scheme_tag.parse()?;

    render(raster, viewport, max_iterations, scheme)
}

pub fn render_config(config: &RenderConfig) -> Result<Frame, RenderError> {
    render_cancelable(config, &NeverCancel)
}

/// Renders `config`, giving up with [`RenderError::Cancelled`] once `cancel`
/// fires. A cancelled render hands back no pixels.
pub fn render_cancelable<C: CancelToken>(
    config: &RenderConfig,
    cancel: &C,
) -> Result<Frame, RenderError> {
    let algorithm = validate(config)?;
    let start = Instant::now();

    let frame = match config.normalization {
        NormalizationMode::Streaming => render_streaming_with(
            &algorithm,
            algorithm.max_iterations(),
            &config.scheme,
            cancel,
        ),
        NormalizationMode::TwoPass => render_two_pass(&algorithm, &config.scheme, cancel),
    }?;

    debug!(
        width = config.raster.width,
        height = config.raster.height,
        max_iterations = config.max_iterations,
        scheme = config.scheme.tag(),
        normalization = config.normalization.tag(),
        min_iterations = frame.stats.min_iterations,
        max_iterations_seen = frame.stats.max_iterations,
        elapsed = ?start.elapsed(),
        "frame rendered"
    );

    Ok(frame)
}

fn validate(config: &RenderConfig) -> Result<MandelbrotAlgorithm, RenderError> {
    if config.raster.is_empty() || !config.raster.fits_point_grid() {
        warn!(
            width = config.raster.width,
            height = config.raster.height,
            "refusing to render into an empty or oversized raster"
        );
        return Err(RenderError::InvalidRaster {
            width: config.raster.width,
            height: config.raster.height,
        });
    }

    Ok(MandelbrotAlgorithm::new(
        config.raster,
        config.viewport,
        config.max_iterations,
    )?)
}

/// Single row-major pass. Each pixel widens the running range first and is then
/// coloured against the range seen so far.
fn render_streaming_with<Alg, CMap, C>(
    algorithm: &Alg,
    iteration_budget: u32,
    colour_map: &CMap,
    cancel: &C,
) -> Result<Frame, RenderError>
where
    Alg: FractalAlgorithm<Success = u32, Failure = Infallible>,
    CMap: ColourMap,
    C: CancelToken,
{
    let raster = algorithm.raster();
    let mut pixel_buffer = PixelBuffer::new(raster);
    let mut stats = FrameStats::empty(iteration_budget);

    for (point, pixel) in raster.points().zip(pixel_buffer.pixels_mut()) {
        if point.x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }

        let count = algorithm.compute(point).unwrap_or_else(|never| match never {});
        stats.record(count);
        pixel.copy_from_slice(&colour_map.map(count, stats).to_rgba());
    }

    Ok(Frame {
        pixel_buffer,
        stats,
    })
}

/// Evaluates all counts (rows in parallel), then colours every pixel against
/// the final frame range.
fn render_two_pass<CMap, C>(
    algorithm: &MandelbrotAlgorithm,
    colour_map: &CMap,
    cancel: &C,
) -> Result<Frame, RenderError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let counts = evaluate_escape_times_rayon(algorithm, cancel).map_err(|e| match e {
        EvaluateError::Cancelled(c) => RenderError::Cancelled(c),
        EvaluateError::Algorithm(never) => match never {},
    })?;

    let stats = FrameStats::from_counts(algorithm.max_iterations(), &counts);
    let pixel_buffer = colourize(&counts, algorithm.raster(), stats, colour_map, cancel)?;

    Ok(Frame {
        pixel_buffer,
        stats,
    })
}

fn colourize<CMap, C>(
    counts: &[u32],
    raster: RasterTarget,
    range: FrameStats,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, RenderError>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let mut pixel_buffer = PixelBuffer::new(raster);

    for (i, (&count, pixel)) in counts.iter().zip(pixel_buffer.pixels_mut()).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }

        pixel.copy_from_slice(&colour_map.map(count, range).to_rgba());
    }

    Ok(pixel_buffer)
}

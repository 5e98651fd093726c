use crate::core::actions::cancellation::{CancelToken, Cancelled, CANCEL_CHECK_INTERVAL_PIXELS};
use crate::core::actions::evaluate_escape_times::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Error type for cancelable evaluation.
///
/// Keeps cancellation apart from algorithm failures so callers can treat it as
/// control flow rather than something to report.
#[derive(Debug)]
pub enum EvaluateError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for EvaluateError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluateError::Cancelled(c) => write!(f, "{}", c),
            EvaluateError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for EvaluateError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvaluateError::Cancelled(c) => Some(c),
            EvaluateError::Algorithm(e) => Some(e),
        }
    }
}

/// Evaluates every pixel of the algorithm's raster on the calling thread, in
/// row-major order.
///
/// Polls `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn evaluate_escape_times<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, EvaluateError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let raster = algorithm.raster();
    let mut results = Vec::with_capacity(raster.pixel_count());

    for y in 0..i32::try_from(raster.height).unwrap_or(i32::MAX) {
        for x in 0..i32::try_from(raster.width).unwrap_or(i32::MAX) {
            if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                cancel.check().map_err(EvaluateError::Cancelled)?;
            }

            let result = algorithm
                .compute(Point { x, y })
                .map_err(EvaluateError::Algorithm)?;
            results.push(result);
        }
    }

    Ok(results)
}

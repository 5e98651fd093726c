use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, CANCEL_CHECK_INTERVAL_PIXELS};
use crate::core::actions::evaluate_escape_times::evaluate_escape_times::EvaluateError;
use crate::core::actions::evaluate_escape_times::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel with rows spread over rayon's work-stealing pool.
///
/// Produces exactly what [`evaluate_escape_times`] does on one thread: rows are
/// computed independently and stitched back together in row-major order.
/// Cancellation is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within it.
///
/// [`evaluate_escape_times`]: super::evaluate_escape_times::evaluate_escape_times
pub fn evaluate_escape_times_rayon<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, EvaluateError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let raster = algorithm.raster();
    let row_width = raster.width as usize;
    let row_count = i32::try_from(raster.height).unwrap_or(i32::MAX);

    let rows: Result<Vec<Vec<Alg::Success>>, EvaluateError<Alg::Failure>> = (0..row_count)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..i32::try_from(raster.width).unwrap_or(i32::MAX) {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.check().map_err(EvaluateError::Cancelled)?;
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(EvaluateError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

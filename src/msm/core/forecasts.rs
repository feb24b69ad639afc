//! Monte-Carlo volatility forecasts for MSM-BT models.
//!
//! Purpose
//! -------
//! Turn fitted parameters into a point forecast of realized volatility over
//! a horizon, with a Monte-Carlo standard error.
//!
//! Key behaviors
//! -------------
//! - Simulate `num_paths` independent paths of `path_len` returns.
//! - Each path contributes its sample standard deviation (`n − 1`).
//! - Report the mean of those volatilities, their sample standard deviation,
//!   and the standard error `std_dev / √num_paths`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `num_paths ≥ 2` and `path_len ≥ 2`; anything less cannot produce a
//!   standard deviation and is rejected.
//! - Paths run in parallel on the rayon pool. Each path owns a ChaCha20
//!   stream seeded from a per-path seed drawn *sequentially* from the
//!   caller's RNG before any path starts, so the result does not depend on
//!   thread count or scheduling.
//!
//! Testing notes
//! -------------
//! - Degenerate parameters (`m0 = 1`, `p = 0`) pin the forecast near `s0`,
//!   the standard error shrinks with more paths, and identical seeds give
//!   identical results.
use crate::msm::{
    core::{options::SimStart, params::MSMParams, simulation::simulate_path},
    errors::{MSMError, MSMResult},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use statrs::statistics::Statistics;
use tracing::debug;

/// MSMForecastResult — summary of a Monte-Carlo volatility forecast.
///
/// Fields
/// ------
/// - `mean`: average per-path volatility (the point forecast).
/// - `std_dev`: sample standard deviation of the per-path volatilities.
/// - `standard_error`: `std_dev / √num_paths`.
/// - `num_paths`, `path_len`: simulation size that produced the numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MSMForecastResult {
    pub mean: f64,
    pub std_dev: f64,
    pub standard_error: f64,
    pub num_paths: usize,
    pub path_len: usize,
}

/// Forecast volatility over `path_len` steps from `num_paths` simulated paths.
///
/// # Errors
/// - [`MSMError::InvalidForecastConfig`] if `num_paths < 2` or `path_len < 2`.
/// - Parameter-domain or sampling errors from the simulator.
pub fn predict_volatility<R: Rng + ?Sized>(
    params: &MSMParams, num_paths: usize, path_len: usize, start: SimStart, rng: &mut R,
) -> MSMResult<MSMForecastResult> {
    if num_paths < 2 {
        return Err(MSMError::InvalidForecastConfig {
            num_paths,
            path_len,
            reason: "At least two paths are needed for a standard error.",
        });
    }
    if path_len < 2 {
        return Err(MSMError::InvalidForecastConfig {
            num_paths,
            path_len,
            reason: "Each path needs at least two returns for a standard deviation.",
        });
    }
    params.validate()?;

    let seeds: Vec<u64> = (0..num_paths).map(|_| rng.gen()).collect();
    let vols = seeds
        .into_par_iter()
        .map(|seed| -> MSMResult<f64> {
            let mut path_rng = ChaCha20Rng::seed_from_u64(seed);
            let path = simulate_path(params, path_len, start, &mut path_rng)?;
            Ok(path.iter().std_dev())
        })
        .collect::<MSMResult<Vec<f64>>>()?;

    let mean = vols.iter().mean();
    let std_dev = vols.iter().std_dev();
    let standard_error = std_dev / (num_paths as f64).sqrt();
    debug!(num_paths, path_len, mean, standard_error, "volatility forecast");
    Ok(MSMForecastResult { mean, std_dev, standard_error, num_paths, path_len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn degenerate() -> MSMParams {
        MSMParams::new(1.0, 0.02, array![0.0]).expect("valid")
    }

    #[test]
    // Purpose
    // -------
    // With a single constant regime every path is i.i.d. N(0, s0²).
    //
    // Given
    // -----
    // - m0 = 1, p = 0, s0 = 0.02; 2000 paths of length 30.
    //
    // Expect
    // ------
    // - `mean` within 3% of s0 (sample sd is slightly biased low).
    // - `standard_error == std_dev / √2000`.
    fn degenerate_forecast_tracks_scale() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let f = predict_volatility(&degenerate(), 2000, 30, SimStart::RowZero, &mut rng)
            .expect("forecast");
        assert!((f.mean - 0.02).abs() < 0.02 * 0.03, "mean = {}", f.mean);
        assert!((f.standard_error - f.std_dev / 2000f64.sqrt()).abs() < 1e-15);
        assert_eq!((f.num_paths, f.path_len), (2000, 30));
    }

    #[test]
    // Purpose
    // -------
    // Standard error falls roughly as 1/√num_paths.
    //
    // Given
    // -----
    // - Degenerate parameters, 100 vs 1600 paths.
    //
    // Expect
    // ------
    // - se(1600) < se(100) / 2 (the ideal ratio is 4).
    fn standard_error_shrinks_with_paths() {
        let params = degenerate();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let small = predict_volatility(&params, 100, 30, SimStart::RowZero, &mut rng).expect("ok");
        let large = predict_volatility(&params, 1600, 30, SimStart::RowZero, &mut rng).expect("ok");
        assert!(large.standard_error < small.standard_error / 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Parallel execution is deterministic given the master seed.
    //
    // Given
    // -----
    // - k = 3 parameters, two runs from `seed_from_u64(77)`.
    //
    // Expect
    // ------
    // - Identical forecasts.
    fn forecast_is_reproducible() {
        let params = MSMParams::new(1.4, 0.01, array![0.02, 0.3, 0.9]).expect("valid");
        let run = || {
            let mut rng = ChaCha20Rng::seed_from_u64(77);
            predict_volatility(&params, 64, 30, SimStart::Stationary, &mut rng).expect("ok")
        };
        assert_eq!(run(), run());
    }

    #[test]
    // Purpose
    // -------
    // Reject configurations that cannot yield a standard deviation.
    //
    // Given
    // -----
    // - num_paths = 1, and path_len = 1.
    //
    // Expect
    // ------
    // - `InvalidForecastConfig` in both cases.
    fn rejects_too_small_simulation() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(matches!(
            predict_volatility(&degenerate(), 1, 30, SimStart::RowZero, &mut rng),
            Err(MSMError::InvalidForecastConfig { num_paths: 1, .. })
        ));
        assert!(matches!(
            predict_volatility(&degenerate(), 10, 1, SimStart::RowZero, &mut rng),
            Err(MSMError::InvalidForecastConfig { path_len: 1, .. })
        ));
    }
}

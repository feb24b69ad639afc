//! Configuration types for MSM-BT estimation, simulation, and forecasting.
//!
//! Purpose
//! -------
//! Bundle run-level and estimation-time settings into explicit value
//! objects that are passed as arguments, never read from global state.
//!
//! Key behaviors
//! -------------
//! - [`MSMConfig`] carries the run parameters the command line exposes:
//!   model dimension `k`, forecast window, number of Monte-Carlo samples,
//!   and the RNG seed.
//! - [`MSMOptions`] carries estimation settings: optimizer options, the
//!   number of independent restarts, and the simulation start law.
//! - [`SimStart`] selects how the initial latent state of a simulated path
//!   is drawn.
//!
//! Invariants & assumptions
//! ------------------------
//! - `MSMConfig::new` enforces hard bounds (`1 ≤ k ≤ 12`, `window ≥ 2`,
//!   `samples ≥ 2`) and only *warns* below the conventional minimums
//!   (`window < 30`, `samples < 100`).
//! - `MSMOptions::new` requires `n_restarts ≥ 1`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the hard bounds, defaults, and restart validation.
use crate::{
    msm::{
        core::shape::MSMShape,
        errors::{MSMError, MSMResult},
    },
    optimization::loglik_optimizer::MLEOptions,
};
use tracing::warn;

/// Conventional minimum forecast window; smaller values are accepted.
pub const MIN_RECOMMENDED_WINDOW: usize = 30;
/// Conventional minimum number of Monte-Carlo paths; smaller values are accepted.
pub const MIN_RECOMMENDED_SAMPLES: usize = 100;

pub const DEFAULT_WINDOW: usize = 30;
pub const DEFAULT_SAMPLES: usize = 200;

/// Initial-state law for simulated paths.
///
/// - `RowZero`: draw the first state from row 0 of the transition matrix,
///   i.e. one transition away from the all-low configuration.
/// - `Stationary`: draw from the stationary law of the joint chain. Each
///   binary chain is symmetric, so this is uniform over all `2^k` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimStart {
    #[default]
    RowZero,
    Stationary,
}

/// Run-level configuration for a fit-and-forecast pass.
///
/// Fields
/// ------
/// - `shape`: validated model dimension.
/// - `window`: forecast horizon, i.e. length of every simulated path.
/// - `samples`: number of simulated paths.
/// - `seed`: optional master RNG seed; `None` draws one from OS entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MSMConfig {
    pub shape: MSMShape,
    pub window: usize,
    pub samples: usize,
    pub seed: Option<u64>,
}

impl MSMConfig {
    /// Construct a validated [`MSMConfig`].
    ///
    /// # Errors
    /// - [`MSMError::InvalidDimension`] for `k = 0` or `k > 12`.
    /// - [`MSMError::InvalidWindow`] for `window < 2`.
    /// - [`MSMError::InvalidSamples`] for `samples < 2`.
    pub fn new(k: usize, window: usize, samples: usize, seed: Option<u64>) -> MSMResult<Self> {
        let shape = MSMShape::new(k)?;
        if window < 2 {
            return Err(MSMError::InvalidWindow {
                window,
                reason: "A volatility forecast needs at least two simulated returns.",
            });
        }
        if samples < 2 {
            return Err(MSMError::InvalidSamples {
                samples,
                reason: "A standard error needs at least two simulated paths.",
            });
        }
        if window < MIN_RECOMMENDED_WINDOW {
            warn!(window, recommended = MIN_RECOMMENDED_WINDOW, "forecast window is short");
        }
        if samples < MIN_RECOMMENDED_SAMPLES {
            warn!(samples, recommended = MIN_RECOMMENDED_SAMPLES, "few Monte-Carlo samples");
        }
        Ok(MSMConfig { shape, window, samples, seed })
    }

    /// Config with the default window and sample count.
    pub fn with_defaults(k: usize) -> MSMResult<Self> {
        MSMConfig::new(k, DEFAULT_WINDOW, DEFAULT_SAMPLES, None)
    }

    pub fn k(&self) -> usize {
        self.shape.k
    }
}

/// Estimation-time configuration for MSM-BT models.
///
/// Fields
/// ------
/// - `mle_opts`: Nelder–Mead options (tolerances, simplex step, verbosity).
/// - `n_restarts`: number of independent random starting points; the best
///   attained likelihood wins.
/// - `sim_start`: initial-state law used by simulation and forecasting.
#[derive(Debug, Clone, PartialEq)]
pub struct MSMOptions {
    pub mle_opts: MLEOptions,
    pub n_restarts: usize,
    pub sim_start: SimStart,
}

impl MSMOptions {
    /// # Errors
    /// - [`MSMError::InvalidRestarts`] if `n_restarts == 0`.
    pub fn new(mle_opts: MLEOptions, n_restarts: usize, sim_start: SimStart) -> MSMResult<Self> {
        if n_restarts == 0 {
            return Err(MSMError::InvalidRestarts { restarts: n_restarts });
        }
        Ok(MSMOptions { mle_opts, n_restarts, sim_start })
    }
}

impl Default for MSMOptions {
    fn default() -> Self {
        MSMOptions { mle_opts: MLEOptions::default(), n_restarts: 1, sim_start: SimStart::RowZero }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Hard bounds on the run configuration.
    //
    // Given
    // -----
    // - k = 0, k = 13, window = 1, samples = 1.
    //
    // Expect
    // ------
    // - The matching error variant for each.
    fn config_rejects_out_of_range_values() {
        assert!(matches!(MSMConfig::new(0, 30, 200, None), Err(MSMError::InvalidDimension { .. })));
        assert!(matches!(
            MSMConfig::new(13, 30, 200, None),
            Err(MSMError::InvalidDimension { .. })
        ));
        assert!(matches!(
            MSMConfig::new(2, 1, 200, None),
            Err(MSMError::InvalidWindow { window: 1, .. })
        ));
        assert!(matches!(
            MSMConfig::new(2, 30, 1, None),
            Err(MSMError::InvalidSamples { samples: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Values below the conventional minimums are still accepted.
    //
    // Given
    // -----
    // - window = 5, samples = 10.
    //
    // Expect
    // ------
    // - `Ok` with fields preserved.
    fn config_accepts_small_but_valid_values() {
        let cfg = MSMConfig::new(3, 5, 10, Some(7)).expect("valid config");
        assert_eq!((cfg.k(), cfg.window, cfg.samples, cfg.seed), (3, 5, 10, Some(7)));
    }

    #[test]
    // Purpose
    // -------
    // Defaults match the documented command-line defaults.
    //
    // Given
    // -----
    // - `MSMConfig::with_defaults(2)` and `MSMOptions::default()`.
    //
    // Expect
    // ------
    // - window 30, samples 200, one restart, row-zero start.
    fn defaults_are_documented_values() {
        let cfg = MSMConfig::with_defaults(2).expect("valid");
        assert_eq!((cfg.window, cfg.samples, cfg.seed), (30, 200, None));

        let opts = MSMOptions::default();
        assert_eq!(opts.n_restarts, 1);
        assert_eq!(opts.sim_start, SimStart::RowZero);
    }

    #[test]
    // Purpose
    // -------
    // At least one optimizer start is required.
    //
    // Given
    // -----
    // - `n_restarts = 0`.
    //
    // Expect
    // ------
    // - `InvalidRestarts { restarts: 0 }`.
    fn options_require_a_restart() {
        assert_eq!(
            MSMOptions::new(MLEOptions::default(), 0, SimStart::Stationary),
            Err(MSMError::InvalidRestarts { restarts: 0 })
        );
    }
}

//! Hamilton filter for the MSM-BT log-likelihood.
//!
//! Purpose
//! -------
//! Evaluate the exact data log-likelihood of a return series under the
//! MSM-BT model by recursively filtering the `2^k`-state latent chain.
//!
//! Key behaviors
//! -------------
//! - Start from the uniform distribution over joint states.
//! - For each observation `x_t`:
//!   1. predict: `π ← π · A` (factored, `O(k · 2^k)`),
//!   2. weight: `π_j ← π_j · φ(x_t; 0, σ_j)`,
//!   3. `sw = Σ_j π_j`, `ℓ += ln sw`, normalize `π ← π / sw`.
//! - [`filter_log_likelihood`] reports numerical degeneracy as
//!   [`MSMError::DegenerateLikelihood`]; [`negative_log_likelihood`] turns
//!   that into the finite [`NLL_PENALTY`] so the optimizer only ever sees
//!   finite costs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The filter distribution is reinitialized on every evaluation and
//!   lives in a scratch buffer ([`FilterScratch`]); nothing carries over
//!   between calls.
//! - Returns are already validated (non-empty, finite) by
//!   [`ReturnSeries`].
//! - The density is even in `x`, so the likelihood is invariant to flipping
//!   the sign of every return.
//!
//! Performance
//! -----------
//! - `O(n · k · 2^k)` time and `O(2^k)` scratch per evaluation.
//!
//! Testing notes
//! -------------
//! - Closed-form agreement for k = 1 with p = 0, sign-flip invariance,
//!   finiteness on a constant-zero series, and penalty behavior on extreme θ.
use crate::{
    msm::{
        core::{
            data::ReturnSeries, params::MSMParams, shape::MSMShape,
            transition::TransitionMatrix, volatility::state_volatilities,
        },
        errors::{MSMError, MSMResult},
    },
    optimization::loglik_optimizer::Theta,
};
use ndarray::Array1;
use statrs::distribution::{Continuous, Normal};
use std::cell::RefCell;

/// Negative log-likelihood reported for degenerate parameter regions.
///
/// Large enough to lose against any real evaluation, finite so that simplex
/// arithmetic never produces NaN.
pub const NLL_PENALTY: f64 = 1e300;

/// Reusable filter buffers for one model dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterScratch {
    /// Current filtered state distribution, length `2^k`.
    pub prob_buf: RefCell<Array1<f64>>,
}

impl FilterScratch {
    pub fn new(shape: &MSMShape) -> Self {
        FilterScratch { prob_buf: RefCell::new(Array1::zeros(shape.n_states())) }
    }
}

/// Log-likelihood `ℓ` of `returns` under `params`.
///
/// `states` must come from `enumerate_states(params.k())`.
///
/// # Errors
/// - [`MSMError::DegenerateLikelihood`] if a state volatility is not a
///   positive finite number (`t = 0`, value = the volatility), if the
///   one-step predictive density `sw` is not positive and finite at step
///   `t`, or if the running sum leaves the finite range.
pub fn filter_log_likelihood(
    params: &MSMParams, returns: &ReturnSeries, states: &[u32], scratch: &FilterScratch,
) -> MSMResult<f64> {
    let k = params.k();
    let sigmas = state_volatilities(params.m0, params.s0, k, states);
    let densities = sigmas
        .iter()
        .map(|&sigma| {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(MSMError::DegenerateLikelihood { t: 0, value: sigma });
            }
            Normal::new(0.0, sigma)
                .map_err(|_| MSMError::DegenerateLikelihood { t: 0, value: sigma })
        })
        .collect::<MSMResult<Vec<Normal>>>()?;
    let transition = TransitionMatrix::new(&params.probs.to_vec());

    let mut prob = scratch.prob_buf.borrow_mut();
    if prob.len() != densities.len() {
        *prob = Array1::zeros(densities.len());
    }
    prob.fill(1.0 / densities.len() as f64);

    let mut ll = 0.0;
    for (t, &x) in returns.data.iter().enumerate() {
        transition.propagate(prob.view_mut());
        let mut sw = 0.0;
        for (pj, density) in prob.iter_mut().zip(densities.iter()) {
            *pj *= density.pdf(x);
            sw += *pj;
        }
        if !sw.is_finite() || sw <= 0.0 {
            return Err(MSMError::DegenerateLikelihood { t, value: sw });
        }
        ll += sw.ln();
        if !ll.is_finite() {
            return Err(MSMError::DegenerateLikelihood { t, value: ll });
        }
        prob.mapv_inplace(|pj| pj / sw);
    }
    Ok(ll)
}

/// Negative log-likelihood at optimizer point `theta`, with the degeneracy
/// penalty applied.
///
/// # Errors
/// - θ shape/finiteness errors from [`MSMParams::from_theta`]. Numerical
///   degeneracy is **not** an error here; it yields [`NLL_PENALTY`].
pub fn negative_log_likelihood(
    theta: &Theta, returns: &ReturnSeries, shape: &MSMShape, states: &[u32],
) -> MSMResult<f64> {
    let scratch = FilterScratch::new(shape);
    negative_log_likelihood_with(theta, returns, shape, states, &scratch)
}

/// Same as [`negative_log_likelihood`], reusing caller-owned buffers.
pub fn negative_log_likelihood_with(
    theta: &Theta, returns: &ReturnSeries, shape: &MSMShape, states: &[u32],
    scratch: &FilterScratch,
) -> MSMResult<f64> {
    let params = MSMParams::from_theta(theta.view(), shape)?;
    match filter_log_likelihood(&params, returns, states, scratch) {
        Ok(ll) => Ok(-ll),
        Err(MSMError::DegenerateLikelihood { .. }) => Ok(NLL_PENALTY),
        Err(err) => Err(err),
    }
}

//! Forward simulation of MSM-BT return paths.
//!
//! Purpose
//! -------
//! Generate synthetic returns from known parameters, both for Monte-Carlo
//! forecasting and for testing estimator recovery.
//!
//! Key behaviors
//! -------------
//! - The first latent state is drawn according to [`SimStart`].
//! - Every later state is a categorical draw from the current state's row
//!   of the joint transition matrix.
//! - `return_t = z_t · σ(state_t)` with `z_t ~ N(0, 1)`.
//! - All randomness comes from the caller's RNG; nothing is reseeded.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are validated on entry (closed domain, `1 ≤ k ≤ 12`).
//! - Output length equals the requested length; `0` yields an empty path.
use crate::msm::{
    core::{
        options::SimStart, params::MSMParams, states::enumerate_states,
        transition::TransitionMatrix, volatility::state_volatilities,
    },
    errors::{MSMError, MSMResult},
};
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal, WeightedIndex};

/// Simulate `length` returns from `params`.
///
/// # Errors
/// - Parameter-domain errors from [`MSMParams::validate`].
pub fn simulate_path<R: Rng + ?Sized>(
    params: &MSMParams, length: usize, start: SimStart, rng: &mut R,
) -> MSMResult<Array1<f64>> {
    let (_, returns) = simulate_states_and_path(params, length, start, rng)?;
    Ok(returns)
}

/// Simulate `length` returns and also report the visited state indices.
///
/// # Errors
/// - Parameter-domain errors from [`MSMParams::validate`].
/// - [`MSMError::DegenerateTransitionRow`] if a row cannot be sampled.
pub fn simulate_states_and_path<R: Rng + ?Sized>(
    params: &MSMParams, length: usize, start: SimStart, rng: &mut R,
) -> MSMResult<(Vec<usize>, Array1<f64>)> {
    params.validate()?;
    if length == 0 {
        return Ok((Vec::new(), Array1::zeros(0)));
    }
    let k = params.k();
    let transition = TransitionMatrix::new(&params.probs.to_vec());
    let sigmas = state_volatilities(params.m0, params.s0, k, &enumerate_states(k));
    let mut row = Array1::zeros(transition.n_states());

    let mut state = match start {
        SimStart::RowZero => draw_next_state(&transition, 0, &mut row, rng)?,
        SimStart::Stationary => rng.gen_range(0..transition.n_states()),
    };
    let mut states = Vec::with_capacity(length);
    let mut returns = Array1::zeros(length);
    for (t, slot) in returns.iter_mut().enumerate() {
        if t > 0 {
            state = draw_next_state(&transition, state, &mut row, rng)?;
        }
        let z: f64 = StandardNormal.sample(rng);
        *slot = z * sigmas[state];
        states.push(state);
    }
    Ok((states, returns))
}

fn draw_next_state<R: Rng + ?Sized>(
    transition: &TransitionMatrix, state: usize, row: &mut Array1<f64>, rng: &mut R,
) -> MSMResult<usize> {
    transition.row(state, row.view_mut());
    let dist = WeightedIndex::<f64>::new(row.iter())
        .map_err(|err| MSMError::DegenerateTransitionRow { state, text: err.to_string() })?;
    Ok(dist.sample(rng))
}

//! core — MSM-BT state space, transition, volatility, likelihood and
//! simulation primitives.
//!
//! Purpose
//! -------
//! Collect the numerical building blocks of the binomial Markov-switching
//! multifractal model: the `2^k` latent state space, the Kronecker-structured
//! joint transition, the state → volatility map, the θ ↔ parameter
//! transform, the Hamilton filter, path simulation, and Monte-Carlo
//! volatility forecasts. The model object in `msm::models` composes these.
//!
//! Key behaviors
//! -------------
//! - [`MSMShape`] fixes `k`, and with it `2^k` states and `k + 2` θ entries.
//! - [`enumerate_states`] yields the number of high components of each state.
//! - [`TransitionMatrix`] keeps the `k` per-chain 2×2 factors and either
//!   materializes the dense Kronecker product or propagates a distribution
//!   through it factor by factor.
//! - [`state_volatilities`] maps a state's high count to `s0·√(m0^{k−a}·m1^a)`.
//! - [`MSMParams`] owns natural parameters and maps to/from θ.
//! - [`filter_log_likelihood`] and [`negative_log_likelihood`] run the
//!   Hamilton recursion; [`simulate_path`] and [`predict_volatility`] run it
//!   forward with random draws.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ k ≤ 12`; state indices are `0..2^k` and chain `c` maps to bit
//!   `k − 1 − c` of the index.
//! - Every transition row sums to 1 and the filtered distribution sums to 1
//!   after each observation.
//! - Numerical degeneracy in the filter is never an error at the NLL
//!   boundary; it yields a large finite penalty.
//!
//! Conventions
//! -----------
//! - θ layout: `θ₀ → m0 = 1 + logistic(θ₀)`, `θ₁ → s0 = exp(θ₁)`,
//!   `θ_{2+i} → p_i = logistic(θ_{2+i})`.
//! - Apart from warnings in [`MSMConfig::new`] and a debug line per forecast,
//!   this layer performs no logging and no I/O.
pub mod data;
pub mod filter;
pub mod forecasts;
pub mod options;
pub mod params;
pub mod shape;
pub mod simulation;
pub mod states;
pub mod transition;
pub mod volatility;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::ReturnSeries;
pub use self::filter::{
    filter_log_likelihood, negative_log_likelihood, negative_log_likelihood_with, FilterScratch,
    NLL_PENALTY,
};
pub use self::forecasts::{predict_volatility, MSMForecastResult};
pub use self::options::{MSMConfig, MSMOptions, SimStart};
pub use self::params::{validate_theta, MSMParams};
pub use self::shape::{MSMShape, MAX_DIMENSION};
pub use self::simulation::{simulate_path, simulate_states_and_path};
pub use self::states::enumerate_states;
pub use self::transition::{build_transition_matrix, TransitionMatrix};
pub use self::volatility::state_volatilities;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        negative_log_likelihood, predict_volatility, simulate_path, MSMConfig,
        MSMForecastResult, MSMOptions, MSMParams, MSMShape, ReturnSeries, SimStart,
    };
}

//! optimization — derivative-free likelihood maximization and parameter
//! transforms.
//!
//! Purpose
//! -------
//! Fit models whose likelihood has no convenient gradient. A model
//! implements [`loglik_optimizer::LogLikelihood`] over an unconstrained
//! vector θ, and [`loglik_optimizer::maximize`] runs an argmin Nelder–Mead
//! simplex on `−ℓ(θ)`.
//!
//! Key behaviors
//! -------------
//! - `loglik_optimizer`: simplex construction, stopping rules
//!   (`tol_sd`, `max_iter`), execution and outcome normalization.
//! - `numerical_stability`: overflow-safe logistic / logit used by the
//!   MSM θ ↔ parameter map.
//! - `errors`: [`errors::OptError`] / [`errors::OptResult`], with
//!   conversions from argmin errors and from `MSMError`.
//!
//! Conventions
//! -----------
//! - Callers never see raw argmin errors; everything fallible returns
//!   `OptResult<T>`.
//! - No I/O here. The only log output is the optional slog observer behind
//!   the `obs_slog` feature and a debug event for the starting value.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}

//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run a derivative-free
//! Nelder–Mead simplex search with configurable stopping rules.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - seeds a simplex around `θ₀` via [`builders`],
//!   - executes the solver via [`run::run_nelder_mead`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`;
//!   user code implements `ℓ(θ)`, never the cost directly.
//! - [`LogLikelihood::value`] must treat invalid inputs as recoverable
//!   [`OptError`](crate::optimization::errors::OptError) values, not panics.
//! - Exhausting the iteration budget is reported through
//!   [`OptimOutcome::converged`], not as an error.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`). Any mapping from constrained → unconstrained space
//!   happens in the model layer.
//! - All user-facing diagnostics (including [`OptimOutcome::value`]) are
//!   expressed in terms of the log-likelihood `ℓ`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions in [`adapter`], simplex
//!   construction in [`builders`], configuration invariants in [`traits`],
//!   and end-to-end convergence on a concave bowl in [`api`].

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{
    Cost, FnEvalMap, Theta, DEFAULT_MAX_ITER, DEFAULT_SIMPLEX_STEP, DEFAULT_TOL_SD,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use msm_volatility::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Theta};
}

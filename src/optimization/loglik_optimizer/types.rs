//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! log-likelihood optimizer. By defining these in one place, the rest of
//! the optimization code can stay agnostic to `ndarray` and Argmin
//! generics and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors and scalar costs
//!   (`Theta`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose the pre-wired Nelder–Mead solver alias over `(Theta, Cost)`.
//! - Hold the default stopping rule and initial simplex size.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray` containers over `f64`.
//! - `Cost` is always a scalar `f64`; higher layers handle the sign flip
//!   between cost and log-likelihood.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests.
use argmin::solver::neldermead::NelderMead;
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default edge length of the initial simplex around `θ₀`.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.05;

/// Default tolerance on the standard deviation of simplex vertex costs.
pub const DEFAULT_TOL_SD: f64 = 1e-8;

/// Default cap on simplex iterations.
pub const DEFAULT_MAX_ITER: usize = 5_000;

/// Nelder–Mead simplex solver specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;

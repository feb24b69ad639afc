//! High-level entry point for maximizing a log-likelihood with Nelder–Mead.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter,
        builders::build_nelder_mead,
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions},
        OptimOutcome, Theta,
    },
};

/// Maximize a user-supplied log-likelihood `ℓ(θ)` starting from `theta0`.
///
/// Steps:
/// 1. `f.check(&theta0, data)` rejects an invalid start before any solver work.
/// 2. The model is wrapped in an [`ArgMinAdapter`] so argmin minimizes `-ℓ(θ)`.
/// 3. A Nelder–Mead solver is seeded with the simplex `θ₀ + step·eᵢ`.
/// 4. The run is normalized into an [`OptimOutcome`] reporting `ℓ(θ̂)`.
///
/// Hitting the iteration cap is **not** an error: the best vertex is still
/// returned with `converged = false`.
///
/// # Errors
/// - Any error from `check`, solver construction, or the argmin run.
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    let solver = build_nelder_mead(&theta0, opts)?;
    run_nelder_mead(&theta0, opts, problem, solver)
}

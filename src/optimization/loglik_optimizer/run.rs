//! Execution helper that runs an `argmin` Nelder–Mead solver on a
//! log-likelihood problem and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter, types::NelderMeadSolver, LogLikelihood, MLEOptions, OptimOutcome,
        Theta,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::CostFunction;
use argmin::core::{Executor, State};

/// Run a Nelder–Mead optimization for a log-likelihood problem.
///
/// Wires up:
/// - the user model via [`ArgMinAdapter`],
/// - a solver already seeded with its initial simplex
///   (see [`build_nelder_mead`](super::builders::build_nelder_mead)),
/// - optional observers (behind the `obs_slog` feature),
/// - the iteration cap from `opts.tols`,
///
/// then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs ℓ at the first simplex vertex.
///
/// # Errors
/// - Propagates any `argmin` runtime error via `From<argmin::core::Error>`.
/// - Propagates validation errors raised while constructing [`OptimOutcome`].
#[cfg_attr(not(feature = "obs_slog"), allow(unused_variables))]
pub fn run_nelder_mead<F>(
    theta0: &Theta, opts: &MLEOptions, problem: ArgMinAdapter<'_, F>, solver: NelderMeadSolver,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(theta0, &problem)?;
    }
    let max_iter = opts.tols.effective_max_iter() as u64;
    #[cfg_attr(not(feature = "obs_slog"), allow(unused_mut))]
    let mut optimizer =
        Executor::new(problem, solver).configure(|state| state.max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let best_cost = result.get_best_cost();
    OptimOutcome::new(result.take_best_param(), -best_cost, termination, iterations, function_counts)
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = -problem.cost(theta0)?;
    tracing::debug!(ll0, "initial log-likelihood");
    Ok(())
}

//! MSM-BT model object: estimation and forecasting.
//!
//! [`MSMModel`] implements [`LogLikelihood`] over the unconstrained vector
//! `θ ∈ ℝ^{k+2}` and drives the Nelder–Mead optimizer from several random
//! starting points. Fitted parameters feed the Monte-Carlo predictor.
use crate::{
    msm::{
        core::{
            data::ReturnSeries,
            filter::{negative_log_likelihood_with, FilterScratch, NLL_PENALTY},
            forecasts::{predict_volatility, MSMForecastResult},
            options::{MSMConfig, MSMOptions},
            params::{validate_theta, MSMParams},
            shape::MSMShape,
            states::enumerate_states,
        },
        errors::{MSMError, MSMResult},
    },
    optimization::{
        errors::OptResult,
        loglik_optimizer::{maximize, FnEvalMap, LogLikelihood, OptimOutcome, Theta},
    },
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;
use tracing::{info, warn};

/// MSMFitResult — outcome of a maximum-likelihood fit.
///
/// Fields
/// ------
/// - `params`: fitted natural parameters, switching probabilities sorted
///   ascending.
/// - `nll`: attained negative log-likelihood.
/// - `k`: number of chains.
/// - `converged`, `status`, `iterations`, `fn_evals`: diagnostics of the
///   winning optimizer run.
/// - `theta_hat`: winning optimizer point (unsorted chain order).
/// - `best_restart`: 0-based index of the winning start.
#[derive(Debug, Clone, PartialEq)]
pub struct MSMFitResult {
    pub params: MSMParams,
    pub nll: f64,
    pub k: usize,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub theta_hat: Theta,
    pub best_restart: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MSMModel {
    pub shape: MSMShape,
    pub options: MSMOptions,
    pub states: Vec<u32>,
    pub scratch_bufs: FilterScratch,
    pub results: Option<OptimOutcome>,
    pub fitted_params: Option<MSMParams>,
    pub forecast: Option<MSMForecastResult>,
}

impl MSMModel {
    pub fn new(shape: MSMShape, options: MSMOptions) -> MSMModel {
        MSMModel {
            shape,
            options,
            states: enumerate_states(shape.k),
            scratch_bufs: FilterScratch::new(&shape),
            results: None,
            fitted_params: None,
            forecast: None,
        }
    }

    /// Random starting point: standard-normal coordinates, except `θ₁` which
    /// is set to the log of the sample standard deviation so the scale
    /// starts at the data's dispersion. A zero-dispersion series keeps the
    /// random draw for `θ₁`.
    pub fn initial_theta<R: Rng + ?Sized>(&self, data: &ReturnSeries, rng: &mut R) -> Theta {
        let mut theta: Theta = (0..self.shape.theta_len())
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        let sd = data.sample_std();
        if sd.is_finite() && sd > 0.0 {
            theta[1] = sd.ln();
        }
        theta
    }

    /// Fit by maximum likelihood from `options.n_restarts` random starts.
    ///
    /// The start with the highest attained log-likelihood wins. Reaching the
    /// iteration budget is reported via `converged = false`, not as an error.
    /// So is a run whose best value is still the degeneracy penalty.
    ///
    /// # Errors
    /// - [`MSMError::OptimizationFailed`] for backend failures.
    /// - θ-shape errors if the model and data disagree on dimension.
    pub fn fit<R: Rng + ?Sized>(
        &mut self, data: &ReturnSeries, rng: &mut R,
    ) -> MSMResult<MSMFitResult> {
        let mut best: Option<(usize, OptimOutcome)> = None;
        for restart in 0..self.options.n_restarts {
            let theta0 = self.initial_theta(data, rng);
            let mut outcome = maximize(&*self, theta0, data, &self.options.mle_opts)?;
            if flag_penalized(&mut outcome) {
                warn!(restart, "every simplex vertex hit the likelihood penalty");
            }
            info!(
                restart,
                nll = -outcome.value,
                converged = outcome.converged,
                iterations = outcome.iterations,
                status = %outcome.status,
                "optimizer run finished"
            );
            let improves = best.as_ref().map_or(true, |(_, b)| outcome.value > b.value);
            if improves {
                best = Some((restart, outcome));
            }
        }
        let (best_restart, outcome) = best.ok_or(MSMError::InvalidRestarts { restarts: 0 })?;
        if !outcome.converged {
            warn!(status = %outcome.status, "best run stopped before convergence");
        }

        let params = MSMParams::from_theta(outcome.theta_hat.view(), &self.shape)?.sorted();
        let fit = MSMFitResult {
            params: params.clone(),
            nll: -outcome.value,
            k: self.shape.k,
            converged: outcome.converged,
            status: outcome.status.clone(),
            iterations: outcome.iterations,
            fn_evals: outcome.fn_evals.clone(),
            theta_hat: outcome.theta_hat.clone(),
            best_restart,
        };
        self.fitted_params = Some(params);
        self.results = Some(outcome);
        Ok(fit)
    }

    /// Monte-Carlo volatility forecast from the fitted parameters.
    ///
    /// # Errors
    /// - [`MSMError::ModelNotFitted`] before a successful [`MSMModel::fit`].
    /// - Forecast configuration errors from [`predict_volatility`].
    pub fn predict<R: Rng + ?Sized>(
        &mut self, num_paths: usize, path_len: usize, rng: &mut R,
    ) -> MSMResult<MSMForecastResult> {
        let params = self.fitted_params.as_ref().ok_or(MSMError::ModelNotFitted)?;
        let forecast =
            predict_volatility(params, num_paths, path_len, self.options.sim_start, rng)?;
        self.forecast = Some(forecast);
        Ok(forecast)
    }
}

impl LogLikelihood for MSMModel {
    type Data = ReturnSeries;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let nll =
            negative_log_likelihood_with(theta, data, &self.shape, &self.states, &self.scratch_bufs)?;
        Ok(-nll)
    }

    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta(theta.view(), &self.shape)?;
        Ok(())
    }
}

/// Mark a run that never left the penalty region as not converged.
///
/// A simplex whose vertices all cost `NLL_PENALTY` has zero spread, which
/// the sd-tolerance rule would otherwise report as convergence.
fn flag_penalized(outcome: &mut OptimOutcome) -> bool {
    if outcome.value > -NLL_PENALTY {
        return false;
    }
    outcome.converged = false;
    outcome.status = format!("Penalized: no finite likelihood found ({})", outcome.status);
    true
}

/// Fit an MSM-BT model of dimension `k` without keeping the model object.
///
/// # Errors
/// - [`MSMError::InvalidDimension`] for `k` outside `1..=12`.
/// - Anything [`MSMModel::fit`] returns.
pub fn fit<R: Rng + ?Sized>(
    returns: &ReturnSeries, k: usize, options: &MSMOptions, rng: &mut R,
) -> MSMResult<MSMFitResult> {
    let mut model = MSMModel::new(MSMShape::new(k)?, options.clone());
    model.fit(returns, rng)
}

/// Fit and forecast in one pass, seeding a single ChaCha20 stream from
/// `config.seed` (or OS entropy when absent).
///
/// # Errors
/// Any estimation or forecast error.
pub fn estimate_and_forecast(
    returns: &ReturnSeries, config: &MSMConfig, options: &MSMOptions,
) -> MSMResult<(MSMFitResult, MSMForecastResult)> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let mut model = MSMModel::new(config.shape, options.clone());
    let fit = model.fit(returns, &mut rng)?;
    let forecast = model.predict(config.samples, config.window, &mut rng)?;
    info!(
        m0 = fit.params.m0,
        s0 = fit.params.s0,
        nll = fit.nll,
        vol_mean = forecast.mean,
        vol_se = forecast.standard_error,
        "fit and forecast complete"
    );
    Ok((fit, forecast))
}

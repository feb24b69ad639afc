//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. Nelder–Mead only ever asks
//! for costs, so no gradient plumbing lives here.
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)` (negative log-likelihood).
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and checks the result is finite.
    /// - Returns `Error(NonFiniteCost)` if the value is not finite.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

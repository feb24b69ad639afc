//! models — the user-facing MSM-BT model.
//!
//! [`MSMModel`] implements [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood)
//! in θ-space, fits by Nelder–Mead from several random starts, and forecasts
//! volatility by Monte-Carlo simulation from the fitted parameters.
//! [`estimate_and_forecast`] runs both steps from an [`MSMConfig`](crate::msm::core::MSMConfig).

pub mod msm_bt;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::msm_bt::{estimate_and_forecast, fit, MSMFitResult, MSMModel};

pub mod prelude {
    pub use super::msm_bt::{estimate_and_forecast, MSMFitResult, MSMModel};
}

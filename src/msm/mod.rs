//! msm — binomial Markov-switching multifractal (MSM-BT) volatility stack.
//!
//! Purpose
//! -------
//! Estimate an MSM-BT model on a return series by maximum likelihood and
//! forecast realized volatility over a horizon by Monte-Carlo simulation.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds the state space, transition structure, volatility map,
//!   parameter transform, Hamilton filter, simulator and predictor.
//! - [`models`] exposes [`MSMModel`] (fit / predict) and the one-shot
//!   [`estimate_and_forecast`].
//! - [`errors`] defines [`MSMError`] and the [`MSMResult`] alias.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returns are finite. The model has no mean term, so callers demean
//!   (see [`ReturnSeries::demeaned`]) when the series has drift.
//! - All randomness flows from caller-supplied RNGs; a fixed seed gives
//!   bit-identical fits and forecasts regardless of thread count.
//! - Internal scratch buffers live in `RefCell`s; a single [`MSMModel`]
//!   instance is not meant to be shared across threads.
//!
//! Downstream usage
//! ----------------
//! 1. Build a [`ReturnSeries`] (usually via `utils::read_returns`).
//! 2. Build an [`MSMConfig`] (k, window, samples, seed) and [`MSMOptions`].
//! 3. Call [`estimate_and_forecast`], or drive [`MSMModel::fit`] and
//!    [`MSMModel::predict`] directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/` exercises the full
//!   read → fit → forecast → write pipeline.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    MSMConfig, MSMForecastResult, MSMOptions, MSMParams, MSMShape, ReturnSeries, SimStart,
};
pub use self::errors::{MSMError, MSMResult};
pub use self::models::{estimate_and_forecast, MSMFitResult, MSMModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use msm_volatility::msm::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::{
        estimate_and_forecast, MSMConfig, MSMError, MSMFitResult, MSMForecastResult, MSMModel,
        MSMOptions, MSMParams, MSMResult, MSMShape, ReturnSeries, SimStart,
    };
}

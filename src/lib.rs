//! msm_volatility — Markov-switching multifractal volatility estimation and
//! forecasting.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and for the `msm_bt` command-line
//! tool. The crate fits a binomial Markov-switching multifractal (MSM-BT)
//! model to a return series by maximum likelihood and forecasts realized
//! volatility by Monte-Carlo simulation.
//!
//! Key behaviors
//! -------------
//! - [`msm`] holds the model: state space, Kronecker transition, volatility
//!   map, θ ↔ parameter transform, Hamilton filter, simulator, predictor and
//!   the [`msm::MSMModel`] estimator.
//! - [`optimization`] holds a generic Nelder–Mead log-likelihood maximizer
//!   built on `argmin`, plus numerically safe logistic / logit transforms.
//! - [`utils`] reads return series from CSV and writes fit + forecast
//!   results as CSV.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in [`msm`] and [`optimization`]; [`utils`]
//!   and the binary perform only I/O, argument parsing and error reporting.
//! - Randomness always flows from an explicit, seedable RNG.
//!
//! Conventions
//! -----------
//! - Errors are typed enums ([`msm::MSMError`], [`optimization::errors::OptError`])
//!   with `Display` impls; conversions between them are lossless for θ-shape
//!   errors.
//! - Logging goes through `tracing`; the library never installs a subscriber.
//!
//! Downstream usage
//! ----------------
//! - Rust callers typically `use msm_volatility::msm::prelude::*;` and call
//!   [`msm::estimate_and_forecast`].
//! - The binary wires [`utils::read_returns`] → estimation →
//!   [`utils::write_results`].
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; `tests/` holds end-to-end pipeline
//!   tests on simulated data.

pub mod msm;
pub mod optimization;
pub mod utils;

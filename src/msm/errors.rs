//! Errors for MSM-BT volatility models (data validation, configuration
//! checks, parameter domains, likelihood degeneracy, optimizer failures,
//! and CSV I/O).
//!
//! ## Conventions
//! - **Indices are 0-based**; CSV line numbers in [`MSMError::MalformedRecord`]
//!   are **1-based** to match what an editor shows.
//! - Optimizer/backend errors are normalized to
//!   [`MSMError::OptimizationFailed`] with a human-readable status.
//! - [`MSMError::DegenerateLikelihood`] is an *internal* signal of the
//!   filter; the public NLL entry point turns it into a finite penalty.
use crate::optimization::errors::OptError;

/// Crate-wide result alias for MSM operations that may produce [`MSMError`].
pub type MSMResult<T> = Result<T, MSMError>;

/// Unified error type for MSM-BT modeling.
#[derive(Debug, Clone, PartialEq)]
pub enum MSMError {
    // ---- Input/data validation ----
    /// Series is empty.
    EmptySeries,

    /// A data point is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    // ---- Configuration ----
    /// Number of binary chains outside `1..=MAX_DIMENSION`.
    InvalidDimension { k: usize, reason: &'static str },

    /// Forecast window (path length) too short.
    InvalidWindow { window: usize, reason: &'static str },

    /// Number of Monte-Carlo paths too small.
    InvalidSamples { samples: usize, reason: &'static str },

    /// Number of optimizer restarts must be at least one.
    InvalidRestarts { restarts: usize },

    /// Forecast called with unusable path count or length.
    InvalidForecastConfig { num_paths: usize, path_len: usize, reason: &'static str },

    // ---- Parameters ----
    /// θ length must be `k + 2`.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Optimizer-space coordinate is non-finite.
    InvalidThetaInput { index: usize, value: f64 },

    /// Multifractal multiplier outside `[1, 2]`.
    InvalidM0 { value: f64 },

    /// Scale must be finite and strictly positive.
    InvalidS0 { value: f64 },

    /// Switching probability outside `[0, 1]`.
    InvalidSwitchProb { index: usize, value: f64 },

    // ---- Likelihood ----
    /// The filter hit a non-positive or non-finite quantity at step `t`.
    DegenerateLikelihood { t: usize, value: f64 },

    // ---- Simulation ----
    /// A transition row could not be turned into a sampling distribution.
    DegenerateTransitionRow { state: usize, text: String },

    // ---- Estimation / optimizer ----
    OptimizationFailed { status: String },

    ModelNotFitted,

    // ---- I/O ----
    /// File could not be opened, read or written.
    Io { text: String },

    /// A CSV cell could not be parsed as a finite number.
    MalformedRecord { line: u64, value: String },
}

impl std::error::Error for MSMError {}

impl std::fmt::Display for MSMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            MSMError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            MSMError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            // ---- Configuration ----
            MSMError::InvalidDimension { k, reason } => {
                write!(f, "Invalid number of chains k = {k}: {reason}")
            }
            MSMError::InvalidWindow { window, reason } => {
                write!(f, "Invalid forecast window {window}: {reason}")
            }
            MSMError::InvalidSamples { samples, reason } => {
                write!(f, "Invalid number of samples {samples}: {reason}")
            }
            MSMError::InvalidRestarts { restarts } => {
                write!(f, "Number of restarts must be at least 1; got: {restarts}")
            }
            MSMError::InvalidForecastConfig { num_paths, path_len, reason } => {
                write!(
                    f,
                    "Invalid forecast configuration ({num_paths} paths of length {path_len}): {reason}"
                )
            }
            // ---- Parameters ----
            MSMError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            MSMError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            MSMError::InvalidM0 { value } => {
                write!(f, "m0 must lie in [1, 2]; got: {value}")
            }
            MSMError::InvalidS0 { value } => {
                write!(f, "s0 must be finite and > 0; got: {value}")
            }
            MSMError::InvalidSwitchProb { index, value } => {
                write!(f, "Switching probability {index} must lie in [0, 1]; got: {value}")
            }
            // ---- Likelihood ----
            MSMError::DegenerateLikelihood { t, value } => {
                write!(f, "Likelihood filter degenerated at step {t}: {value}")
            }
            // ---- Simulation ----
            MSMError::DegenerateTransitionRow { state, text } => {
                write!(f, "Cannot sample from transition row {state}: {text}")
            }
            // ---- Estimation / optimizer ----
            MSMError::OptimizationFailed { status } => {
                write!(f, "Optimizer failed with status: {status}")
            }
            MSMError::ModelNotFitted => {
                write!(f, "Model hasn't been fitted yet.")
            }
            // ---- I/O ----
            MSMError::Io { text } => {
                write!(f, "I/O error: {text}")
            }
            MSMError::MalformedRecord { line, value } => {
                write!(f, "Line {line}: cannot parse {value:?} as a finite number")
            }
        }
    }
}

impl From<OptError> for MSMError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::ThetaLengthMismatch { expected, actual } => {
                MSMError::ThetaLengthMismatch { expected, actual }
            }
            OptError::InvalidThetaInput { index, value } => {
                MSMError::InvalidThetaInput { index, value }
            }
            other => MSMError::OptimizationFailed { status: other.to_string() },
        }
    }
}

impl From<std::io::Error> for MSMError {
    fn from(err: std::io::Error) -> Self {
        MSMError::Io { text: err.to_string() }
    }
}

impl From<csv::Error> for MSMError {
    fn from(err: csv::Error) -> Self {
        MSMError::Io { text: err.to_string() }
    }
}

use argmin::core::{ArgminError, Error};

use crate::msm::errors::MSMError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- MLEOptions ----
    /// Simplex standard-deviation tolerance needs to be positive and finite.
    InvalidTolSd {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one stopping rule must be provided.
    NoTolerancesProvided,

    /// Initial simplex edge length needs to be positive and finite.
    InvalidSimplexStep {
        step: f64,
        reason: &'static str,
    },

    /// Starting point must have at least one coordinate.
    EmptyTheta,

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- MSM Errors ----
    /// Theta length does not match `k + 2`.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Unconstrained optimization input must have finite values.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Any other model-side failure, carried as its rendered message.
    ModelError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- MLEOptions ----
            OptError::InvalidTolSd { tol, reason } => {
                write!(f, "Invalid simplex standard-deviation tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidSimplexStep { step, reason } => {
                write!(f, "Invalid initial simplex step {step}: {reason}")
            }
            OptError::EmptyTheta => {
                write!(f, "Starting point has no coordinates")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- MSM Errors ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OptError::ModelError { text } => {
                write!(f, "Model error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<MSMError> for OptError {
    fn from(err: MSMError) -> Self {
        match err {
            MSMError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            MSMError::InvalidThetaInput { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            other => OptError::ModelError { text: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // An `OptError` boxed into an argmin `Error` (as the cost adapter does)
    // must come back out unchanged rather than collapsing into a backend
    // string.
    //
    // Given
    // -----
    // - `OptError::NonFiniteCost { value: 1.0 }` converted into
    //   `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from(err)` equals the original variant.
    fn argmin_error_round_trip_preserves_opt_error() {
        let original = OptError::NonFiniteCost { value: 1.0 };
        let boxed: Error = original.clone().into();

        assert_eq!(OptError::from(boxed), original);
    }

    #[test]
    // Purpose
    // -------
    // Check that argmin's own error kinds map onto the matching wrappers.
    //
    // Given
    // -----
    // - `ArgminError::InvalidParameter` wrapped into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::InvalidParameter` with the same text.
    fn argmin_invalid_parameter_maps_to_wrapper() {
        let boxed: Error = ArgminError::InvalidParameter { text: "bad".to_string() }.into();

        assert_eq!(OptError::from(boxed), OptError::InvalidParameter { text: "bad".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Model-side θ errors keep their structured payload when crossing into
    // the optimizer layer; other model errors become `ModelError`.
    //
    // Given
    // -----
    // - `MSMError::ThetaLengthMismatch` and `MSMError::ModelNotFitted`.
    //
    // Expect
    // ------
    // - The first maps to `OptError::ThetaLengthMismatch`.
    // - The second maps to `OptError::ModelError` carrying its message.
    fn msm_errors_map_into_opt_errors() {
        let mismatch = MSMError::ThetaLengthMismatch { expected: 3, actual: 4 };
        assert_eq!(
            OptError::from(mismatch),
            OptError::ThetaLengthMismatch { expected: 3, actual: 4 }
        );

        let not_fitted = MSMError::ModelNotFitted;
        let text = not_fitted.to_string();
        assert_eq!(OptError::from(not_fitted), OptError::ModelError { text });
    }
}

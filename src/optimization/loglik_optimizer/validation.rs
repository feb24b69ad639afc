//! Validation helpers for log-likelihood optimization.
//!
//! This module centralizes common consistency checks used across the
//! optimizer interface:
//!
//! - **Stopping-rule checks**: [`verify_tol_sd`] ensures the simplex spread
//!   tolerance is finite and strictly positive when provided.
//! - **Simplex size**: [`verify_simplex_step`] guards the initial simplex.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks log-likelihood outputs
//!   for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::Theta,
};

/// Validate the optional simplex standard-deviation tolerance.
///
/// - Accepts `None` (iteration cap alone decides termination).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidTolSd`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_sd(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolSd { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolSd { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the initial simplex edge length.
///
/// # Errors
/// Returns [`OptError::InvalidSimplexStep`] if the step is non-finite or ≤ 0.0.
pub fn verify_simplex_step(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidSimplexStep { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidSimplexStep { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that a scalar log-likelihood value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // `None` disables the spread rule; valid positive values pass.
    //
    // Given
    // -----
    // - `None`, `Some(1e-8)`.
    //
    // Expect
    // ------
    // - Both accepted.
    fn verify_tol_sd_accepts_none_and_positive() {
        assert!(verify_tol_sd(None).is_ok());
        assert!(verify_tol_sd(Some(1e-8)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Report the first non-finite coordinate of θ̂.
    //
    // Given
    // -----
    // - `θ̂ = [0.0, NaN, inf]`.
    //
    // Expect
    // ------
    // - `InvalidThetaHat` at index 1.
    fn validate_theta_hat_reports_first_non_finite_entry() {
        let res = validate_theta_hat(Some(array![0.0, f64::NAN, f64::INFINITY]));
        assert!(matches!(res, Err(OptError::InvalidThetaHat { index: 1, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Objective values must be finite.
    //
    // Given
    // -----
    // - `-inf` and `-12.5`.
    //
    // Expect
    // ------
    // - `-inf` rejected as `NonFiniteCost`, `-12.5` accepted.
    fn validate_value_rejects_infinities() {
        assert!(matches!(
            validate_value(f64::NEG_INFINITY),
            Err(OptError::NonFiniteCost { .. })
        ));
        assert!(validate_value(-12.5).is_ok());
    }
}

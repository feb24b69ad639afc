//! Numerical stability utilities.
//!
//! Provides safe implementations of the logistic map and its inverse,
//! which are prone to overflow or cancellation in naïve form. The
//! unconstrained optimizer space is mapped onto bounded model parameters
//! with these helpers.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: clamp applied before taking a logit so that boundary
//!   probabilities map to large but finite reals.
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(-x))`, mapping ℝ → [0, 1].
//! - [`safe_logit(p)`]: inverse of the logistic map on `[0, 1]` with
//!   clamping at the boundaries.

/// Boundary clamp for logits.
///
/// `safe_logit(0.0)` and `safe_logit(1.0)` would be `∓∞`; inputs are
/// clamped into `[LOGIT_EPS, 1 - LOGIT_EPS]` first.
pub const LOGIT_EPS: f64 = 1e-12;

/// Numerically stable logistic (sigmoid): `σ(x) = 1 / (1 + exp(-x))`.
///
/// For negative `x` the equivalent form `exp(x) / (1 + exp(x))` is used so
/// that `exp` is only ever evaluated on non-positive arguments. The result
/// saturates to exactly `0.0` / `1.0` far in the tails, never `NaN`.
///
/// # Parameters
/// - `x`: real input (may be infinite).
///
/// # Returns
/// - `σ(x)` in `[0, 1]`.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of [`safe_logistic`] on `[0, 1]`: `logit(p) = ln(p / (1 - p))`.
///
/// Inputs are clamped into `[LOGIT_EPS, 1 - LOGIT_EPS]` so the result is
/// always finite.
///
/// # Parameters
/// - `p`: a probability in `[0, 1]`.
///
/// # Returns
/// - `x` such that `safe_logistic(x) ≈ p`.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    p.ln() - (-p).ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Agreement with the naïve sigmoid on a safe grid.
    //
    // Given
    // -----
    // - x in {-10, -1, 0, 1, 10}.
    //
    // Expect
    // ------
    // - `safe_logistic(x) == 1 / (1 + exp(-x))` to 1e-14.
    fn logistic_matches_naive_formula() {
        for x in [-10.0_f64, -1.0, 0.0, 1.0, 10.0] {
            let naive = 1.0 / (1.0 + (-x).exp());
            assert_relative_eq!(safe_logistic(x), naive, epsilon = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // Tails saturate without producing NaN.
    //
    // Given
    // -----
    // - x = ±1000 and ±∞.
    //
    // Expect
    // ------
    // - Results in [0, 1]; +∞ → 1 and -∞ → 0.
    fn logistic_saturates_in_tails() {
        assert_eq!(safe_logistic(f64::INFINITY), 1.0);
        assert_eq!(safe_logistic(f64::NEG_INFINITY), 0.0);
        for x in [-1000.0, 1000.0] {
            let y = safe_logistic(x);
            assert!((0.0..=1.0).contains(&y));
        }
    }

    #[test]
    // Purpose
    // -------
    // `safe_logit` inverts `safe_logistic` and stays finite at the edges.
    //
    // Given
    // -----
    // - p in {0.01, 0.3, 0.5, 0.99} and the boundaries {0, 1}.
    //
    // Expect
    // ------
    // - Interior round trip to 1e-12; boundaries map to finite values.
    fn logit_inverts_logistic() {
        for p in [0.01, 0.3, 0.5, 0.99] {
            assert_relative_eq!(safe_logistic(safe_logit(p)), p, epsilon = 1e-12);
        }
        assert!(safe_logit(0.0).is_finite());
        assert!(safe_logit(1.0).is_finite());
        assert!(safe_logit(0.0) < 0.0 && safe_logit(1.0) > 0.0);
    }
}

//! MSM-BT parameters and the map from optimizer space.
//!
//! Purpose
//! -------
//! Hold the natural parameters `(m0, s0, p_1..p_k)` and convert between them
//! and the unconstrained optimizer vector `θ ∈ ℝ^{k+2}`:
//!
//! ```text
//! m0  = 1 + logistic(θ₀)      ∈ (1, 2)
//! s0  = exp(θ₁)               ∈ (0, ∞)
//! p_i = logistic(θ_{i+2})     ∈ (0, 1)
//! ```
//!
//! Key behaviors
//! -------------
//! - [`MSMParams::new`] validates user-supplied parameters on the closed
//!   domain (`m0 ∈ [1, 2]`, `s0 > 0`, `p_i ∈ [0, 1]`), so degenerate
//!   configurations such as `m0 = 1, p = 0` are representable.
//! - [`MSMParams::from_theta`] is total on finite θ. Extreme coordinates may
//!   saturate (`s0 = ∞`, `p = 0`); the likelihood filter screens for that.
//! - [`MSMParams::to_theta`] is the inverse map, clamped at the boundaries.
//!
//! Testing notes
//! -------------
//! - `θ = 0` maps to `(1.5, 1.0, 0.5, …)`, the inverse round trips, and
//!   domain violations are rejected by `new`.
use crate::{
    msm::{
        core::shape::MSMShape,
        errors::{MSMError, MSMResult},
    },
    optimization::{
        loglik_optimizer::Theta,
        numerical_stability::transformations::{safe_logistic, safe_logit},
    },
};
use ndarray::{Array1, ArrayView1};

/// Natural MSM-BT parameters.
///
/// Fields
/// ------
/// - `m0`: multifractal multiplier in `[1, 2]`.
/// - `s0`: unconditional volatility scale, finite and `> 0`.
/// - `probs`: one switching probability per chain, each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MSMParams {
    pub m0: f64,
    pub s0: f64,
    pub probs: Array1<f64>,
}

impl MSMParams {
    /// Construct validated parameters.
    ///
    /// # Errors
    /// - [`MSMError::InvalidM0`], [`MSMError::InvalidS0`] or
    ///   [`MSMError::InvalidSwitchProb`] for out-of-domain values.
    /// - [`MSMError::InvalidDimension`] if `probs` is empty or too long.
    pub fn new(m0: f64, s0: f64, probs: Array1<f64>) -> MSMResult<Self> {
        let params = MSMParams { m0, s0, probs };
        params.validate()?;
        Ok(params)
    }

    /// Check the closed parameter domain.
    pub fn validate(&self) -> MSMResult<()> {
        MSMShape::new(self.probs.len())?;
        if !(1.0..=2.0).contains(&self.m0) {
            return Err(MSMError::InvalidM0 { value: self.m0 });
        }
        if !self.s0.is_finite() || self.s0 <= 0.0 {
            return Err(MSMError::InvalidS0 { value: self.s0 });
        }
        for (index, &value) in self.probs.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(MSMError::InvalidSwitchProb { index, value });
            }
        }
        Ok(())
    }

    /// Map an unconstrained optimizer vector onto natural parameters.
    ///
    /// # Errors
    /// - [`MSMError::ThetaLengthMismatch`] if `theta.len() != k + 2`.
    /// - [`MSMError::InvalidThetaInput`] at the first non-finite coordinate.
    pub fn from_theta(theta: ArrayView1<f64>, shape: &MSMShape) -> MSMResult<Self> {
        validate_theta(theta, shape)?;
        let m0 = 1.0 + safe_logistic(theta[0]);
        let s0 = theta[1].exp();
        let probs = theta.iter().skip(2).map(|&u| safe_logistic(u)).collect();
        Ok(MSMParams { m0, s0, probs })
    }

    /// Inverse of [`MSMParams::from_theta`].
    ///
    /// Boundary values (`m0 ∈ {1, 2}`, `p ∈ {0, 1}`) are clamped by
    /// `LOGIT_EPS` so the result is finite.
    pub fn to_theta(&self) -> Theta {
        let mut theta = Theta::zeros(self.probs.len() + 2);
        theta[0] = safe_logit(self.m0 - 1.0);
        theta[1] = self.s0.ln();
        for (slot, &p) in theta.iter_mut().skip(2).zip(self.probs.iter()) {
            *slot = safe_logit(p);
        }
        theta
    }

    /// Number of chains.
    pub fn k(&self) -> usize {
        self.probs.len()
    }

    /// Copy with switching probabilities sorted ascending.
    ///
    /// The likelihood is invariant to permuting chains, so this is the
    /// canonical reporting order.
    pub fn sorted(&self) -> Self {
        let mut probs = self.probs.to_vec();
        probs.sort_by(f64::total_cmp);
        MSMParams { m0: self.m0, s0: self.s0, probs: Array1::from(probs) }
    }
}

/// Length and finiteness checks for an optimizer vector.
pub fn validate_theta(theta: ArrayView1<f64>, shape: &MSMShape) -> MSMResult<()> {
    let expected = shape.theta_len();
    if theta.len() != expected {
        return Err(MSMError::ThetaLengthMismatch { expected, actual: theta.len() });
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(MSMError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The origin of optimizer space maps to the domain midpoint.
    //
    // Given
    // -----
    // - k = 3, θ = 0.
    //
    // Expect
    // ------
    // - `(m0, s0, p) = (1.5, 1.0, [0.5, 0.5, 0.5])`.
    fn zero_theta_maps_to_midpoint() {
        let shape = MSMShape::new(3).expect("valid k");
        let params = MSMParams::from_theta(Theta::zeros(5).view(), &shape).expect("finite θ");
        assert_relative_eq!(params.m0, 1.5);
        assert_relative_eq!(params.s0, 1.0);
        assert_eq!(params.probs, array![0.5, 0.5, 0.5]);
    }

    #[test]
    // Purpose
    // -------
    // `to_theta` inverts `from_theta` on interior points.
    //
    // Given
    // -----
    // - θ = [-0.7, ln 0.02, 2.1, -3.3].
    //
    // Expect
    // ------
    // - `to_theta(from_theta(θ)) ≈ θ` to 1e-9.
    fn theta_round_trip() {
        let shape = MSMShape::new(2).expect("valid k");
        let theta = array![-0.7, 0.02_f64.ln(), 2.1, -3.3];
        let back = MSMParams::from_theta(theta.view(), &shape).expect("finite θ").to_theta();
        for (a, b) in back.iter().zip(theta.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    // Purpose
    // -------
    // θ shape and finiteness are checked before transforming.
    //
    // Given
    // -----
    // - k = 1 with a length-4 θ, and a θ containing +∞.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch { expected: 3, actual: 4 }` and
    //   `InvalidThetaInput { index: 2, .. }`.
    fn from_theta_validates_input() {
        let shape = MSMShape::new(1).expect("valid k");
        assert_eq!(
            MSMParams::from_theta(Theta::zeros(4).view(), &shape),
            Err(MSMError::ThetaLengthMismatch { expected: 3, actual: 4 })
        );
        assert!(matches!(
            MSMParams::from_theta(array![0.0, 0.0, f64::INFINITY].view(), &shape),
            Err(MSMError::InvalidThetaInput { index: 2, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Closed-domain validation for user-supplied parameters.
    //
    // Given
    // -----
    // - Degenerate but valid `(1.0, 0.02, [0.0])`, then m0 = 2.5,
    //   s0 = 0, and p = 1.2.
    //
    // Expect
    // ------
    // - First accepted; the others fail with the matching variant.
    fn new_enforces_closed_domain() {
        assert!(MSMParams::new(1.0, 0.02, array![0.0]).is_ok());
        assert!(matches!(
            MSMParams::new(2.5, 0.02, array![0.1]),
            Err(MSMError::InvalidM0 { .. })
        ));
        assert!(matches!(MSMParams::new(1.3, 0.0, array![0.1]), Err(MSMError::InvalidS0 { .. })));
        assert!(matches!(
            MSMParams::new(1.3, 0.02, array![0.1, 1.2]),
            Err(MSMError::InvalidSwitchProb { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Canonical ordering of switching probabilities.
    //
    // Given
    // -----
    // - probs = [0.9, 0.01, 0.3].
    //
    // Expect
    // ------
    // - `sorted().probs == [0.01, 0.3, 0.9]`, m0/s0 untouched.
    fn sorted_orders_probabilities() {
        let params = MSMParams::new(1.4, 0.01, array![0.9, 0.01, 0.3]).expect("valid");
        let sorted = params.sorted();
        assert_eq!(sorted.probs, array![0.01, 0.3, 0.9]);
        assert_eq!((sorted.m0, sorted.s0), (1.4, 0.01));
    }

    #[test]
    // Purpose
    // -------
    // A probability vector of unsupported length is a dimension error.
    //
    // Given
    // -----
    // - Empty probabilities, then 13 probabilities of 0.1.
    //
    // Expect
    // ------
    // - `InvalidDimension` carrying the offending length.
    fn new_rejects_unsupported_probability_count() {
        for n in [0, 13] {
            match MSMParams::new(1.3, 0.02, Array1::from_elem(n, 0.1)) {
                Err(MSMError::InvalidDimension { k, .. }) => assert_eq!(k, n),
                other => panic!("expected InvalidDimension for {n} probs, got {other:?}"),
            }
        }
    }
}

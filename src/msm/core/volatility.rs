//! State-dependent volatilities.
//!
//! A joint state with `a` high chains has volatility
//! `σ_a = s0 · sqrt((2 − m0)^a · m0^(k − a))`.
use ndarray::Array1;

/// Volatility for every joint state.
///
/// `states[i]` is the number of high chains of state `i`
/// (see [`enumerate_states`](super::states::enumerate_states)).
///
/// For `m0 ∈ [1, 2)` and `s0 > 0` every entry is strictly positive; with
/// `m0 = 1` all states collapse to `s0`. No validation happens here: the
/// filter screens the output for non-positive or non-finite values.
pub fn state_volatilities(m0: f64, s0: f64, k: usize, states: &[u32]) -> Array1<f64> {
    let m1 = 2.0 - m0;
    states
        .iter()
        .map(|&a| {
            let a = a as i32;
            s0 * (m1.powi(a) * m0.powi(k as i32 - a)).sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msm::core::states::enumerate_states;
    use approx::assert_relative_eq;

    #[test]
    // Purpose
    // -------
    // Hand-computed values for k = 2.
    //
    // Given
    // -----
    // - m0 = 1.4, s0 = 0.5, states `[0, 1, 1, 2]`.
    //
    // Expect
    // ------
    // - σ₀ = 0.5·1.4, σ₁ = 0.5·sqrt(0.6·1.4), σ₂ = 0.5·0.6.
    fn matches_closed_form() {
        let vol = state_volatilities(1.4, 0.5, 2, &enumerate_states(2));
        assert_relative_eq!(vol[0], 0.7, epsilon = 1e-12);
        assert_relative_eq!(vol[1], 0.5 * (0.6_f64 * 1.4).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(vol[2], vol[1]);
        assert_relative_eq!(vol[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ordering in the number of high chains and the m0 = 1 collapse.
    //
    // Given
    // -----
    // - k = 5, s0 = 0.02, m0 ∈ {1.0, 1.2, 1.45, 0.8}.
    //
    // Expect
    // ------
    // - m0 = 1: every σ equals s0.
    // - m0 > 1: σ strictly decreasing in `a` since `2 − m0 < m0`.
    // - m0 = 0.8 (outside the fitted domain): `2 − m0 > m0`, so σ is
    //   strictly increasing in `a`.
    fn monotone_in_state_and_collapses_at_one() {
        let k = 5;
        let states = enumerate_states(k);

        let flat = state_volatilities(1.0, 0.02, k, &states);
        assert!(flat.iter().all(|&s| (s - 0.02).abs() < 1e-15));

        for m0 in [1.2, 1.45] {
            let vol = state_volatilities(m0, 0.02, k, &states);
            let by_a: Vec<f64> = (0..=k as u32)
                .map(|a| vol[states.iter().position(|&s| s == a).expect("state exists")])
                .collect();
            assert!(by_a.iter().all(|&s| s > 0.0));
            assert!(by_a.windows(2).all(|w| w[1] < w[0]));
        }

        let vol = state_volatilities(0.8, 0.02, k, &states);
        assert!(vol[(1 << k) - 1] > vol[0]);
        assert!(vol[1] > vol[0]);
    }
}

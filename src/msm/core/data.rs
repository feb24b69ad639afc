//! Return-series container for MSM-BT models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the observed returns fed into
//! the likelihood filter. Validation happens once at the boundary so the
//! filter can assume clean input.
//!
//! Invariants & assumptions
//! ------------------------
//! - The series is non-empty.
//! - Every entry is finite.
//! - Values are never rescaled here; de-meaning is an explicit, separate
//!   constructor.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the empty / non-finite guards, de-meaning, and the
//!   sample standard deviation used to seed the estimator.
use crate::msm::errors::{MSMError, MSMResult};
use ndarray::Array1;

/// `ReturnSeries` — validated, immutable sequence of returns.
///
/// Fields
/// ------
/// - `data`: `Array1<f64>`
///   Observed returns; non-empty, all finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    pub data: Array1<f64>,
}

impl ReturnSeries {
    /// Construct a validated [`ReturnSeries`].
    ///
    /// # Errors
    /// - [`MSMError::EmptySeries`] if `data` has no elements.
    /// - [`MSMError::NonFiniteData`] at the first NaN/±inf.
    pub fn new(data: Array1<f64>) -> MSMResult<Self> {
        if data.is_empty() {
            return Err(MSMError::EmptySeries);
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(MSMError::NonFiniteData { index, value });
            }
        }
        Ok(ReturnSeries { data })
    }

    /// Construct a [`ReturnSeries`] after subtracting the sample mean.
    ///
    /// A series whose mean is already exactly zero is returned unchanged.
    ///
    /// # Errors
    /// Same as [`ReturnSeries::new`].
    pub fn demeaned(data: Array1<f64>) -> MSMResult<Self> {
        let series = ReturnSeries::new(data)?;
        let mean = series.mean();
        if mean == 0.0 {
            return Ok(series);
        }
        Ok(ReturnSeries { data: series.data.mapv(|x| x - mean) })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.data.sum() / self.data.len() as f64
    }

    /// Sample standard deviation (`n − 1` denominator).
    ///
    /// Returns `0.0` for a single observation.
    pub fn sample_std(&self) -> f64 {
        let n = self.data.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let ss = self.data.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        (ss / (n - 1) as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Reject empty and non-finite input.
    //
    // Given
    // -----
    // - An empty array and `[0.1, NaN]`.
    //
    // Expect
    // ------
    // - `EmptySeries` and `NonFiniteData { index: 1, .. }`.
    fn new_rejects_invalid_series() {
        assert_eq!(ReturnSeries::new(Array1::zeros(0)), Err(MSMError::EmptySeries));
        assert!(matches!(
            ReturnSeries::new(array![0.1, f64::NAN]),
            Err(MSMError::NonFiniteData { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // De-meaning subtracts the sample mean and preserves dispersion.
    //
    // Given
    // -----
    // - `[1, 2, 3, 6]` (mean 3).
    //
    // Expect
    // ------
    // - `[-2, -1, 0, 3]`, mean 0, identical sample std.
    fn demeaned_centres_series() {
        let raw = ReturnSeries::new(array![1.0, 2.0, 3.0, 6.0]).expect("valid");
        let centred = ReturnSeries::demeaned(array![1.0, 2.0, 3.0, 6.0]).expect("valid");

        assert_eq!(centred.data, array![-2.0, -1.0, 0.0, 3.0]);
        assert_relative_eq!(centred.mean(), 0.0);
        assert_relative_eq!(centred.sample_std(), raw.sample_std(), epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Sample standard deviation uses the `n − 1` denominator.
    //
    // Given
    // -----
    // - `[2, 4, 4, 4, 5, 5, 7, 9]` (population sd 2, sample sd √(32/7)).
    //
    // Expect
    // ------
    // - `sample_std == sqrt(32 / 7)`; a single observation yields 0.
    fn sample_std_uses_bessel_correction() {
        let s = ReturnSeries::new(array![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).expect("valid");
        assert_relative_eq!(s.sample_std(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(ReturnSeries::new(array![1.0]).expect("valid").sample_std(), 0.0);
    }
}

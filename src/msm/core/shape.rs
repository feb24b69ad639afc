//! Model dimension for MSM-BT models.
//!
//! `k` is the number of binary latent chains; the joint state space has
//! `2^k` elements, so every per-evaluation cost is exponential in `k`.
use crate::msm::errors::{MSMError, MSMResult};

/// Largest supported number of chains.
///
/// `2^12 = 4096` states keeps a full likelihood evaluation over a few
/// thousand observations well under a second; beyond that the filter
/// becomes impractically slow for simplex search.
pub const MAX_DIMENSION: usize = 12;

/// Number of binary chains `k` of the MSM-BT model.
///
/// Invariant: `1 ≤ k ≤ MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MSMShape {
    pub k: usize,
}

impl MSMShape {
    /// Construct a validated [`MSMShape`].
    ///
    /// # Errors
    /// - [`MSMError::InvalidDimension`] if `k == 0` or `k > MAX_DIMENSION`.
    pub fn new(k: usize) -> MSMResult<Self> {
        if k == 0 {
            return Err(MSMError::InvalidDimension { k, reason: "k must be at least 1." });
        }
        if k > MAX_DIMENSION {
            return Err(MSMError::InvalidDimension {
                k,
                reason: "k exceeds the supported maximum of 12 chains.",
            });
        }
        Ok(MSMShape { k })
    }

    /// Number of joint states, `2^k`.
    pub fn n_states(&self) -> usize {
        1 << self.k
    }

    /// Length of the optimizer vector, `k + 2`.
    pub fn theta_len(&self) -> usize {
        self.k + 2
    }
}

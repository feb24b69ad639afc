//! Joint state space of `k` binary chains.
//!
//! State index `i ∈ 0..2^k` encodes the joint configuration of all chains:
//! chain `c` (0-based, in parameter order) is bit `k − 1 − c` of `i`, so the
//! first chain is the most significant bit. This is the same ordering the
//! iterated Kronecker product in [`transition`](super::transition) produces.

/// Number of "high" chains for every joint state: element `i` is `popcount(i)`.
///
/// Length is `2^k`; values lie in `0..=k`.
pub fn enumerate_states(k: usize) -> Vec<u32> {
    (0..1usize << k).map(|i| i.count_ones()).collect()
}

//! numerical_stability — numerically robust parameter transforms.
//!
//! Purpose
//! -------
//! Collect the small scalar transforms used to map unconstrained optimizer
//! coordinates onto bounded model parameters. Centralizing them keeps the
//! tail guards and clamping tolerances consistent across the crate.
//!
//! Key behaviors
//! -------------
//! - `safe_logistic` maps ℝ → [0, 1] without overflow in either tail.
//! - `safe_logit` inverts it with a `LOGIT_EPS` boundary clamp, so
//!   round-tripping boundary probabilities yields finite coordinates.
//!
//! Conventions
//! -----------
//! - Pure functions on `f64`; no I/O, logging, or global state.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] check agreement with naïve formulas
//!   on safe grids, tail saturation, and the logit/logistic round trip.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{safe_logistic, safe_logit, LOGIT_EPS};

pub mod prelude {
    pub use super::transformations::{safe_logistic, safe_logit, LOGIT_EPS};
}

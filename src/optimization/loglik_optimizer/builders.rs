//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the simplex solver used by the
//! log-likelihood optimizer. These helpers hide Argmin's generic wiring
//! and apply crate-level options (spread tolerance, initial simplex size)
//! so that higher-level code can request a configured solver without
//! touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Build the initial simplex `{θ₀, θ₀ + h·e₁, …, θ₀ + h·e_d}` from a
//!   starting point and the configured step `h`.
//! - Apply the optional standard-deviation tolerance from [`MLEOptions`].
//! - Leave `max_iters` to the runner/executor layer, keeping these builders
//!   side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - The simplex always has `d + 1` vertices for a `d`-dimensional `θ₀`.
//! - `θ₀` must be non-empty; an empty start is reported as
//!   [`OptError::EmptyTheta`].
//! - Invalid tolerances passed into Argmin's `with_sd_tolerance` surface as
//!   [`OptError`] via the crate's `From<Error>` implementation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover simplex geometry, the empty-start guard, and that a
//!   configured solver builds under default options.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        traits::MLEOptions,
        types::{NelderMeadSolver, Theta},
    },
};

/// Build the `d + 1` vertices of the initial simplex around `theta0`.
///
/// Vertex `0` is `theta0` itself; vertex `i` (for `i ≥ 1`) shifts
/// coordinate `i - 1` by `step`.
///
/// # Errors
/// - [`OptError::EmptyTheta`] if `theta0` has no coordinates.
pub fn initial_simplex(theta0: &Theta, step: f64) -> OptResult<Vec<Theta>> {
    if theta0.is_empty() {
        return Err(OptError::EmptyTheta);
    }
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[i] += step;
        vertices.push(vertex);
    }
    Ok(vertices)
}

/// Construct a Nelder–Mead solver seeded at `theta0`.
///
/// # Errors
/// - [`OptError::EmptyTheta`] for an empty starting point.
/// - Argmin validation failures from `with_sd_tolerance`.
pub fn build_nelder_mead(theta0: &Theta, opts: &MLEOptions) -> OptResult<NelderMeadSolver> {
    let vertices = initial_simplex(theta0, opts.simplex_step)?;
    let mut solver = NelderMeadSolver::new(vertices);
    if let Some(tol) = opts.tols.tol_sd {
        solver = solver.with_sd_tolerance(tol)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Check the geometry of the initial simplex.
    //
    // Given
    // -----
    // - `θ₀ = [1.0, -2.0, 0.5]`, `step = 0.05`.
    //
    // Expect
    // ------
    // - 4 vertices; vertex 0 equals θ₀.
    // - Vertex i differs from θ₀ only at coordinate i-1, by exactly `step`.
    fn initial_simplex_offsets_one_coordinate_per_vertex() {
        let theta0 = array![1.0, -2.0, 0.5];
        let vertices = initial_simplex(&theta0, 0.05).expect("non-empty start");

        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0], theta0);
        for (i, vertex) in vertices.iter().enumerate().skip(1) {
            let diff = vertex - &theta0;
            for (j, d) in diff.iter().enumerate() {
                let expected = if j == i - 1 { 0.05 } else { 0.0 };
                assert!((d - expected).abs() < 1e-15);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // An empty start cannot define a simplex.
    //
    // Given
    // -----
    // - `θ₀ = []`.
    //
    // Expect
    // ------
    // - `Err(OptError::EmptyTheta)` from both helpers.
    fn empty_start_is_rejected() {
        let theta0 = Theta::zeros(0);
        assert_eq!(initial_simplex(&theta0, 0.05), Err(OptError::EmptyTheta));
        assert!(matches!(
            build_nelder_mead(&theta0, &MLEOptions::default()),
            Err(OptError::EmptyTheta)
        ));
    }

    #[test]
    // Purpose
    // -------
    // Default options build a solver without errors.
    //
    // Given
    // -----
    // - `θ₀ = [0, 0]` and `MLEOptions::default()`.
    //
    // Expect
    // ------
    // - `build_nelder_mead` returns `Ok`.
    fn default_options_build_a_solver() {
        let theta0 = array![0.0, 0.0];
        assert!(build_nelder_mead(&theta0, &MLEOptions::default()).is_ok());
    }
}

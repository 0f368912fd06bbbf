//! Metaheuristic TSP solvers sharing the primitives in [`common`].

mod common;
mod ig;
mod ign;
mod ilsb;

use route_core::SolverRng;

use crate::matrix::TspMatrix;

pub use ig::IgSolver;
pub use ign::IgnSolver;
pub use ilsb::IlsBSolver;

/// A metaheuristic that turns a precomputed [`TspMatrix`] into a tour.
///
/// Returns a permutation of `0..matrix.len()`, one occurrence each, with
/// `route[0] == start_idx` (see `ensure_start` in [`common`]).
pub trait TspSolver: Send + Sync {
    /// Name used by the solver factory (`"ig"`, `"ign"`, `"ilsb"`, …).
    fn name(&self) -> &'static str;

    fn solve(&self, matrix: &TspMatrix, start_idx: usize, rng: &mut SolverRng) -> Vec<usize>;
}

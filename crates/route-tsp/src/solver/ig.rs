//! Iterated Greedy: nearest-neighbor start, destroy-reinsert perturbation,
//! 2-opt swap local search.

use route_core::SolverRng;

use super::common::{destroy_reinsert, ensure_start, two_opt_swap};
use super::TspSolver;
use crate::matrix::TspMatrix;

pub struct IgSolver {
    pub iterations: usize,
}

impl Default for IgSolver {
    fn default() -> Self {
        Self { iterations: 5_000 }
    }
}

impl TspSolver for IgSolver {
    fn name(&self) -> &'static str {
        "ig"
    }

    fn solve(&self, matrix: &TspMatrix, start_idx: usize, rng: &mut SolverRng) -> Vec<usize> {
        let mut incumbent = matrix.nearest_neighbor_route(start_idx);
        two_opt_swap(&mut incumbent, matrix, false);
        let mut incumbent_cost = matrix.tour_cost(&incumbent, false);

        for _ in 0..self.iterations {
            let mut candidate = incumbent.clone();
            destroy_reinsert(&mut candidate, rng);
            two_opt_swap(&mut candidate, matrix, false);

            let candidate_cost = matrix.tour_cost(&candidate, false);
            if candidate_cost < incumbent_cost {
                incumbent = candidate;
                incumbent_cost = candidate_cost;
            }
        }

        ensure_start(&mut incumbent, start_idx);
        incumbent
    }
}

//! IG-No-local-search: nearest-neighbor start, destroy-reinsert
//! perturbation, no neighborhood search — evaluate and accept greedily.

use route_core::SolverRng;

use super::common::{destroy_reinsert, ensure_start};
use super::TspSolver;
use crate::matrix::TspMatrix;

pub struct IgnSolver {
    pub iterations: usize,
}

impl Default for IgnSolver {
    fn default() -> Self {
        Self { iterations: 10_000 }
    }
}

impl TspSolver for IgnSolver {
    fn name(&self) -> &'static str {
        "ign"
    }

    fn solve(&self, matrix: &TspMatrix, start_idx: usize, rng: &mut SolverRng) -> Vec<usize> {
        let mut incumbent = matrix.nearest_neighbor_route(start_idx);
        let mut incumbent_cost = matrix.tour_cost(&incumbent, false);

        for _ in 0..self.iterations {
            let mut candidate = incumbent.clone();
            destroy_reinsert(&mut candidate, rng);

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

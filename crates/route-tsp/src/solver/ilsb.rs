//! Iterated Local Search (variant B): nearest-neighbor start, full random
//! shuffle perturbation, 2-opt edge-reverse local search.

use route_core::SolverRng;

use super::common::{ensure_start, two_opt_edge_reverse};
use super::TspSolver;
use crate::matrix::TspMatrix;

pub struct IlsBSolver {
    pub iterations: usize,
}

impl Default for IlsBSolver {
    fn default() -> Self {
        Self { iterations: 5_000 }
    }
}

impl TspSolver for IlsBSolver {
    fn name(&self) -> &'static str {
        "ilsb"
    }

    fn solve(&self, matrix: &TspMatrix, start_idx: usize, rng: &mut SolverRng) -> Vec<usize> {
        let mut incumbent = matrix.nearest_neighbor_route(start_idx);
        two_opt_edge_reverse(&mut incumbent, matrix, false);
        let mut incumbent_cost = matrix.tour_cost(&incumbent, false);

        for _ in 0..self.iterations {
            let mut candidate = incumbent.clone();
            rng.shuffle(&mut candidate);
            two_opt_edge_reverse(&mut candidate, matrix, false);

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

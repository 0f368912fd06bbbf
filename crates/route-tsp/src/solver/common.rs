//! Perturbation and local-search primitives shared by all three solvers.

use route_core::SolverRng;

use crate::matrix::TspMatrix;

/// Remove `k = min(3, len)` elements from uniformly random positions, then
/// reinsert each at a uniformly random position in the shortened sequence.
pub(crate) fn destroy_reinsert(route: &mut Vec<usize>, rng: &mut SolverRng) {
    let k = 3.min(route.len());
    let mut removed = Vec::with_capacity(k);
    for _ in 0..k {
        if route.is_empty() {
            break;
        }
        let pos = rng.gen_range(0..route.len());
        removed.push(route.remove(pos));
    }
    for item in removed {
        let pos = rng.gen_range(0..=route.len());
        route.insert(pos, item);
    }
}

/// Transpose-based neighborhood: for every `i < j`, swap the two single
/// positions and keep the swap iff total tour cost improves. NOT the
/// classical 2-opt edge reversal. Repeats full sweeps until one finds no
/// improvement.
pub(crate) fn two_opt_swap(route: &mut [usize], matrix: &TspMatrix, closed: bool) {
    let n = route.len();
    let mut improved = true;
    while improved {
        improved = false;
        let mut best_cost = matrix.tour_cost(route, closed);
        for i in 0..n {
            for j in (i + 1)..n {
                route.swap(i, j);
                let cost = matrix.tour_cost(route, closed);
                if cost < best_cost {
                    best_cost = cost;
                    improved = true;
                } else {
                    route.swap(i, j);
                }
            }
        }
    }
}

/// Classical 2-opt: for every `i < j` with `j >= i+2`, reverse
/// `route[i+1..=j]` and keep it iff total tour cost improves. Repeats full
/// sweeps until one finds no improvement.
pub(crate) fn two_opt_edge_reverse(route: &mut [usize], matrix: &TspMatrix, closed: bool) {
    let n = route.len();
    let mut improved = true;
    while improved {
        improved = false;
        let mut best_cost = matrix.tour_cost(route, closed);
        for i in 0..n {
            for j in (i + 2)..n {
                route[i + 1..=j].reverse();
                let cost = matrix.tour_cost(route, closed);
                if cost < best_cost {
                    best_cost = cost;
                    improved = true;
                } else {
                    route[i + 1..=j].reverse();
                }
            }
        }
    }
}

/// Rotate the permutation so `route[0] == start_idx`, if present.
pub(crate) fn ensure_start(route: &mut [usize], start_idx: usize) {
    if let Some(pos) = route.iter().position(|&x| x == start_idx) {
        route.rotate_left(pos);
    }
}

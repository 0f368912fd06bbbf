//! The all-pairs distance matrix: the only heavy concurrent component in
//! the routing engine.
//!
//! Rows are claimed dynamically from an atomic counter by `W = max(4,
//! min(available_parallelism, N))` worker threads, each owning its row
//! exclusively once claimed — no row is ever written by two threads. This
//! mirrors the counter-plus-scoped-threads idiom rather than a
//! data-parallel map, since the unit of work (a row) is claimed on demand,
//! not sliced up-front.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use route_core::{EdgeId, NodeId};
use route_graph::{Graph, VehicleProfile};
use route_pathfinding::PathfindingAlgorithm;

/// One matrix cell: a distance (possibly `+∞` if unreachable) and the edge
/// path that realizes it.
#[derive(Clone, Debug)]
pub struct Cell {
    pub distance: f64,
    pub path: Vec<EdgeId>,
}

impl Cell {
    fn diagonal() -> Self {
        Cell { distance: 0.0, path: Vec::new() }
    }

    fn unreachable() -> Self {
        Cell { distance: f64::INFINITY, path: Vec::new() }
    }
}

/// A precomputed N×N shortest-path matrix over a fixed waypoint list.
/// Asymmetric graphs are supported — the matrix is not required to be
/// symmetric.
pub struct TspMatrix {
    waypoints: Vec<NodeId>,
    cells: Vec<Cell>,
}

impl TspMatrix {
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, idx: usize) -> NodeId {
        self.waypoints[idx]
    }

    pub fn waypoints(&self) -> &[NodeId] {
        &self.waypoints
    }

    pub fn cell(&self, i: usize, j: usize) -> &Cell {
        &self.cells[i * self.len() + j]
    }

    /// Distribute rows across worker threads and fill the matrix.
    /// `progress`, when supplied, is invoked under a mutex as
    /// `(completed_pairs, total_pairs, percent)` after each row completes —
    /// reports are serialized so they never interleave, but their order
    /// matches row-completion order, not row-index order.
    pub fn precompute(
        graph: &Graph,
        algorithm: &dyn PathfindingAlgorithm,
        profile: Option<&VehicleProfile>,
        waypoints: Vec<NodeId>,
        progress: Option<&mut (dyn FnMut(usize, usize, f64) + Send)>,
    ) -> TspMatrix {
        let n = waypoints.len();
        if n == 0 {
            return TspMatrix { waypoints, cells: Vec::new() };
        }

        // Populate the adjacency index up front: worker threads below call
        // `graph.outgoing()` concurrently, and it must not race to build it.
        graph.build_adjacency();

        let rows: Vec<Mutex<Vec<Cell>>> = (0..n).map(|_| Mutex::new(Vec::new())).collect();
        let next_row = AtomicUsize::new(0);
        let completed_rows = AtomicUsize::new(0);
        let progress = Mutex::new(progress);
        let total_pairs = n * n;

        let worker_count = 4.max(
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1)
                .min(n),
        );

        std::thread::scope(|scope| {
            for _ in 0..worker_count {
                scope.spawn(|| loop {
                    let row_idx = next_row.fetch_add(1, Ordering::Relaxed);
                    if row_idx >= n {
                        break;
                    }

                    let from = waypoints[row_idx];
                    let mut row = Vec::with_capacity(n);
                    for (col_idx, &to) in waypoints.iter().enumerate() {
                        if col_idx == row_idx {
                            row.push(Cell::diagonal());
                            continue;
                        }
                        let run = algorithm.find_path(graph, from, to, profile);
                        if run.edges.is_empty() {
                            row.push(Cell::unreachable());
                        } else {
                            let distance = run
                                .edges
                                .iter()
                                .filter_map(|&e| graph.edge(e).map(|edge| edge.distance.meters()))
                                .sum();
                            row.push(Cell { distance, path: run.edges });
                        }
                    }

                    *rows[row_idx].lock().expect("row mutex poisoned") = row;

                    let done = completed_rows.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::debug!(row = row_idx, done, total = n, "tsp matrix row complete");

                    let mut guard = progress.lock().expect("progress mutex poisoned");
                    if let Some(cb) = guard.as_deref_mut() {
                        let completed_pairs = done * n;
                        let percent = (completed_pairs as f64 / total_pairs as f64) * 100.0;
                        cb(completed_pairs, total_pairs, percent);
                    }
                });
            }
        });

        let cells = rows
            .into_iter()
            .flat_map(|row| row.into_inner().expect("row mutex poisoned"))
            .collect();

        tracing::info!(n, "tsp matrix precompute complete");
        TspMatrix { waypoints, cells }
    }

    /// Sum of `matrix[tour[i]][tour[i+1]]` over the tour, plus the
    /// closing edge `matrix[tour[L-1]][tour[0]]` when `closed` and `L >= 2`.
    pub fn tour_cost(&self, tour: &[usize], closed: bool) -> f64 {
        let n = tour.len();
        if n < 2 {
            return 0.0;
        }
        let mut total: f64 = tour.windows(2).map(|w| self.cell(w[0], w[1]).distance).sum();
        if closed {
            total += self.cell(tour[n - 1], tour[0]).distance;
        }
        total
    }

    /// Greedy nearest-neighbor tour starting at `start_idx`. Ties are
    /// broken by ascending index.
    pub fn nearest_neighbor_route(&self, start_idx: usize) -> Vec<usize> {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut route = Vec::with_capacity(n);
        let mut current = start_idx;
        visited[current] = true;
        route.push(current);

        for _ in 1..n {
            let mut best: Option<(usize, f64)> = None;
            for j in 0..n {
                if visited[j] {
                    continue;
                }
                let d = self.cell(current, j).distance;
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((j, d));
                }
            }
            let (next, _) = best.expect("at least one unvisited index remains");
            visited[next] = true;
            route.push(next);
            current = next;
        }
        route
    }

    /// Build a matrix directly from a distance table, bypassing `precompute`.
    /// Test-only: exercises `tour_cost`/`nearest_neighbor_route` against
    /// fixture numbers without needing a graph whose shortest paths happen
    /// to match them exactly.
    #[cfg(test)]
    pub(crate) fn from_distances(waypoints: Vec<NodeId>, distances: Vec<Vec<f64>>) -> Self {
        let n = waypoints.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in distances {
            for d in row {
                cells.push(Cell { distance: d, path: Vec::new() });
            }
        }
        TspMatrix { waypoints, cells }
    }

    /// `true` iff no off-diagonal cell is `+∞`.
    pub fn has_valid_solution(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (0..n).all(|j| i == j || self.cell(i, j).distance.is_finite()))
    }

    /// Every off-diagonal `(i, j)` with `+∞` distance — both directions of
    /// an unreachable pair are reported separately.
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i != j && !self.cell(i, j).distance.is_finite() {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

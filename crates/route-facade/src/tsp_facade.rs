//! Fixed-start waypoint touring over a shared graph handle.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use route_core::{EdgeId, NodeId, RouteError, RouteResult, SolverRng};
use route_graph::{Graph, VehicleProfile};
use route_tsp::TspMatrix;

use crate::event::RoutingEvent;
use crate::factory::{pathfinding_algorithm, tsp_solver};
use crate::result::TspResult;

/// Resolves a TSP solver by name and tours a set of waypoints over a shared
/// graph, synchronously or from a background thread.
pub struct TspFacade {
    graph: Arc<Graph>,
}

impl TspFacade {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Block the calling thread until the tour is solved.
    ///
    /// `closed` only affects the reported `total_distance` (a closing leg
    /// back to waypoint 0 is added when `true`); it never changes the
    /// returned permutation.
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        &self,
        waypoints: Vec<NodeId>,
        pathfinding_algorithm_name: &str,
        tsp_solver_name: &str,
        profile: Option<&VehicleProfile>,
        closed: bool,
        mut progress: Option<&mut (dyn FnMut(usize, usize, f64) + Send)>,
    ) -> RouteResult<TspResult> {
        if waypoints.len() < 2 {
            return Err(RouteError::InsufficientWaypoints { got: waypoints.len() });
        }

        let missing: Vec<NodeId> = waypoints.iter().copied().filter(|&w| !self.graph.has_node(w)).collect();
        if !missing.is_empty() {
            return Err(RouteError::InvalidWaypoints { missing });
        }

        let kernel = pathfinding_algorithm(pathfinding_algorithm_name)?;

        let precompute_started = Instant::now();
        let matrix = TspMatrix::precompute(&self.graph, kernel.as_ref(), profile, waypoints, progress.as_deref_mut());
        let precompute_time = precompute_started.elapsed();

        if !matrix.has_valid_solution() {
            let mut nodes: Vec<NodeId> = matrix
                .unreachable_pairs()
                .into_iter()
                .flat_map(|(i, j)| [matrix.waypoint(i), matrix.waypoint(j)])
                .collect();
            nodes.sort_by_key(|n| n.value());
            nodes.dedup();
            return Err(RouteError::UnreachableWaypoints {
                nodes,
                suggestions: vec!["try 'no restrictions' profile", "remove problematic waypoints"],
            });
        }

        let solver = tsp_solver(tsp_solver_name)?;

        let solve_started = Instant::now();
        let mut rng = SolverRng::from_entropy();
        let tour = solver.solve(&matrix, 0, &mut rng);
        let solve_time = solve_started.elapsed();

        let mut segment_edges: Vec<Vec<EdgeId>> = Vec::new();
        let mut segment_nodes: Vec<Vec<NodeId>> = Vec::new();
        for pair in tour.windows(2) {
            segment_edges.push(matrix.cell(pair[0], pair[1]).path.clone());
            segment_nodes.push(vec![matrix.waypoint(pair[0]), matrix.waypoint(pair[1])]);
        }
        if closed {
            if let (Some(&last), Some(&first)) = (tour.last(), tour.first()) {
                segment_edges.push(matrix.cell(last, first).path.clone());
                segment_nodes.push(vec![matrix.waypoint(last), matrix.waypoint(first)]);
            }
        }

        let total_distance = matrix.tour_cost(&tour, closed);
        let result_waypoints = tour.iter().map(|&idx| matrix.waypoint(idx)).collect();

        Ok(TspResult {
            tour,
            waypoints: result_waypoints,
            segment_edges,
            segment_nodes,
            total_distance,
            precompute_time,
            solve_time,
            algorithm: solver.name(),
        })
    }

    /// Dispatch `solve` on a background thread, reporting `Started`,
    /// `Progress` (relayed from the TSP matrix precompute), and `Completed`
    /// over `events`. The vehicle profile is cloned before dispatch.
    #[allow(clippy::too_many_arguments)]
    pub fn solve_async(
        &self,
        waypoints: Vec<NodeId>,
        pathfinding_algorithm_name: String,
        tsp_solver_name: String,
        profile: Option<VehicleProfile>,
        closed: bool,
        events: Sender<RoutingEvent<TspResult>>,
    ) {
        let graph = Arc::clone(&self.graph);
        std::thread::spawn(move || {
            let _ = events.send(RoutingEvent::Started);
            let started = Instant::now();
            let facade = TspFacade::new(graph);

            let progress_tx = events.clone();
            let mut on_progress = move |completed: usize, total: usize, percent: f64| {
                let _ = progress_tx.send(RoutingEvent::Progress { completed, total, percent });
            };

            let outcome = facade.solve(
                waypoints,
                &pathfinding_algorithm_name,
                &tsp_solver_name,
                profile.as_ref(),
                closed,
                Some(&mut on_progress),
            );
            tracing::debug!(elapsed = ?started.elapsed(), "async solve finished");
            let _ = events.send(RoutingEvent::Completed(outcome));
        });
    }
}

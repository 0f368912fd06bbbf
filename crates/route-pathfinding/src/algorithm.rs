//! The pathfinding contract shared by [`crate::dijkstra::DijkstraAlgorithm`]
//! and [`crate::astar::AStarAlgorithm`].

use std::time::Duration;

use route_core::{EdgeId, NodeId};
use route_graph::{Graph, VehicleProfile};

/// The result of a single pathfinding call.
///
/// An empty `edges` list means no path exists (or `start == end`); the
/// kernel never fails a call, per its propagation policy — callers that
/// need a structured error wrap this at the facade layer.
#[derive(Debug, Clone)]
pub struct PathfindingRun {
    /// Edges to traverse in order, from `start` to `end`.
    pub edges: Vec<EdgeId>,
    /// Number of nodes popped from the priority queue and settled.
    pub nodes_explored: usize,
    /// Wall-clock time spent in this call.
    pub wall_time: Duration,
}

impl PathfindingRun {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A pluggable single-source single-target shortest-path kernel.
///
/// Implementations hold no state that outlives a call (or reset it at the
/// start of one), so a single instance may be shared (`Send + Sync`) across
/// sequential queries or independent TSP-matrix rows.
pub trait PathfindingAlgorithm: Send + Sync {
    /// Name used by the algorithm factory (`"dijkstra"`, `"astar"`, …).
    fn name(&self) -> &'static str;

    /// Compute a path from `start` to `end`. When `profile` is present,
    /// edges it deems unsuitable are treated as absent from the graph.
    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        profile: Option<&VehicleProfile>,
    ) -> PathfindingRun;
}

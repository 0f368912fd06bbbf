//! Result types assembled by the facades from raw kernel/solver output.

use std::time::Duration;

use route_core::{EdgeId, NodeId};

/// Outcome of a single [`crate::PathfindingFacade::find_path`] call.
#[derive(Debug, Clone)]
pub struct PathResult {
    pub edges: Vec<EdgeId>,
    /// Source of the first edge, then each edge's target, in order.
    pub nodes: Vec<NodeId>,
    pub total_distance: f64,
    pub nodes_explored: usize,
    pub wall_time: Duration,
    pub algorithm: &'static str,
}

/// Outcome of a single [`crate::TspFacade::solve`] call.
#[derive(Debug, Clone)]
pub struct TspResult {
    /// Tour as indices into the original waypoint list.
    pub tour: Vec<usize>,
    /// Tour translated back to graph node ids, same order as `tour`.
    pub waypoints: Vec<NodeId>,
    /// Edges for each consecutive leg of the tour (length `tour.len() - 1`).
    pub segment_edges: Vec<Vec<EdgeId>>,
    /// Node sequence for each leg, mirroring `segment_edges`.
    pub segment_nodes: Vec<Vec<NodeId>>,
    pub total_distance: f64,
    pub precompute_time: Duration,
    pub solve_time: Duration,
    pub algorithm: &'static str,
}

//! Standard lazy-deletion Dijkstra.

use std::time::Instant;

use route_core::NodeId;
use route_graph::{Graph, VehicleProfile};

use crate::algorithm::{PathfindingAlgorithm, PathfindingRun};
use crate::common::search;

/// Dijkstra's algorithm with first-pop-wins tie-breaking. Holds no
/// between-call state, so one instance may be shared across threads.
#[derive(Default)]
pub struct DijkstraAlgorithm;

impl PathfindingAlgorithm for DijkstraAlgorithm {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        profile: Option<&VehicleProfile>,
    ) -> PathfindingRun {
        let started = Instant::now();
        let outcome = search(graph, start, end, profile, |_| 0.0, None, "dijkstra");
        PathfindingRun {
            edges: outcome.edges,
            nodes_explored: outcome.nodes_explored,
            wall_time: started.elapsed(),
        }
    }
}

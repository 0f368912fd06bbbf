//! A* with the scaled-Manhattan admissible heuristic and an expansion cap.

use std::time::Instant;

use route_core::NodeId;
use route_graph::{Graph, VehicleProfile};

use crate::algorithm::{PathfindingAlgorithm, PathfindingRun};
use crate::common::search;

/// Metres per degree at the equator under the flat-earth approximation.
const METERS_PER_DEGREE: f64 = 111_000.0;
/// Keeps the heuristic admissible at all latitudes (see Design Notes).
const ADMISSIBILITY_SCALE: f64 = 0.95;
/// Safety cap on settled nodes before the search gives up its best partial.
const EXPANSION_CAP: usize = 200_000;

/// A* over the same search loop as [`crate::dijkstra::DijkstraAlgorithm`],
/// ordered by `f = g + h`.
#[derive(Default)]
pub struct AStarAlgorithm;

impl PathfindingAlgorithm for AStarAlgorithm {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        profile: Option<&VehicleProfile>,
    ) -> PathfindingRun {
        let started = Instant::now();

        let Some(end_node) = graph.node(end) else {
            return PathfindingRun { edges: Vec::new(), nodes_explored: 0, wall_time: started.elapsed() };
        };
        let end_coord = end_node.coordinate;

        let heuristic = |n: NodeId| {
            graph
                .node(n)
                .map(|node| node.coordinate.manhattan_degrees_to(end_coord) * METERS_PER_DEGREE * ADMISSIBILITY_SCALE)
                .unwrap_or(0.0)
        };

        let outcome = search(graph, start, end, profile, heuristic, Some(EXPANSION_CAP), "astar");
        PathfindingRun {
            edges: outcome.edges,
            nodes_explored: outcome.nodes_explored,
            wall_time: started.elapsed(),
        }
    }
}

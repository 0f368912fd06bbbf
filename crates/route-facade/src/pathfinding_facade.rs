//! Single-source single-target routing over a shared graph handle.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use route_core::{NodeId, RouteError, RouteResult};
use route_graph::{Graph, VehicleProfile};

use crate::event::RoutingEvent;
use crate::factory::pathfinding_algorithm;
use crate::result::PathResult;

/// Resolves a pathfinding algorithm by name and queries it against a shared
/// graph, synchronously or from a background thread.
pub struct PathfindingFacade {
    graph: Arc<Graph>,
}

impl PathfindingFacade {
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Block the calling thread until the route is found (or shown absent).
    pub fn find_path(
        &self,
        start: NodeId,
        end: NodeId,
        algorithm: &str,
        profile: Option<&VehicleProfile>,
    ) -> RouteResult<PathResult> {
        if !self.graph.has_node(start) {
            return Err(RouteError::NodeNotFound(start));
        }
        if !self.graph.has_node(end) {
            return Err(RouteError::NodeNotFound(end));
        }

        let kernel = pathfinding_algorithm(algorithm)?;
        let run = kernel.find_path(&self.graph, start, end, profile);

        let mut nodes = Vec::new();
        if let Some(&first) = run.edges.first() {
            let first_edge = self.graph.edge(first).expect("kernel returned a dangling edge id");
            nodes.push(first_edge.source);
        }
        for &edge_id in &run.edges {
            let edge = self.graph.edge(edge_id).expect("kernel returned a dangling edge id");
            nodes.push(edge.target);
        }

        let total_distance: f64 = run
            .edges
            .iter()
            .map(|&e| self.graph.edge(e).expect("kernel returned a dangling edge id").distance.meters())
            .sum();

        Ok(PathResult {
            edges: run.edges,
            nodes,
            total_distance,
            nodes_explored: run.nodes_explored,
            wall_time: run.wall_time,
            algorithm: kernel.name(),
        })
    }

    /// Dispatch `find_path` on a background thread, reporting `Started` and
    /// `Completed` over `events`. The vehicle profile is cloned before
    /// dispatch so the caller keeps ownership of its own copy.
    pub fn find_path_async(
        &self,
        start: NodeId,
        end: NodeId,
        algorithm: String,
        profile: Option<VehicleProfile>,
        events: Sender<RoutingEvent<PathResult>>,
    ) {
        let graph = Arc::clone(&self.graph);
        std::thread::spawn(move || {
            let _ = events.send(RoutingEvent::Started);
            let started = Instant::now();
            let facade = PathfindingFacade::new(graph);
            let outcome = facade.find_path(start, end, &algorithm, profile.as_ref());
            tracing::debug!(elapsed = ?started.elapsed(), "async find_path finished");
            let _ = events.send(RoutingEvent::Completed(outcome));
        });
    }
}

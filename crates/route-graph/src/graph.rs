//! Road network graph: nodes, directed edges, adjacency index, and bounds.
//!
//! # Data layout
//!
//! Nodes and edges are stored in dense `Vec`s (positions assigned in
//! insertion order); `HashMap<i64, usize>` tables map the user-facing
//! 64-bit ids to those dense positions. The adjacency index is a
//! `Vec<Vec<usize>>` keyed by dense node position, holding dense edge
//! positions — a non-one-way edge appears in both its source's and its
//! target's adjacency list, per the routability invariant. It is built
//! lazily the first time it's queried after a mutation (via `OnceLock`,
//! not `RefCell`, so `Graph` stays `Sync` and can be shared across the
//! worker threads in the TSP matrix precompute), rather than kept eagerly
//! in sync on every insert.

use std::collections::HashMap;
use std::sync::OnceLock;

use route_core::{Coordinate, Distance, EdgeId, NodeId, RouteError, RouteResult};

use crate::edge::Edge;
use crate::node::Node;

/// Geographic bounding box (min/max latitude, min/max longitude).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Directed road graph: owns its nodes and edges exclusively.
///
/// Node and edge references handed out by [`Graph::node`]/[`Graph::edge`]
/// borrow from the graph and must not outlive it.
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<i64, usize>,
    edge_index: HashMap<i64, usize>,
    bounds: Option<Bounds>,
    adjacency: OnceLock<Vec<Vec<usize>>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
            bounds: None,
            adjacency: OnceLock::new(),
        }
    }

    // ── Dimensions ──────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    /// Recompute bounds from the current node set. `None` if there are no
    /// nodes.
    pub fn recompute_bounds(&mut self) {
        self.bounds = self.nodes.first().map(|first| {
            self.nodes.iter().fold(
                Bounds {
                    min_lat: first.coordinate.latitude,
                    max_lat: first.coordinate.latitude,
                    min_lon: first.coordinate.longitude,
                    max_lon: first.coordinate.longitude,
                },
                |mut acc, n| {
                    acc.min_lat = acc.min_lat.min(n.coordinate.latitude);
                    acc.max_lat = acc.max_lat.max(n.coordinate.latitude);
                    acc.min_lon = acc.min_lon.min(n.coordinate.longitude);
                    acc.max_lon = acc.max_lon.max(n.coordinate.longitude);
                    acc
                },
            )
        });
    }

    // ── Lookup ──────────────────────────────────────────────────────────

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id.value())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id.value()).map(|&i| &self.nodes[i])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id.value()).map(|&i| &self.edges[i])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Insert or replace a node. Invalidates the adjacency index only when
    /// the node is new (updating an existing node's coordinate cannot
    /// change adjacency).
    pub fn add_node(&mut self, id: NodeId, coordinate: Coordinate) {
        match self.node_index.get(&id.value()) {
            Some(&i) => self.nodes[i].coordinate = coordinate,
            None => {
                self.node_index.insert(id.value(), self.nodes.len());
                self.nodes.push(Node::new(id, coordinate));
            }
        }
    }

    /// Insert or replace a directed edge. Fails with
    /// [`RouteError::InvalidArgument`] if `source` or `target` does not
    /// already exist in the graph.
    pub fn add_edge(
        &mut self,
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        one_way: bool,
        distance: Distance,
        tags: HashMap<String, String>,
    ) -> RouteResult<()> {
        if !self.has_node(source) {
            return Err(RouteError::InvalidArgument(format!(
                "edge {id} references missing source node {source}"
            )));
        }
        if !self.has_node(target) {
            return Err(RouteError::InvalidArgument(format!(
                "edge {id} references missing target node {target}"
            )));
        }

        let edge = Edge::new(id, source, target, one_way, distance, tags);
        match self.edge_index.get(&id.value()) {
            Some(&i) => self.edges[i] = edge,
            None => {
                self.edge_index.insert(id.value(), self.edges.len());
                self.edges.push(edge);
            }
        }
        self.invalidate_adjacency();
        Ok(())
    }

    /// Drop all nodes, edges, and the adjacency index.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_index.clear();
        self.edge_index.clear();
        self.bounds = None;
        self.invalidate_adjacency();
    }

    fn invalidate_adjacency(&mut self) {
        self.adjacency.take();
    }

    // ── Adjacency ───────────────────────────────────────────────────────

    fn compute_adjacency(&self) -> Vec<Vec<usize>> {
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        for (edge_idx, edge) in self.edges.iter().enumerate() {
            let src_idx = self.node_index[&edge.source.value()];
            lists[src_idx].push(edge_idx);
            if !edge.one_way {
                let dst_idx = self.node_index[&edge.target.value()];
                lists[dst_idx].push(edge_idx);
            }
        }
        lists
    }

    /// Populate the adjacency index now, rather than lazily on next query.
    /// Useful after bulk-loading (e.g. the binary codec) or before handing
    /// the graph to worker threads, so no query races another thread's
    /// first-touch build. A no-op if the index is already built.
    pub fn build_adjacency(&self) {
        self.adjacency.get_or_init(|| self.compute_adjacency());
    }

    /// Edges incident on `node` per the adjacency invariant: every edge
    /// with `source == node`, plus every non-one-way edge with
    /// `target == node`. Empty if `node` is absent from the graph.
    pub fn outgoing(&self, node: NodeId) -> Vec<EdgeId> {
        let Some(&node_idx) = self.node_index.get(&node.value()) else {
            return Vec::new();
        };
        self.adjacency
            .get_or_init(|| self.compute_adjacency())
            .get(node_idx)
            .map(|edges| edges.iter().map(|&i| self.edges[i].id).collect())
            .unwrap_or_default()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

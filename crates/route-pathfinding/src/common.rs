//! Shared best-first search loop used by both Dijkstra and A*.
//!
//! Lazy-deletion variant: a min-priority queue keyed by `f = g + h` (`h ==
//! 0` for Dijkstra), a `visited` set guarding against stale re-pops, a
//! tentative-distance map and a predecessor-edge map both keyed on node id
//! (matching the abstract contract rather than a dense-index CSR scan,
//! since a [`route_graph::Graph`] hands out ids, not positions).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use route_core::{EdgeId, NodeId};
use route_graph::{Graph, VehicleProfile};

/// Total-ordered wrapper over `f64` for the binary heap. Safe because edge
/// costs and heuristic values here are always finite (`Distance` rejects
/// negative and NaN never enters through meter arithmetic).
#[derive(Copy, Clone, PartialEq)]
struct HeapCost(f64);

impl Eq for HeapCost {}

impl PartialOrd for HeapCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

pub(crate) struct SearchOutcome {
    pub edges: Vec<EdgeId>,
    pub nodes_explored: usize,
}

/// Run the shared search. `heuristic` returns `0.0` for Dijkstra; A* passes
/// the scaled-Manhattan estimate to `end`. `expansion_cap`, when set, bounds
/// the number of settled nodes before the search gives up and returns its
/// best partial reconstruction.
pub(crate) fn search(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    profile: Option<&VehicleProfile>,
    heuristic: impl Fn(NodeId) -> f64,
    expansion_cap: Option<usize>,
    algorithm_name: &'static str,
) -> SearchOutcome {
    if start == end || graph.node(start).is_none() || graph.node(end).is_none() {
        return SearchOutcome { edges: Vec::new(), nodes_explored: 0 };
    }

    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut prev_edge: HashMap<NodeId, EdgeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut heap: BinaryHeap<std::cmp::Reverse<(HeapCost, NodeId)>> = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(std::cmp::Reverse((HeapCost(heuristic(start)), start)));

    let mut nodes_explored = 0usize;

    while let Some(std::cmp::Reverse((_, node))) = heap.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node);
        nodes_explored += 1;

        if node == end {
            return SearchOutcome { edges: reconstruct(graph, &prev_edge, start, end), nodes_explored };
        }

        if let Some(cap) = expansion_cap {
            if nodes_explored >= cap {
                tracing::warn!(
                    algorithm = algorithm_name,
                    cap,
                    "expansion cap reached; returning best partial result"
                );
                return SearchOutcome { edges: reconstruct(graph, &prev_edge, start, end), nodes_explored };
            }
        }

        let g_node = dist[&node];
        for edge_id in graph.outgoing(node) {
            let Some(edge) = graph.edge(edge_id) else { continue };
            if let Some(p) = profile {
                if !p.is_road_suitable(&edge.tags) {
                    continue;
                }
            }
            let neighbor = if edge.source == node { edge.target } else { edge.source };
            if visited.contains(&neighbor) {
                continue;
            }
            let new_g = g_node + edge.distance.meters();
            let better = match dist.get(&neighbor) {
                Some(&known) => new_g < known,
                None => true,
            };
            if better {
                dist.insert(neighbor, new_g);
                prev_edge.insert(neighbor, edge_id);
                heap.push(std::cmp::Reverse((HeapCost(new_g + heuristic(neighbor)), neighbor)));
            }
        }
    }

    SearchOutcome { edges: Vec::new(), nodes_explored }
}

/// Full predecessor-edge walk from `end` back to `start`. Moves to the
/// endpoint of each recorded edge that isn't the node we're currently at,
/// so a bidirectional edge traversed in reverse reconstructs correctly.
/// Returns an empty list if the walk cannot close back to `start`.
fn reconstruct(graph: &Graph, prev_edge: &HashMap<NodeId, EdgeId>, start: NodeId, end: NodeId) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut cur = end;
    while cur != start {
        let Some(&edge_id) = prev_edge.get(&cur) else {
            return Vec::new();
        };
        let Some(edge) = graph.edge(edge_id) else {
            return Vec::new();
        };
        edges.push(edge_id);
        cur = if edge.target == cur { edge.source } else { edge.target };
    }
    edges.reverse();
    edges
}

//! Graph node: a stable id plus a geographic position.

use route_core::{Coordinate, NodeId};

/// A road-network node. Identity is its [`NodeId`]; equality and hashing are
/// by id, matching the source map's contract.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub coordinate: Coordinate,
}

impl Node {
    pub fn new(id: NodeId, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

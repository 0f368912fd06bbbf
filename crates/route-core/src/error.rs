//! The error taxonomy shared by every `route-*` crate.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type returned by every fallible public API in the
/// routing engine.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Unknown algorithm/profile name, or a value that fails a value-type
    /// invariant (e.g. a negative [`crate::Distance`]).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A start/end node id does not exist in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// TSP requested with fewer than 2 waypoints.
    #[error("TSP requires at least 2 waypoints, got {got}")]
    InsufficientWaypoints { got: usize },

    /// TSP requested with one or more waypoint ids missing from the graph.
    #[error("waypoints not found in graph: {missing:?}")]
    InvalidWaypoints { missing: Vec<NodeId> },

    /// The precomputed distance matrix has one or more unreachable pairs.
    #[error("unreachable waypoints: {nodes:?} ({suggestions:?})")]
    UnreachableWaypoints {
        nodes: Vec<NodeId>,
        suggestions: Vec<&'static str>,
    },

    /// Reserved for future use: the matrix precompute could not complete.
    #[error("matrix construction failed: {0}")]
    MatrixConstructionFailed(String),

    /// Reserved for future use: no valid TSP solution could be produced.
    #[error("no valid solution: {0}")]
    NoValidSolution(String),

    /// Reserved for future use: an operation exceeded its time budget.
    #[error("timeout: {0}")]
    Timeout(String),

    /// The binary snapshot could not be read or written.
    #[error("failed to load graph from {path}: {message}")]
    GraphLoaderFailed { path: String, message: String },

    /// A recognized but unimplemented algorithm name (e.g. `igsa`).
    #[error("algorithm requires threading implementation (not available): {0}")]
    UnavailableAlgorithm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `route-*` crates.
pub type RouteResult<T> = Result<T, RouteError>;

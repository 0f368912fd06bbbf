//! `route-pathfinding` — Dijkstra and A* over a [`route_graph::Graph`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|-----------------------------------------------------|
//! | [`algorithm`] | `PathfindingAlgorithm` trait, `PathfindingRun`     |
//! | [`dijkstra`]  | `DijkstraAlgorithm`                                |
//! | [`astar`]     | `AStarAlgorithm`                                   |
//! | `common`      | Shared best-first search loop (crate-private)      |

mod common;

pub mod algorithm;
pub mod astar;
pub mod dijkstra;

#[cfg(test)]
mod tests;

pub use algorithm::{PathfindingAlgorithm, PathfindingRun};
pub use astar::AStarAlgorithm;
pub use dijkstra::DijkstraAlgorithm;

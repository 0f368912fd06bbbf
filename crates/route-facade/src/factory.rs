//! Case-insensitive name → instance factories for algorithms, solvers, and
//! vehicle profiles.

use route_core::{RouteError, RouteResult};
use route_graph::{VehicleProfile, VehicleProfileFactory};
use route_pathfinding::{AStarAlgorithm, DijkstraAlgorithm, PathfindingAlgorithm};
use route_tsp::{IgSolver, IgnSolver, IlsBSolver, TspSolver};

/// Resolve a pathfinding algorithm name (`"dijkstra"`, `"astar"`/`"a*"`/`"a_star"`).
pub fn pathfinding_algorithm(name: &str) -> RouteResult<Box<dyn PathfindingAlgorithm>> {
    match name.to_ascii_lowercase().as_str() {
        "dijkstra" => Ok(Box::new(DijkstraAlgorithm)),
        "astar" | "a*" | "a_star" => Ok(Box::new(AStarAlgorithm)),
        "igsa" => Err(RouteError::UnavailableAlgorithm(name.to_string())),
        other => Err(RouteError::InvalidArgument(format!("unknown pathfinding algorithm: {other}"))),
    }
}

/// Resolve a TSP solver name (`"ig"`, `"ign"`, `"ilsb"`/`"ils_b"`).
pub fn tsp_solver(name: &str) -> RouteResult<Box<dyn TspSolver>> {
    match name.to_ascii_lowercase().as_str() {
        "ig" => Ok(Box::new(IgSolver::default())),
        "ign" => Ok(Box::new(IgnSolver::default())),
        "ilsb" | "ils_b" => Ok(Box::new(IlsBSolver::default())),
        "igsa" => Err(RouteError::UnavailableAlgorithm(name.to_string())),
        other => Err(RouteError::InvalidArgument(format!("unknown TSP solver: {other}"))),
    }
}

/// Resolve a vehicle profile name (`"CAR"`/`"car"`, `"PEDESTRIAN"`/`"peaton"`).
pub fn vehicle_profile(name: &str) -> RouteResult<VehicleProfile> {
    match name.to_ascii_lowercase().as_str() {
        "car" => Ok(VehicleProfileFactory::car()),
        "pedestrian" | "peaton" => Ok(VehicleProfileFactory::pedestrian()),
        other => Err(RouteError::InvalidArgument(format!("unknown vehicle profile: {other}"))),
    }
}

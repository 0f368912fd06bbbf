//! `route-core` — foundational value types for the routing engine.
//!
//! This crate is a dependency of every other `route-*` crate. It
//! intentionally has no `route-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                |
//! |-----------|------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                        |
//! | [`geo`]   | `Coordinate`, `Distance`, haversine       |
//! | [`rng`]   | `SolverRng` (per-solver)                  |
//! | [`error`] | `RouteError`, `RouteResult`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |
//!           | Required by `route-graph`'s snapshot codec.              |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use geo::{Coordinate, Distance};
pub use ids::{EdgeId, NodeId};
pub use rng::SolverRng;

//! `route-graph` — the graph store, vehicle profiles, and the binary
//! snapshot codec.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|---------------------------------------------------------|
//! | [`graph`]   | `Graph`, `Bounds` — dense node/edge storage + adjacency |
//! | [`node`]    | `Node`                                                   |
//! | [`edge`]    | `Edge`, street-name derivation                           |
//! | [`profile`] | `VehicleProfile`, `VehicleProfileFactory`                |
//! | [`codec`]   | Binary snapshot read/write                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod codec;
pub mod edge;
pub mod graph;
pub mod node;
pub mod profile;

#[cfg(test)]
mod tests;

pub use edge::Edge;
pub use graph::{Bounds, Graph};
pub use node::Node;
pub use profile::{VehicleProfile, VehicleProfileFactory};

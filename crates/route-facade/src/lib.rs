//! `route-facade` — the two query-shaped entry points into the routing
//! engine, each resolving algorithm/profile names and assembling a
//! structured result.
//!
//! # Crate layout
//!
//! | Module                 | Contents                                   |
//! |-------------------------|--------------------------------------------|
//! | [`pathfinding_facade`]  | `PathfindingFacade`                        |
//! | [`tsp_facade`]          | `TspFacade`                                |
//! | [`factory`]             | name → algorithm/solver/profile resolution |
//! | [`event`]               | `RoutingEvent`, the async completion enum  |
//! | [`result`]               | `PathResult`, `TspResult`                 |

pub mod event;
pub mod factory;
pub mod pathfinding_facade;
pub mod result;
pub mod tsp_facade;


pub use event::RoutingEvent;
pub use pathfinding_facade::PathfindingFacade;
pub use result::{PathResult, TspResult};
pub use tsp_facade::TspFacade;

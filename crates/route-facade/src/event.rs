//! Events delivered over the `std::sync::mpsc` channel by the asynchronous
//! facade methods.

use route_core::RouteError;

/// A one-shot lifecycle notification for an asynchronous routing call.
///
/// `Completed` is always the last event sent on a channel; a sender is then
/// dropped, which the receiving end observes as channel closure.
#[derive(Debug)]
pub enum RoutingEvent<T> {
    /// Sent once, immediately after the worker thread starts.
    Started,
    /// TSP precompute progress: `(completed_pairs, total_pairs, percent)`.
    /// Never sent by `find_path_async`.
    Progress { completed: usize, total: usize, percent: f64 },
    /// Sent once, carrying the final outcome.
    Completed(Result<T, RouteError>),
}

//! `sr-graph` — the in-memory node/way graph and its ingestion front end.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`graph`]  | `RouteGraph` arena, `GeoNode`, incidence bookkeeping       |
//! | [`way`]    | `Way` record, name constants                               |
//! | [`feed`]   | `FeedEvent` — the upstream map-feature event stream        |
//! | [`ingest`] | `ingest()` — events → graph, buffered tag rules            |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                             |
//!
//! # Phases
//!
//! Ingestion is the only writer during the build phase and hands the graph
//! over by value.  The merge engine (`sr-merge`) takes `&mut RouteGraph`;
//! classification and export only ever see `&RouteGraph`.

pub mod error;
pub mod feed;
pub mod graph;
pub mod ingest;
pub mod way;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use feed::FeedEvent;
pub use graph::{GeoNode, RouteGraph};
pub use ingest::ingest;
pub use way::{DEFAULT_NAME, NAME_MAX_CHARS, Way};

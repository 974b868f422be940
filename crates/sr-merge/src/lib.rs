//! `sr-merge` — consolidates fragmented same-named ways into logical routes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`engine`] | `consolidate()`, `MergeStats`                   |
//!
//! The engine is the only `&mut` consumer of a built
//! [`RouteGraph`](sr_graph::RouteGraph): ingestion hands the graph over by
//! value, `consolidate` mutates it in place, and everything downstream
//! reads it immutably.  Merging cannot fail — anything it cannot resolve is
//! counted and left alone.

pub mod engine;


pub use engine::{MergeStats, consolidate};

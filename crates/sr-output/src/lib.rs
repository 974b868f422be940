//! `sr-output` — serializes the consolidated graph.
//!
//! Two formats are produced:
//!
//! | Module     | Output                                                     |
//! |------------|------------------------------------------------------------|
//! | [`dump`]   | Debug CSV: one row per raw way, tri-state flags            |
//! | [`routes`] | Route export: BOM + provenance header + per-route blocks   |
//!
//! Both take `&RouteGraph` — export never mutates the graph.  Each writer
//! has a path convenience wrapper and a generic `Write`-sink variant for
//! tests.

pub mod dump;
pub mod error;
pub mod routes;


pub use dump::{write_dump, write_dump_csv};
pub use error::{OutputError, OutputResult};
pub use routes::{ExportStats, export_routes, export_routes_path};

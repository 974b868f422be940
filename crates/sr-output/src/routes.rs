//! The route text export.
//!
//! Consumed downstream as a flat file: UTF-8 opened by a byte-order mark, a
//! provenance comment block, then one block per route —
//! `category<TAB>name`, a fixed-width coordinate line per node, and a blank
//! line.  Routes are filtered by the length cutoff and sorted by name
//! before serialization.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sr_classify::{LENGTH_CUTOFF_M, classify};
use sr_graph::RouteGraph;

use crate::error::OutputResult;

/// Counters from one export run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Route blocks written.
    pub exported: u64,
    /// Live ways dropped for being shorter than the cutoff.
    pub dropped_short: u64,
}

impl fmt::Display for ExportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} routes exported, {} too small", self.exported, self.dropped_short)
    }
}

/// Write the route export to `path`.
pub fn export_routes_path(graph: &RouteGraph, path: &Path) -> OutputResult<ExportStats> {
    let mut sink = BufWriter::new(File::create(path)?);
    let stats = export_routes(graph, &mut sink)?;
    sink.flush()?;
    Ok(stats)
}

/// Filter, sort, classify, and serialize the graph's live ways.
pub fn export_routes<W: Write>(graph: &RouteGraph, sink: &mut W) -> OutputResult<ExportStats> {
    let mut stats = ExportStats::default();

    let mut routes: Vec<_> = graph
        .live_ways()
        .filter(|(_, way)| {
            if way.length_m < LENGTH_CUTOFF_M {
                stats.dropped_short += 1;
                false
            } else {
                true
            }
        })
        .collect();
    // Stable by-name sort; equal names keep ascending way id.
    routes.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));

    // BOM first so spreadsheet and editor tooling picks up UTF-8.
    writeln!(
        sink,
        "\u{FEFF}# OSM export {}",
        graph.base_date.as_deref().unwrap_or("unknown")
    )?;
    writeln!(
        sink,
        "# Map data \u{a9} OpenStreetMap contributors - http://www.openstreetmap.org/, \
         licensed under ODbL - http://opendatacommons.org/licenses/odbl/"
    )?;
    writeln!(sink)?;

    for (_, way) in routes {
        let category = classify(&way.flags, way.length_m);
        writeln!(sink, "{category}\t{}", way.name)?;
        for &node in &way.nodes {
            writeln!(sink, "{}", graph.node(node).pos)?;
        }
        writeln!(sink)?;
        stats.exported += 1;
    }
    Ok(stats)
}

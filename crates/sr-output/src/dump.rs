//! Debug CSV dump of the raw way table.
//!
//! One row per live way in ascending id order, tri-state flags rendered as
//! `true`/`false`/empty.  Run it before merging to inspect what the feed
//! delivered, or after to inspect what survived — the spreadsheet-friendly
//! counterpart of the route export.

use std::io::Write;
use std::path::Path;

use sr_graph::RouteGraph;

use crate::error::OutputResult;

const HEADERS: [&str; 9] = [
    "source_id", "name", "length_m", "cruise", "tourist", "hgv", "car", "vehicle", "foot",
];

/// Write the dump to `path`.
pub fn write_dump_csv(graph: &RouteGraph, path: &Path) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(graph, &mut writer)
}

/// Like [`write_dump_csv`] but accepts any `Write` sink (pass a `Vec<u8>`
/// in tests).
pub fn write_dump<W: Write>(graph: &RouteGraph, sink: W) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    write_rows(graph, &mut writer)
}

fn write_rows<W: Write>(graph: &RouteGraph, writer: &mut csv::Writer<W>) -> OutputResult<()> {
    writer.write_record(HEADERS)?;
    for (_, way) in graph.live_ways() {
        writer.write_record(&[
            way.source_id.to_string(),
            way.name.clone(),
            format!("{:.0}", way.length_m),
            way.flags.cruise.as_csv_field().to_string(),
            way.flags.tourist.as_csv_field().to_string(),
            way.flags.hgv.as_csv_field().to_string(),
            way.flags.car.as_csv_field().to_string(),
            way.flags.vehicle.as_csv_field().to_string(),
            way.flags.foot.as_csv_field().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

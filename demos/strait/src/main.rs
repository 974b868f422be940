//! strait — smallest end-to-end run of the searoutes pipeline.
//!
//! Ingests a synthetic Channel / North Sea feed, dumps the raw way table,
//! consolidates fragmented routes, and writes the route export.  Swap
//! `build_feed()` for a real extract-driven event stream to run at planet
//! scale.

mod feed;

use std::path::Path;

use anyhow::Result;

use sr_classify::{LENGTH_CUTOFF_M, classify};
use sr_graph::ingest;
use sr_merge::consolidate;
use sr_output::{export_routes_path, write_dump_csv};

use feed::build_feed;

const OUTPUT_DIR: &str = "output/strait";

fn main() -> Result<()> {
    println!("=== strait — searoutes consolidation demo ===");
    println!();

    // 1. Ingest the feed.
    let mut graph = ingest(build_feed())?;
    let ingested = graph.live_way_count();
    println!(
        "Ingested {} nodes, {} ways (extract dated {})",
        graph.node_count(),
        ingested,
        graph.base_date.as_deref().unwrap_or("unknown"),
    );

    // 2. Dump the raw way table for spreadsheet analysis.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let dump_path = Path::new(OUTPUT_DIR).join("ways.csv");
    write_dump_csv(&graph, &dump_path)?;
    println!("Raw dump        : {}", dump_path.display());

    // 3. Consolidate fragmented routes in place.
    let merge_stats = consolidate(&mut graph);

    // 4. Export the final route list.
    let routes_path = Path::new(OUTPUT_DIR).join("routes.txt");
    let export_stats = export_routes_path(&graph, &routes_path)?;
    println!("Route export    : {}", routes_path.display());
    println!();

    // 5. Summary.
    println!("{ingested} ways, of which {merge_stats}; {export_stats}");
    println!();

    // 6. Final route table.
    println!("{:<10} {:>9}  {}", "Category", "Length", "Name");
    println!("{}", "-".repeat(48));
    let mut routes: Vec<_> = graph
        .live_ways()
        .filter(|(_, w)| w.length_m >= LENGTH_CUTOFF_M)
        .map(|(_, w)| w)
        .collect();
    routes.sort_by(|a, b| a.name.cmp(&b.name));
    for way in routes {
        println!(
            "{:<10} {:>6.1} km  {}",
            classify(&way.flags, way.length_m).to_string(),
            way.length_m / 1_000.0,
            way.name,
        );
    }

    Ok(())
}

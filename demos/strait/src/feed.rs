//! Synthetic Channel / North Sea feed.
//!
//! Small enough to read, but it exercises every consolidation path: a
//! fragmented route that merges, a same-named fork that gets discarded, a
//! tourist loop, a cruise departure, and a way below the export cutoff.

use sr_graph::FeedEvent;

fn node(id: i64, lat: f64, lon: f64) -> FeedEvent {
    FeedEvent::NodeDeclared { id, lat, lon }
}

fn way(id: i64, nodes: &[i64], tags: &[(&str, &str)]) -> Vec<FeedEvent> {
    let mut events = vec![FeedEvent::WayStarted { id }];
    events.extend(nodes.iter().map(|&n| FeedEvent::WayNodeRef { node: n }));
    events.extend(tags.iter().map(|(k, v)| FeedEvent::tag(k, v)));
    events.push(FeedEvent::WayEnded);
    events
}

/// Build the demo feed.
pub fn build_feed() -> Vec<FeedEvent> {
    let mut events = vec![
        FeedEvent::Meta { base_date: "2025-06-01T00:00:00Z".into() },
        // Dover strait
        node(1, 51.1279, 1.3134), // Dover
        node(2, 51.0400, 1.5900), // mid-channel
        node(3, 50.9659, 1.8634), // Calais
        node(4, 50.9000, 1.6000), // Boulogne approach
        // Hoek van Holland – Harwich
        node(11, 51.9775, 4.1280),
        node(12, 51.9500, 3.0000),
        node(13, 51.9445, 1.2882),
        // Seal-watching loop off the Essex coast
        node(21, 51.7800, 1.1500),
        node(22, 51.7900, 1.1800),
        node(23, 51.8000, 1.1500),
        // Cruise departure
        node(31, 50.8998, -1.4044), // Southampton
        node(32, 49.6300, -2.3000), // past the Channel Islands
        // Harbour shuttle, ~60 m
        node(41, 51.1280, 1.3300),
        node(42, 51.1285, 1.3302),
    ];

    // One logical route mapped as two fragments; the tags differ per
    // fragment and must survive the merge combined.
    events.extend(way(100, &[1, 2], &[
        ("name", "Dover - Calais"),
        ("route", "ferry"),
        ("hgv", "yes"),
    ]));
    events.extend(way(101, &[2, 3], &[
        ("name", "Dover - Calais"),
        ("route", "ferry"),
        ("foot", "yes"),
    ]));
    // Same-named alternate joining mid-channel: a fork to discard.
    events.extend(way(102, &[2, 4], &[
        ("name", "Dover - Calais"),
        ("route", "ferry"),
    ]));

    events.extend(way(110, &[11, 12], &[
        ("name", "Hoek van Holland - Harwich"),
        ("route", "ferry"),
        ("motorcar", "yes"),
    ]));
    events.extend(way(111, &[12, 13], &[
        ("name", "Hoek van Holland - Harwich"),
        ("route", "ferry"),
    ]));

    events.extend(way(120, &[21, 22, 23, 21], &[
        ("name", "Seal watching"),
        ("route", "ferry"),
    ]));

    events.extend(way(130, &[31, 32], &[
        ("name", "Ocean Star departure"),
        ("route", "cruise"),
    ]));

    events.extend(way(140, &[41, 42], &[
        ("name", "Harbour shuttle"),
        ("route", "ferry"),
    ]));

    events
}

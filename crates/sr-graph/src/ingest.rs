//! Feed ingestion — builds a [`RouteGraph`] from a [`FeedEvent`] stream.
//!
//! # Tag application order
//!
//! Tags are buffered while a way is open and applied at `WayEnded` in a
//! fixed priority order: `name`, `name:*` variants, `ref`, access tags,
//! `ferry`, `route`.  The result therefore does not depend on the order the
//! upstream extract happens to present tags in — a feed that emits `ref`
//! before `name` still yields `Name #ref`.
//!
//! # Vocabularies
//!
//! The access-value vocabulary and the `route=` value set are closed:
//! anything outside them aborts the run ([`GraphError`]).  `ferry=` values
//! are open — recognized ones refine flags, the rest are ignored.

use sr_core::{Access, AccessFlags, GeoPoint, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::feed::FeedEvent;
use crate::graph::RouteGraph;
use crate::way::{DEFAULT_NAME, NAME_MAX_CHARS, Way};

// ── Public entry point ────────────────────────────────────────────────────────

/// Consume a feed and build the route graph.
///
/// Contract (enforced): every node is declared before it is referenced, way
/// events are properly bracketed, and every way has at least one node ref.
///
/// # Errors
///
/// Fails fast on any vocabulary or bracketing violation; see [`GraphError`].
pub fn ingest<I>(events: I) -> GraphResult<RouteGraph>
where
    I: IntoIterator<Item = FeedEvent>,
{
    let mut graph = RouteGraph::new();
    let mut open: Option<OpenWay> = None;

    for event in events {
        match event {
            FeedEvent::NodeDeclared { id, lat, lon } => {
                graph.add_node(id, GeoPoint::new(lat, lon));
            }
            FeedEvent::WayStarted { id } => {
                if let Some(prev) = &open {
                    return Err(GraphError::NestedWay { first: prev.source_id, second: id });
                }
                open = Some(OpenWay::new(id));
            }
            FeedEvent::WayNodeRef { node } => {
                let way = open.as_mut().ok_or(GraphError::OutsideWay("node ref"))?;
                let node_id = graph
                    .resolve_node(node)
                    .ok_or(GraphError::UndeclaredNode { way: way.source_id, node })?;
                way.nodes.push(node_id);
            }
            FeedEvent::WayTag { key, value } => {
                let way = open.as_mut().ok_or(GraphError::OutsideWay("tag"))?;
                way.tags.push((key, value));
            }
            FeedEvent::WayEnded => {
                let building = open.take().ok_or(GraphError::OutsideWay("way end"))?;
                let way = building.finalize(&graph)?;
                graph.insert_way(way);
            }
            FeedEvent::Meta { base_date } => {
                graph.base_date = Some(base_date);
            }
        }
    }

    if let Some(way) = open {
        return Err(GraphError::TruncatedFeed { way: way.source_id });
    }
    Ok(graph)
}

// ── Way under construction ────────────────────────────────────────────────────

struct OpenWay {
    source_id: i64,
    nodes:     Vec<NodeId>,
    tags:      Vec<(String, String)>,
}

impl OpenWay {
    fn new(source_id: i64) -> Self {
        Self { source_id, nodes: Vec::new(), tags: Vec::new() }
    }

    /// Apply the buffered tags in priority order, truncate the name, and
    /// compute the geodesic length.
    fn finalize(self, graph: &RouteGraph) -> GraphResult<Way> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyWay { way: self.source_id });
        }

        let mut name = DEFAULT_NAME.to_string();
        let mut flags = AccessFlags::default();

        for (_, value) in tags_named(&self.tags, "name") {
            name = strip_name(value);
        }
        for (key, value) in &self.tags {
            // Any language-specific name, but only while the placeholder holds.
            if key.starts_with("name:") && name == DEFAULT_NAME {
                name = strip_name(value);
            }
        }
        for (_, value) in tags_named(&self.tags, "ref") {
            name.push_str(" #");
            name.push_str(value);
        }
        for (key, value) in &self.tags {
            let flag = match key.as_str() {
                "hgv"           => &mut flags.hgv,
                "motorcar"      => &mut flags.car,
                "motor_vehicle" => &mut flags.vehicle,
                "foot"          => &mut flags.foot,
                _ => continue,
            };
            *flag = parse_access(self.source_id, key, value)?;
        }
        for (_, value) in tags_named(&self.tags, "ferry") {
            apply_ferry(&mut flags, value);
        }
        for (_, value) in tags_named(&self.tags, "route") {
            apply_route(self.source_id, &mut flags, value)?;
        }

        truncate_chars(&mut name, NAME_MAX_CHARS);
        let length_m = graph.path_length_m(&self.nodes);

        Ok(Way { source_id: self.source_id, name, nodes: self.nodes, length_m, flags })
    }
}

fn tags_named<'a>(
    tags: &'a [(String, String)],
    key: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    tags.iter()
        .filter(move |(k, _)| k == key)
        .map(|(k, v)| (k.as_str(), v.as_str()))
}

// ── Tag vocabularies ──────────────────────────────────────────────────────────

/// Closed tri-state vocabulary for access tag values.
///
/// Bare numbers (e.g. `foot=50`) count as an allowance.  Anything else is a
/// hard failure so new upstream values get a deliberate decision instead of
/// a silent misclassification.
fn parse_access(way: i64, key: &str, value: &str) -> GraphResult<Access> {
    match value {
        "yes" | "permissive" | "pemissive" | "designated" | "motor_vehicle" => Ok(Access::Yes),
        "no" | "private" => Ok(Access::No),
        "unknown" | "delivery" => Ok(Access::Unknown),
        v if v.parse::<i64>().is_ok() => Ok(Access::Yes),
        _ => Err(GraphError::UnknownAccessValue {
            way,
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// `ferry=` refinement table.  Road-class values imply traffic weight but
/// never override an explicit prior `yes`/`no`.
fn apply_ferry(flags: &mut AccessFlags, value: &str) {
    if value.starts_with("crui") {
        flags.cruise = Access::Yes;
    } else if value == "tourist" {
        flags.tourist = Access::Yes;
    } else {
        match value {
            "trunk" | "primary" | "secondary" => {
                flags.hgv.allow_unless_denied();
                flags.car.allow_unless_denied();
                flags.foot.allow_unless_denied();
            }
            "local" | "tertiary" | "express_boat" => {
                flags.hgv.deny_unless_allowed();
                flags.car.deny_unless_allowed();
                flags.foot.allow_unless_denied();
            }
            _ => {} // refinement only
        }
    }
}

/// `route=` must be one of the two route types this pipeline consolidates.
fn apply_route(way: i64, flags: &mut AccessFlags, value: &str) -> GraphResult<()> {
    match value {
        "cruise" => {
            flags.cruise = Access::Yes;
            Ok(())
        }
        "ferry" => Ok(()),
        _ => Err(GraphError::UnknownRouteType { way, value: value.to_string() }),
    }
}

// ── Name helpers ──────────────────────────────────────────────────────────────

/// Strip surrounding spaces, quotes, and dashes from a name value.
fn strip_name(value: &str) -> String {
    value
        .trim_matches(|c: char| matches!(c, ' ' | '"' | '\'' | '-'))
        .to_string()
}

/// Truncate to `max` characters on a char boundary.
fn truncate_chars(name: &mut String, max: usize) {
    if let Some((idx, _)) = name.char_indices().nth(max) {
        name.truncate(idx);
    }
}

//! The merge engine.
//!
//! Crowd-sourced ferry routes arrive fragmented: one logical route is often
//! mapped as several ways sharing a name and endpoints.  The engine visits
//! every node touched by more than one way and resolves the situation:
//! same-named ways that meet end-to-end are spliced into one, loops are
//! downgraded to tourist rides, forks joining a route's interior are
//! discarded, and anything else is counted as a mess and left alone.
//!
//! # Determinism
//!
//! Nodes are visited in ascending arena order and the canonical way at a
//! node is picked by a stable descending-length sort, so identical input
//! yields identical output and identical counters.
//!
//! # Termination
//!
//! Every action either removes a way outright or reduces the number of
//! distinct ways incident to the node, so the per-node fixpoint loop is
//! bounded; the global pass is bounded by the node count.

use std::fmt;

use sr_core::{Access, NodeId, WayId};
use sr_graph::RouteGraph;

// ── Stats ─────────────────────────────────────────────────────────────────────

/// Run-wide merge diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Same-named fragments spliced into a longer way.
    pub merged: u64,
    /// Fork events: a same-named way joined another's interior and was
    /// discarded (cascade removals are part of the same event).
    pub forked: u64,
    /// Shared nodes whose topology could not be resolved; the ways survive
    /// unmerged.
    pub messes: u64,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} merged, {} rejected forks, {} unresolved messes",
            self.merged, self.forked, self.messes
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Consolidate fragmented same-named ways in place.
///
/// Running this on an already-consolidated graph performs no merges and no
/// fork discards, and reports the same mess count.
pub fn consolidate(graph: &mut RouteGraph) -> MergeStats {
    let mut stats = MergeStats::default();
    for i in 0..graph.node_count() {
        consolidate_node(graph, NodeId(i as u32), &mut stats);
    }
    stats
}

// ── Per-node fixpoint ─────────────────────────────────────────────────────────

fn consolidate_node(graph: &mut RouteGraph, node: NodeId, stats: &mut MergeStats) {
    loop {
        sort_incident(graph, node);
        let incident = graph.node(node).incident.clone();
        if incident.len() <= 1 {
            return;
        }
        let primary = incident[0];

        // The longest way revisits this node — a loop.  Assume tour boat
        // unless the way already carries vehicle-grade evidence, and drop
        // the duplicate incidence (the way itself survives).
        if incident[1] == primary {
            if let Some(way) = graph.way_mut(primary) {
                let f = &mut way.flags;
                if !f.cruise.is_yes() && !f.hgv.is_yes() && !f.car.is_yes() {
                    f.tourist = Access::Yes;
                }
            }
            graph.node_mut(node).incident.remove(1);
            continue;
        }

        let mut unresolved = 0u64;
        let mut acted = false;
        for &other in &incident[1..] {
            if other == primary {
                continue; // stray duplicate incidence; never merge a way with itself
            }
            match classify_pair(graph, node, primary, other) {
                PairAction::Splice(kind) => {
                    splice(graph, primary, other, kind);
                    stats.merged += 1;
                    acted = true;
                    break;
                }
                PairAction::Fork => {
                    discard_cascade(graph, other);
                    stats.forked += 1;
                    acted = true;
                    break;
                }
                PairAction::Mess => unresolved += 1,
                PairAction::Skip => {}
            }
        }

        if !acted {
            // Quiescent pass: whatever is still here stays unresolved.
            stats.messes += unresolved;
            return;
        }
        // An action mutated the incidence list; re-sort and go again.
    }
}

/// Stable-sort a node's incidences by descending way length: the longest
/// way is the canonical merge target, ties keep feed order.
fn sort_incident(graph: &mut RouteGraph, node: NodeId) {
    let mut incident = std::mem::take(&mut graph.node_mut(node).incident);
    incident.sort_by(|&a, &b| {
        let la = graph.way(a).map_or(0.0, |w| w.length_m);
        let lb = graph.way(b).map_or(0.0, |w| w.length_m);
        lb.total_cmp(&la)
    });
    graph.node_mut(node).incident = incident;
}

// ── Adjacency classification ──────────────────────────────────────────────────

enum PairAction {
    Splice(SpliceKind),
    Fork,
    Mess,
    Skip,
}

enum SpliceKind {
    /// `other` starts where `primary` ends.
    Append,
    /// `other` ends where `primary` starts.
    Prepend,
    /// `other` ends where `primary` ends; reverse it, then append.
    AppendReversed,
}

fn classify_pair(graph: &RouteGraph, node: NodeId, primary: WayId, other: WayId) -> PairAction {
    let (Some(p), Some(o)) = (graph.way(primary), graph.way(other)) else {
        return PairAction::Skip;
    };
    if p.name != o.name {
        return PairAction::Skip;
    }

    if node == p.end() && node == o.start() {
        PairAction::Splice(SpliceKind::Append)
    } else if node == p.start() && node == o.end() {
        PairAction::Splice(SpliceKind::Prepend)
    } else if node == p.end() && node == o.end() {
        PairAction::Splice(SpliceKind::AppendReversed)
    } else if !p.is_endpoint(node) {
        // Joins the canonical way's interior: an alternate route mapped
        // under the same name.  Discard it.
        PairAction::Fork
    } else {
        // Interior to `other` with `primary` ending there, interior to
        // both, or a start-start coincidence.
        PairAction::Mess
    }
}

// ── Actions ───────────────────────────────────────────────────────────────────

/// Splice `other` into `primary` and retire it: absorb flags, re-point the
/// surviving incidences, and fully recompute the spliced length.
fn splice(graph: &mut RouteGraph, primary: WayId, other: WayId, kind: SpliceKind) {
    let Some(other_way) = graph.remove_way(other) else { return };

    for &n in &other_way.nodes {
        let incident = &mut graph.node_mut(n).incident;
        if !incident.contains(&primary) {
            incident.push(primary);
        }
    }

    if let Some(p) = graph.way_mut(primary) {
        match kind {
            SpliceKind::Append => {
                p.nodes.extend_from_slice(&other_way.nodes[1..]);
            }
            SpliceKind::Prepend => {
                let tail = p.nodes.split_off(1);
                let mut nodes = other_way.nodes.clone();
                nodes.extend(tail);
                p.nodes = nodes;
            }
            SpliceKind::AppendReversed => {
                p.nodes.extend(other_way.nodes.iter().rev().skip(1).copied());
            }
        }
        p.flags.absorb(&other_way.flags);
    }
    graph.recompute_length(primary);
}

/// Remove `start` and, through an explicit worklist, every way that forks
/// off an interior node of a removed way.
///
/// The worklist keeps cascade depth bounded by the live way count; a way
/// queued twice is a no-op on the second pop.
fn discard_cascade(graph: &mut RouteGraph, start: WayId) {
    let mut worklist = vec![start];
    while let Some(id) = worklist.pop() {
        let Some(way) = graph.remove_way(id) else { continue };
        if way.nodes.len() > 2 {
            for &n in &way.nodes[1..way.nodes.len() - 1] {
                worklist.extend(graph.node(n).incident.iter().copied());
            }
        }
    }
}

//! The `RouteGraph` arena — nodes, ways, and incidence bookkeeping.
//!
//! # Data layout
//!
//! Nodes and ways live in index-addressed arenas.  A `WayId` stays valid
//! for the whole run: removing a way tombstones its slot
//! (`Vec<Option<Way>>`) instead of shifting records, so ids held in
//! incidence lists or on a worklist never dangle into a reused slot.
//!
//! Each node keeps an ordered incidence list with one entry per traversal:
//! a way that revisits a node (a loop) appears once per visit, which the
//! merge engine's loop pruning consumes.  Splice-merging coalesces the
//! surviving way to a single entry per node.
//!
//! Iteration over nodes and ways is always by ascending arena index, so a
//! run over identical input produces identical output and diagnostics.

use rustc_hash::FxHashMap;

use sr_core::{GeoPoint, NodeId, WayId};

use crate::way::Way;

/// A geographic node plus back-references to the ways touching it.
#[derive(Clone, Debug)]
pub struct GeoNode {
    /// Upstream node id, diagnostic only.
    pub source_id: i64,
    pub pos:       GeoPoint,
    /// Ways touching this node, one entry per traversal.  Back-references
    /// only — ways are owned by the graph's way arena.
    pub incident:  Vec<WayId>,
}

/// The in-memory node/way graph threaded through ingestion, merging, and
/// export.  No module-level state: every phase receives this value.
#[derive(Debug)]
pub struct RouteGraph {
    nodes: Vec<GeoNode>,
    ways:  Vec<Option<Way>>,
    /// Upstream node id → arena id; used while resolving `WayNodeRef`s.
    source_index: FxHashMap<i64, NodeId>,
    /// Provenance date from the feed's `Meta` event.
    pub base_date: Option<String>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self {
            nodes:        Vec::new(),
            ways:         Vec::new(),
            source_index: FxHashMap::default(),
            base_date:    None,
        }
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Add a node and index it by its upstream id.  A re-declared id points
    /// the index at the newest record.
    pub fn add_node(&mut self, source_id: i64, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(GeoNode { source_id, pos, incident: Vec::new() });
        self.source_index.insert(source_id, id);
        id
    }

    /// Resolve an upstream node id to its arena id.
    pub fn resolve_node(&self, source_id: i64) -> Option<NodeId> {
        self.source_index.get(&source_id).copied()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &GeoNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut GeoNode {
        &mut self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in ascending arena order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    // ── Ways ──────────────────────────────────────────────────────────────

    /// Insert a finalized way, registering one incidence entry per node
    /// traversal.
    pub fn insert_way(&mut self, way: Way) -> WayId {
        let id = WayId(self.ways.len() as u32);
        for &node in &way.nodes {
            self.nodes[node.index()].incident.push(id);
        }
        self.ways.push(Some(way));
        id
    }

    /// The way in slot `id`, or `None` if it has been removed.
    #[inline]
    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways[id.index()].as_ref()
    }

    #[inline]
    pub fn way_mut(&mut self, id: WayId) -> Option<&mut Way> {
        self.ways[id.index()].as_mut()
    }

    /// Live ways in ascending `WayId` order.
    pub fn live_ways(&self) -> impl Iterator<Item = (WayId, &Way)> + '_ {
        self.ways
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|w| (WayId(i as u32), w)))
    }

    pub fn live_way_count(&self) -> usize {
        self.ways.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total way slots ever allocated, including tombstones.
    pub fn way_slot_count(&self) -> usize {
        self.ways.len()
    }

    /// Tombstone `id` and strip its incidences, returning the record.
    ///
    /// One incidence entry is removed per traversal in the way's node
    /// sequence, so a looping way leaves no stale entries behind.  Returns
    /// `None` if the slot was already tombstoned (harmless on a cascade
    /// worklist that queued the same way twice).
    pub fn remove_way(&mut self, id: WayId) -> Option<Way> {
        let way = self.ways[id.index()].take()?;
        for &node in &way.nodes {
            let incident = &mut self.nodes[node.index()].incident;
            if let Some(pos) = incident.iter().position(|&w| w == id) {
                incident.remove(pos);
            }
        }
        Some(way)
    }

    // ── Lengths ───────────────────────────────────────────────────────────

    /// Sum of consecutive geodesic distances along `path`.
    pub fn path_length_m(&self, path: &[NodeId]) -> f64 {
        path.windows(2)
            .map(|p| self.nodes[p[0].index()].pos.distance_m(self.nodes[p[1].index()].pos))
            .sum()
    }

    /// Recompute `length_m` of a way from scratch.
    ///
    /// Always a full re-sum — incremental arithmetic would compound float
    /// error across repeated merges.
    pub fn recompute_length(&mut self, id: WayId) {
        let sum = match self.ways[id.index()].as_ref() {
            Some(way) => self.path_length_m(&way.nodes),
            None => return,
        };
        if let Some(way) = self.ways[id.index()].as_mut() {
            way.length_m = sum;
        }
    }
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

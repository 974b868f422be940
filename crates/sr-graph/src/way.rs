//! The `Way` record — a named candidate route segment.

use sr_core::{AccessFlags, NodeId};

/// Placeholder for ways that carry no usable name tag.
pub const DEFAULT_NAME: &str = "Unnamed";

/// Display names are truncated to this many characters at finalization.
/// (The UTF-8 byte length may still be larger.)
pub const NAME_MAX_CHARS: usize = 128;

/// A named, ordered sequence of graph nodes with a computed geodesic length.
///
/// `nodes` is never empty while the way is live, and `length_m` always
/// equals the sum of consecutive geodesic distances along it — structural
/// mutations go through the graph, which recomputes the length in full.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Way {
    /// Upstream way id, kept for diagnostics only.
    pub source_id: i64,
    pub name:      String,
    pub nodes:     Vec<NodeId>,
    pub length_m:  f64,
    pub flags:     AccessFlags,
}

impl Way {
    /// First node of the way.
    #[inline]
    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    /// Last node of the way.
    #[inline]
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// `true` if `node` is the first or last node of the way.
    #[inline]
    pub fn is_endpoint(&self, node: NodeId) -> bool {
        self.start() == node || self.end() == node
    }
}

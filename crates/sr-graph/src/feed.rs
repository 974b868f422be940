//! Map-feature events consumed by ingestion.
//!
//! The feed models the upstream extract stage: XML/PBF tokenization happens
//! outside this workspace, and whatever produces the stream must declare
//! every node before the first way that references it.

/// One upstream map-feature event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedEvent {
    /// A geographic node and its position, in degrees.
    NodeDeclared { id: i64, lat: f64, lon: f64 },
    /// Opens a way definition; followed by its node refs and tags.
    WayStarted { id: i64 },
    /// Appends a previously declared node to the open way.
    WayNodeRef { node: i64 },
    /// A key/value tag on the open way.
    WayTag { key: String, value: String },
    /// Closes and finalizes the open way.
    WayEnded,
    /// Extract provenance date, echoed into the route-export header.
    Meta { base_date: String },
}

impl FeedEvent {
    /// Convenience constructor for tag events (the most common in tests).
    pub fn tag(key: &str, value: &str) -> Self {
        FeedEvent::WayTag { key: key.to_string(), value: value.to_string() }
    }
}

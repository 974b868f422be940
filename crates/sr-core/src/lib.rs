//! `sr-core` — foundational types for the searoutes pipeline.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `WayId`                                    |
//! | [`geo`]    | `GeoPoint`, spherical law-of-cosines distance        |
//! | [`access`] | `Access` tri-state, `AccessFlags`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod access;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use access::{Access, AccessFlags};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use ids::{NodeId, WayId};

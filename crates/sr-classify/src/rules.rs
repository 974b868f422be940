//! The classification decision table.
//!
//! Rules are evaluated in strict priority order; the first match wins.
//! Service-type markers (cruise, tourist) outrank access evidence, explicit
//! access evidence outranks length, and length alone decides only when the
//! tags say nothing usable.

use sr_core::AccessFlags;

use crate::category::Category;

// ── Thresholds ────────────────────────────────────────────────────────────────
// Plain constants, not derived values.  All comparisons are inclusive (`>=`).

/// Ways shorter than this never reach the export.  Low enough to keep
/// genuine short hops like the Woolwich ferry.
pub const LENGTH_CUTOFF_M: f64 = 100.0;

/// With no access evidence at all, routes at least this long count as
/// medium pedestrian ferries rather than small boats.
pub const PED_UNKNOWN_M: f64 = 1_000.0;

/// Explicitly foot-only routes at least this long are medium pedestrian
/// ferries.
pub const PED_MED_M: f64 = 2_000.0;

/// Assume a car ferry above this length.
pub const VEH_MED_M: f64 = 10_000.0;

/// Assume a heavy-goods-capable ferry above this length.
pub const VEH_BIG_M: f64 = 20_000.0;

// ── Decision table ────────────────────────────────────────────────────────────

/// Map a route's flags and geodesic length to its traffic category.
pub fn classify(flags: &AccessFlags, length_m: f64) -> Category {
    // 1–2. Service-type markers trump access evidence.
    if flags.cruise.is_yes() {
        return Category::Cruise;
    }
    if flags.tourist.is_yes() {
        return Category::Tourist;
    }

    // 3. Foot-only evidence: pedestrians allowed and no vehicle type is, or
    //    vehicles are explicitly shut out.
    let any_vehicle = flags.vehicle.is_yes() || flags.hgv.is_yes() || flags.car.is_yes();
    if (flags.foot.is_yes() && !any_vehicle) || flags.vehicle.is_no() {
        return if length_m >= PED_MED_M { Category::PedMed } else { Category::PedSml };
    }

    // 4. Explicit heavy-goods allowance.
    if flags.hgv.is_yes() {
        return if length_m >= VEH_BIG_M { Category::VehBig } else { Category::VehMed };
    }

    // 5. Heavy goods denied, or cars allowed with no word on heavy goods —
    //    either way it tops out at a car ferry.
    if flags.hgv.is_no() || flags.car.is_yes() {
        return if length_m >= VEH_MED_M { Category::VehMed } else { Category::VehSml };
    }

    // 6. Generic vehicle allowance, or pedestrians explicitly shut out.
    if flags.vehicle.is_yes() || flags.foot.is_no() {
        return if length_m >= VEH_BIG_M {
            Category::VehBig
        } else if length_m >= VEH_MED_M {
            Category::VehMed
        } else {
            Category::VehSml
        };
    }

    // 7. No usable evidence: bucket by length alone.
    if length_m >= VEH_BIG_M {
        Category::VehBig
    } else if length_m >= VEH_MED_M {
        Category::VehMed
    } else if length_m >= PED_UNKNOWN_M {
        Category::PedMed
    } else {
        Category::PedSml
    }
}

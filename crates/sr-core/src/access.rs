//! Tri-state access attributes.
//!
//! Crowd-sourced access tags are rarely complete: a way may say nothing
//! about heavy-goods traffic at all.  `Access` therefore distinguishes an
//! explicit `yes`/`no` from the tag simply being absent, and the refinement
//! helpers encode the "explicit wins" rule used when a `ferry=` road-class
//! value implies an allowance the mapper never stated outright.

/// A tri-state access attribute: explicitly allowed, explicitly denied, or
/// never stated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Access {
    #[inline]
    pub fn is_yes(self) -> bool {
        matches!(self, Access::Yes)
    }

    #[inline]
    pub fn is_no(self) -> bool {
        matches!(self, Access::No)
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Access::Unknown)
    }

    /// Raise to `Yes` unless explicitly denied.
    ///
    /// Used by road-class refinements: `ferry=primary` implies heavier
    /// traffic is allowed, but never overrides a mapper's explicit `no`.
    #[inline]
    pub fn allow_unless_denied(&mut self) {
        if !self.is_no() {
            *self = Access::Yes;
        }
    }

    /// Lower to `No` unless explicitly allowed — the dual of
    /// [`allow_unless_denied`](Self::allow_unless_denied).
    #[inline]
    pub fn deny_unless_allowed(&mut self) {
        if !self.is_yes() {
            *self = Access::No;
        }
    }

    /// Merge-OR used when one way absorbs another: `Yes` from either side
    /// wins, everything else keeps the current value.
    #[inline]
    pub fn absorb(&mut self, other: Access) {
        if other.is_yes() {
            *self = Access::Yes;
        }
    }

    /// Rendering used by the debug CSV dump: an unknown is an empty field.
    pub fn as_csv_field(self) -> &'static str {
        match self {
            Access::Yes     => "true",
            Access::No      => "false",
            Access::Unknown => "",
        }
    }
}

/// The full access-flag set carried by every way.
///
/// `cruise` and `tourist` are service-type markers; the other four are the
/// access attributes proper and drive vehicle/pedestrian classification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessFlags {
    pub cruise:  Access,
    pub tourist: Access,
    pub hgv:     Access,
    pub car:     Access,
    pub vehicle: Access,
    pub foot:    Access,
}

impl AccessFlags {
    /// Merge-OR every flag from `other` into `self`; `Yes` dominates.
    ///
    /// Applied when two fragments of one logical route are spliced: if any
    /// fragment allowed a traffic type, the merged route does.
    pub fn absorb(&mut self, other: &AccessFlags) {
        self.cruise.absorb(other.cruise);
        self.tourist.absorb(other.tourist);
        self.hgv.absorb(other.hgv);
        self.car.absorb(other.car);
        self.vehicle.absorb(other.vehicle);
        self.foot.absorb(other.foot);
    }

    /// `true` if no flag carries any evidence at all.
    pub fn all_unknown(&self) -> bool {
        self.cruise.is_unknown()
            && self.tourist.is_unknown()
            && self.hgv.is_unknown()
            && self.car.is_unknown()
            && self.vehicle.is_unknown()
            && self.foot.is_unknown()
    }
}

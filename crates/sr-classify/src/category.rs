//! Traffic categories assigned to consolidated routes.

/// The traffic type of a route, written as the first field of every route
/// block in the export.
///
/// The pedestrian/vehicle categories are size-bucketed: `Sml`/`Med`/`Big`
/// pick the scale of vessel serving the crossing, driven by route length
/// where the tags are silent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Cruise liner service.
    Cruise,
    /// Sightseeing or excursion boat.
    Tourist,
    /// Foot passengers only, short crossing.
    PedSml,
    /// Foot passengers only, longer crossing.
    PedMed,
    /// Small vehicle ferry.
    VehSml,
    /// Car ferry.
    VehMed,
    /// Heavy-goods-capable ferry.
    VehBig,
}

impl Category {
    /// Export token, e.g. `veh/med`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cruise  => "cruise",
            Category::Tourist => "tourist",
            Category::PedSml  => "ped/sml",
            Category::PedMed  => "ped/med",
            Category::VehSml  => "veh/sml",
            Category::VehMed  => "veh/med",
            Category::VehBig  => "veh/big",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Geographic coordinate type and geodesic distance.
//!
//! `GeoPoint` stores `f64` degrees: the route export renders 7 fractional
//! digits, which single precision cannot hold for longitudes past ~100°.

/// Earth radius in metres used for every geodesic length in the pipeline.
pub const EARTH_RADIUS_M: f64 = 6_378_145.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Spherical law-of-cosines great-circle distance in metres.
    ///
    /// Exactly equal coordinates return 0.  The cosine sum can round to just
    /// above 1 for near-coincident points, which would take `acos` outside
    /// its domain; that case also returns 0 rather than NaN.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if self.lat == other.lat && self.lon == other.lon {
            return 0.0;
        }
        let (a1, b1) = (self.lat.to_radians(), self.lon.to_radians());
        let (a2, b2) = (other.lat.to_radians(), other.lon.to_radians());
        let x = a1.cos() * b1.cos() * a2.cos() * b2.cos()
            + a1.cos() * b1.sin() * a2.cos() * b2.sin()
            + a1.sin() * a2.sin();
        if x >= 1.0 {
            return 0.0;
        }
        EARTH_RADIUS_M * x.acos()
    }
}

impl std::fmt::Display for GeoPoint {
    /// Fixed-width route-export form: width 11 latitude, width 12 longitude,
    /// 7 fractional digits each.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:11.7} {:12.7}", self.lat, self.lon)
    }
}

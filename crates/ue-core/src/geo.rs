//! Geographic coordinate types and distance helpers.
//!
//! `LngLat` uses `f64` in GeoJSON axis order (longitude first).  Two distance
//! measures coexist on purpose: `degree_distance` is the flat Euclidean
//! distance in degree space used by the proximity thresholds of the
//! generators, and `distance_km` is the haversine great-circle distance used
//! to bucket flow arcs by length.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate, serialised as a GeoJSON position `[lng, lat]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Both components finite and inside `[-180,180] × [-90,90]`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Euclidean distance in degrees.  Only meaningful at city scale.
    #[inline]
    pub fn degree_distance(self, other: LngLat) -> f64 {
        let dlng = other.lng - self.lng;
        let dlat = other.lat - self.lat;
        (dlng * dlng + dlat * dlat).sqrt()
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: LngLat) -> f64 {
        const R: f64 = 6_371.0; // mean Earth radius, km

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        2.0 * R * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Shift by `(dlng, dlat)` degrees.
    #[inline]
    pub fn offset(self, dlng: f64, dlat: f64) -> LngLat {
        LngLat::new(self.lng + dlng, self.lat + dlat)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`.
    #[inline]
    pub fn lerp(self, other: LngLat, t: f64) -> LngLat {
        LngLat::new(
            self.lng + (other.lng - self.lng) * t,
            self.lat + (other.lat - self.lat) * t,
        )
    }

    #[inline]
    pub fn to_position(self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        LngLat::new(lng, lat)
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lng, self.lat)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Viewport bounds of a prefecture plus its initial camera.
///
/// `center` is optional because catalogs loaded from JSON may omit it; the
/// generators treat a missing centre as malformed input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    #[serde(default)]
    pub center: Option<LngLat>,
    #[serde(default = "default_zoom")]
    pub default_zoom: f64,
}

fn default_zoom() -> f64 {
    10.0
}

impl Bounds {
    #[inline]
    pub fn contains(&self, p: LngLat) -> bool {
        (self.west..=self.east).contains(&p.lng) && (self.south..=self.north).contains(&p.lat)
    }

    /// `[west, south, east, north]`, the GeoJSON bbox order.
    pub fn bbox(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

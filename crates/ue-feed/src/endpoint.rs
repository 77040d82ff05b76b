//! Backend paths.

use std::fmt;

use ue_geojson::GeometryType;

/// One backend resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Weather,
    Accommodation     { prefecture: String },
    Mobility          { prefecture: String, city_only: bool },
    Events            { prefecture: String },
    Transit           { city: String },
    TourismFacilities { region: String },
    Consumption,
}

impl Endpoint {
    /// Path relative to the API base URL, query string included.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Weather                   => "/api/v1/weather/current".into(),
            Endpoint::Accommodation { prefecture } => {
                format!("/api/v1/real/accommodation/real/{prefecture}")
            }
            Endpoint::Mobility { prefecture, city_only } => {
                format!("/api/v1/real/mobility/real/{prefecture}?city_only={city_only}")
            }
            Endpoint::Events { prefecture }     => format!("/api/v1/real/events/real/{prefecture}"),
            Endpoint::Transit { city }          => format!("/api/v1/real/transport/gtfs/{city}"),
            Endpoint::TourismFacilities { region } => {
                format!("/api/v1/real/tourism/facilities/{region}")
            }
            Endpoint::Consumption               => "/api/v1/mobility/consumption".into(),
        }
    }

    /// Geometry built for plain records from this endpoint.
    pub fn geometry(&self) -> GeometryType {
        match self {
            Endpoint::Mobility { .. } | Endpoint::Transit { .. } => GeometryType::LineString,
            _ => GeometryType::Point,
        }
    }

    /// Properties every feature from this endpoint must carry.
    pub fn required_properties(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Weather                   => &[],
            Endpoint::Accommodation { .. }      => &["name", "capacity", "occupancy", "color"],
            Endpoint::Mobility { .. }           => &["name", "congestion", "speed", "particleCount", "color"],
            Endpoint::Events { .. }             => &["name", "impact_radius", "expected_attendance", "color"],
            Endpoint::Transit { .. }            => &["name", "congestion", "color"],
            Endpoint::TourismFacilities { .. }  => &["name", "color"],
            Endpoint::Consumption               => &["amount", "color"],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

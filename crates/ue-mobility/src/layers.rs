//! Mobility records → map-ready GeoJSON.

use serde_json::json;
use tracing::debug;

use ue_core::GenRng;
use ue_geojson::{
    collection, empty_collection, line_feature, point_feature, properties, with_id, Feature,
    FeatureCollection,
};

use crate::{
    arc_height, point_along, route_geometry, CongestionBand, CongestionPoint, FlowDirection,
    MobilityData, MobilityRoute,
};

/// Particle count range per flow.
pub const MIN_PARTICLES: u32 = 3;
pub const MAX_PARTICLES: u32 = 10;

/// The two map sources a mobility layer feeds.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLayers {
    /// Initial particle positions, evenly spread along each flow.
    pub particles: FeatureCollection,
    /// One `LineString` per drawable route.
    pub flows:     FeatureCollection,
}

impl Default for FlowLayers {
    fn default() -> Self {
        FlowLayers { particles: empty_collection(), flows: empty_collection() }
    }
}

impl FlowLayers {
    pub fn is_empty(&self) -> bool {
        self.flows.features.is_empty()
    }
}

/// Convert generated routes into flow lines and their initial particles.
///
/// Routes without drawable geometry are skipped.
pub fn to_flow_layers(data: &MobilityData, rng: &mut GenRng) -> FlowLayers {
    routes_to_layers(data.routes.iter().map(|r| (r, None)), rng)
}

/// Shared by the per-prefecture and inter-prefecture layers.  `daily_flows`
/// is attached as a property when known.
pub(crate) fn routes_to_layers<'a, I>(routes: I, rng: &mut GenRng) -> FlowLayers
where
    I: IntoIterator<Item = (&'a MobilityRoute, Option<u32>)>,
{
    let mut flows = Vec::new();
    let mut particles = Vec::new();

    for (route, daily_flows) in routes {
        let Some(geometry) = route_geometry(&route.points) else {
            debug!(route = %route.id, points = route.points.len(), "route has no drawable geometry");
            continue;
        };
        let particle_count = rng.gen_range(MIN_PARTICLES..=MAX_PARTICLES);
        let direction = if rng.gen_bool(0.5) { FlowDirection::Forward } else { FlowDirection::Reverse };
        let band = CongestionBand::from_congestion(route.congestion);

        let (first, last) = (route.points[0], route.points[route.points.len() - 1]);
        let height = if route.points.len() == 2 { arc_height(first, last) } else { 0.0 };

        let mut props = properties(json!({
            "id":            route.id,
            "name":          route.name,
            "type":          route.kind.label(),
            "category":      route.category,
            "congestion":    route.congestion,
            "speed":         route.flow_speed,
            "color":         band.core_color(),
            "particleCount": particle_count,
            "arcHeight":     height,
            "distanceKm":    first.distance_km(last),
            "flowDirection": direction.label(),
        }));
        if let Some(n) = daily_flows {
            props.insert("dailyFlows".to_owned(), json!(n));
        }

        for k in 0..particle_count {
            let t = f64::from(k) / f64::from(particle_count);
            let t = if direction == FlowDirection::Reverse { 1.0 - t } else { t };
            if let Some(pos) = point_along(&geometry, t) {
                particles.push(point_feature(pos, particle_properties(route, k, band)));
            }
        }
        flows.push(with_id(line_feature(&geometry, props), route.id.clone()));
    }

    FlowLayers { particles: collection(particles), flows: collection(flows) }
}

fn particle_properties(route: &MobilityRoute, index: u32, band: CongestionBand) -> ue_geojson::JsonObject {
    properties(json!({
        "routeId":       route.id,
        "particleIndex": index,
        "congestion":    route.congestion,
        "color":         band.core_color(),
        "glowColor":     band.glow_color(),
        "opacity":       1.0,
    }))
}

/// Congestion hubs as `Point` features.
pub fn congestion_to_collection(points: &[CongestionPoint]) -> FeatureCollection {
    let features: Vec<Feature> = points
        .iter()
        .map(|p| {
            let band = CongestionBand::from_congestion(p.level);
            point_feature(
                p.coordinates,
                properties(json!({
                    "name":   p.name,
                    "type":   p.kind.label(),
                    "level":  p.level,
                    "radius": p.radius,
                    "color":  band.core_color(),
                })),
            )
        })
        .collect();
    collection(features)
}

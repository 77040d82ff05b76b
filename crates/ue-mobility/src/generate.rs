//! Per-prefecture route and congestion generation.

use tracing::{debug, warn};

use ue_catalog::{City, Prefecture};
use ue_core::{CongestionKind, GenRng, RouteKind};

use crate::{CongestionPoint, MobilityData, MobilityRoute};

/// Cities above this population get the larger hub radii.
const LARGE_CITY_POPULATION: u32 = 200_000;

const HIGHWAY_CATEGORY: &str = "高速道路";

/// Routes and congestion hubs for `catalog`.
///
/// `None` or a catalog without bounds, centre or cities gives an empty
/// result and a warning.
pub fn generate_mobility(catalog: Option<&Prefecture>, rng: &mut GenRng) -> MobilityData {
    let Some(p) = catalog else {
        warn!("mobility generation without a prefecture catalog");
        return MobilityData::default();
    };
    if let Err(e) = p.checked_center() {
        warn!(error = %e, "mobility generation skipped");
        return MobilityData::default();
    }

    let mut routes = rail_routes(p, rng);
    routes.extend(highway_routes(p, rng));
    let congestion_points = congestion_points(p, rng);

    debug!(
        prefecture = %p.name,
        routes = routes.len(),
        hubs = congestion_points.len(),
        "mobility generated"
    );
    MobilityData { routes, congestion_points }
}

/// One route per consecutive station pair of every named line.
fn rail_routes(p: &Prefecture, rng: &mut GenRng) -> Vec<MobilityRoute> {
    let mut routes = Vec::new();
    for (li, line) in p.rail_lines.iter().enumerate() {
        let base = line.category.congestion_base();
        for (si, pair) in line.stations.windows(2).enumerate() {
            let jitter: f64 = rng.gen_range(-0.05..=0.10);
            let congestion = (base + jitter).clamp(0.0, 1.0);
            routes.push(MobilityRoute {
                id:         format!("{}-rail-{li}-{si}", p.name_en),
                name:       format!("{} {}–{}", line.name, pair[0].name, pair[1].name),
                kind:       line.kind,
                points:     vec![pair[0].coordinates, pair[1].coordinates],
                congestion,
                flow_speed: line.kind.base_speed() * (1.2 - 0.5 * congestion),
                category:   line.category.label().to_owned(),
            });
        }
    }
    routes
}

/// Complete graph of highway links between the catalog's cities.
fn highway_routes(p: &Prefecture, rng: &mut GenRng) -> Vec<MobilityRoute> {
    let cities: Vec<(&String, &City)> = p.cities.iter().collect();
    let mut routes = Vec::with_capacity(cities.len() * cities.len().saturating_sub(1) / 2);
    for (i, (ka, a)) in cities.iter().enumerate() {
        for (kb, b) in &cities[i + 1..] {
            let congestion: f64 = rng.gen_range(0.5..=0.9);
            routes.push(MobilityRoute {
                id:         format!("{}-hw-{ka}-{kb}", p.name_en),
                name:       format!("{}–{}", a.name, b.name),
                kind:       RouteKind::Highway,
                points:     vec![a.center, b.center],
                congestion,
                flow_speed: 0.2 + 2.0 * (1.0 - congestion),
                category:   HIGHWAY_CATEGORY.to_owned(),
            });
        }
    }
    routes
}

fn hub_radius(population: u32, kind: CongestionKind) -> f64 {
    let large = population > LARGE_CITY_POPULATION;
    match (kind, large) {
        (CongestionKind::Station, true)     => 800.0,
        (CongestionKind::Station, false)    => 400.0,
        (CongestionKind::Commercial, true)  => 500.0,
        (CongestionKind::Commercial, false) => 300.0,
    }
}

/// A station hub at every city centre and a commercial hub at every
/// catalogued commercial area.
fn congestion_points(p: &Prefecture, rng: &mut GenRng) -> Vec<CongestionPoint> {
    let mut points: Vec<CongestionPoint> = p
        .cities
        .values()
        .map(|city| CongestionPoint {
            coordinates: city.center,
            level:       rng.gen_range(0.6..=0.9),
            radius:      hub_radius(city.population, CongestionKind::Station),
            kind:        CongestionKind::Station,
            name:        format!("{}駅周辺", city.name.trim_end_matches('市')),
        })
        .collect();

    for area in &p.commercial_areas {
        let population = p.cities.get(&area.city).map_or(0, |c| c.population);
        points.push(CongestionPoint {
            coordinates: area.coordinates,
            level:       rng.gen_range(0.5..=0.85),
            radius:      hub_radius(population, CongestionKind::Commercial),
            kind:        CongestionKind::Commercial,
            name:        area.name.clone(),
        });
    }
    points
}

//! Consumption (spending) hotspots.
//!
//! The tourist-area multiplier and its proximity threshold are
//! product-tuned display constants with no real-world calibration.

use tracing::debug;

use ue_catalog::{Prefecture, TouristIndex};
use ue_core::{sample_around, ConsumptionCategory, DistrictKind, GenRng};

use crate::{usable, ConsumptionPoint};

/// Amount multiplier for points near a tourist landmark.
pub const TOURIST_MULTIPLIER: f64 = 20.0;

/// Euclidean degree distance that counts as "near" a tourist landmark.
pub const TOURIST_RADIUS_DEG: f64 = 0.01;

const SPREAD_DEG: f64 = 0.006;

/// Population that doubles the base spend.
const POPULATION_SCALE: f64 = 500_000.0;

/// Points in a district: `floor(5 + pop / 20 000 × 3)`, at least 10 in
/// major cities and 4 elsewhere.
pub fn consumption_count(district_population: u32, major_city: bool) -> usize {
    let floor = if major_city { 10 } else { 4 };
    let n = (5.0 + f64::from(district_population) / 20_000.0 * 3.0).floor() as usize;
    n.max(floor)
}

/// Spend for one point.  `jitter` is the `U[0.8, 1.2]` factor.
pub fn consumption_amount(
    category:        ConsumptionCategory,
    city_population: u32,
    jitter:          f64,
    tourist_area:    bool,
) -> f64 {
    let amount = category.base_amount() * (1.0 + f64::from(city_population) / POPULATION_SCALE) * jitter;
    if tourist_area { amount * TOURIST_MULTIPLIER } else { amount }
}

fn category_weights(kind: DistrictKind) -> &'static [(ConsumptionCategory, f64)] {
    use ConsumptionCategory::*;
    match kind {
        DistrictKind::Business => &[(Dining, 0.35), (Services, 0.30), (Shopping, 0.25), (Entertainment, 0.10)],
        DistrictKind::Tourist  => &[(Dining, 0.40), (Shopping, 0.35), (Entertainment, 0.15), (Services, 0.10)],
        DistrictKind::Mixed    => &[(Dining, 0.30), (Shopping, 0.30), (Entertainment, 0.20), (Services, 0.20)],
    }
}

pub fn generate_consumption(catalog: &Prefecture, rng: &mut GenRng) -> Vec<ConsumptionPoint> {
    if !usable(catalog, "consumption") {
        return Vec::new();
    }
    let tourist = TouristIndex::for_prefecture(catalog);

    let mut out = Vec::new();
    for (city_key, city) in &catalog.cities {
        for (di, district) in city.districts.iter().enumerate() {
            let count = consumption_count(district.population, city.is_major());
            let weights = category_weights(district.kind);

            for (i, at) in sample_around(district.center, count, SPREAD_DEG, rng).into_iter().enumerate() {
                let category = rng.weighted(weights).unwrap_or(ConsumptionCategory::Dining);
                let jitter: f64 = rng.gen_range(0.8..=1.2);
                let is_tourist_area = tourist.within(at, TOURIST_RADIUS_DEG);
                let (start, end) = category.peak_window();

                out.push(ConsumptionPoint {
                    id:          format!("con-{city_key}-{di}-{i}"),
                    coordinates: at,
                    amount:      consumption_amount(category, city.population, jitter, is_tourist_area).round(),
                    category,
                    area:        district.name.clone(),
                    city:        city.name.clone(),
                    is_tourist_area,
                    peak_time:   rng.gen_range(start..=end),
                });
            }
        }
    }

    debug!(
        prefecture = %catalog.name,
        count = out.len(),
        tourist = out.iter().filter(|c| c.is_tourist_area).count(),
        "consumption generated"
    );
    out
}

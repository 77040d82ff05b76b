//! SNS sentiment heatmap.

use tracing::debug;

use ue_catalog::Prefecture;
use ue_core::{sample_around, GenRng, HeatCategory};

use crate::{usable, HeatmapPoint};

const CITY_SPREAD_DEG: f64 = 0.015;
const SPOT_SPREAD_DEG: f64 = 0.003;
const POINTS_PER_SPOT: usize = 10;

const BASE_SENTIMENT: f64 = 0.6;
const TOURIST_BONUS: f64 = 0.1;
const SENTIMENT_SD: f64 = 0.15;

/// `floor(20 + pop / 50 000 × 5)` background points per city.
pub fn heatmap_count(city_population: u32) -> usize {
    (20.0 + f64::from(city_population) / 50_000.0 * 5.0).floor() as usize
}

fn sentiment(tourist: bool, rng: &mut GenRng) -> f64 {
    let (z, _) = rng.normal_pair();
    let base = if tourist { BASE_SENTIMENT + TOURIST_BONUS } else { BASE_SENTIMENT };
    (base + z * SENTIMENT_SD).clamp(0.0, 1.0)
}

pub fn generate_heatmap(catalog: &Prefecture, rng: &mut GenRng) -> Vec<HeatmapPoint> {
    if !usable(catalog, "heatmap") {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (city_key, city) in &catalog.cities {
        for at in sample_around(city.center, heatmap_count(city.population), CITY_SPREAD_DEG, rng) {
            let category = rng.choose(HeatCategory::ALL).copied().unwrap_or(HeatCategory::Sightseeing);
            out.push(HeatmapPoint {
                coordinates: at,
                intensity:   rng.gen_range(0.2..=1.0),
                sentiment:   sentiment(false, rng),
                category,
                city:        city.name.clone(),
            });
        }

        for spot in catalog.landmarks_in(city_key).filter(|l| l.tourist) {
            for at in sample_around(spot.coordinates, POINTS_PER_SPOT, SPOT_SPREAD_DEG, rng) {
                out.push(HeatmapPoint {
                    coordinates: at,
                    intensity:   rng.gen_range(0.2..=1.0),
                    sentiment:   sentiment(true, rng),
                    category:    HeatCategory::Sightseeing,
                    city:        city.name.clone(),
                });
            }
        }
    }

    debug!(prefecture = %catalog.name, count = out.len(), "heatmap generated");
    out
}

//! Landmarks: the catalog's named sites plus synthetic high-rises.

use tracing::debug;

use ue_catalog::Prefecture;
use ue_core::{sample_around, GenRng, LandmarkCategory};

use crate::{usable, Landmark};

const SPREAD_DEG: f64 = 0.01;
const MAX_HIGH_RISES: u32 = 8;

/// `min(1 + pop / 200 000, 8)` high-rises per city.
pub fn high_rise_count(city_population: u32) -> usize {
    (1 + city_population / 200_000).min(MAX_HIGH_RISES) as usize
}

pub fn generate_landmarks(catalog: &Prefecture, rng: &mut GenRng) -> Vec<Landmark> {
    if !usable(catalog, "landmarks") {
        return Vec::new();
    }

    let mut out: Vec<Landmark> = catalog
        .landmarks
        .iter()
        .enumerate()
        .map(|(i, site)| Landmark {
            id:          format!("lm-{}-{i}", catalog.name_en),
            coordinates: site.coordinates,
            name:        site.name.clone(),
            height:      site.height,
            city:        catalog.cities.get(&site.city).map_or_else(|| site.city.clone(), |c| c.name.clone()),
            category:    site.category,
        })
        .collect();

    for (city_key, city) in &catalog.cities {
        let count = high_rise_count(city.population);
        let max_height = 80.0 + f64::from(city.population) / 20_000.0;
        for (i, at) in sample_around(city.center, count, SPREAD_DEG, rng).into_iter().enumerate() {
            out.push(Landmark {
                id:          format!("bldg-{city_key}-{i}"),
                coordinates: at,
                name:        format!("{}ビル{}", city.name.trim_end_matches(['市', '区']), i + 1),
                height:      rng.gen_range(30.0..=max_height),
                city:        city.name.clone(),
                category:    LandmarkCategory::Building,
            });
        }
    }

    debug!(prefecture = %catalog.name, count = out.len(), "landmarks generated");
    out
}

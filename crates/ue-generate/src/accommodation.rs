//! Accommodation facilities.

use tracing::debug;

use ue_catalog::Prefecture;
use ue_core::{sample_around, AccommodationType, DistrictKind, GenRng};

use crate::{usable, AccommodationFacility};

const SPREAD_DEG: f64 = 0.008;

/// Facilities placed in a district: `floor(3 + pop / 10 000 × 2)`, at least
/// 6 in major cities and 2 elsewhere.
pub fn accommodation_count(district_population: u32, major_city: bool) -> usize {
    let floor = if major_city { 6 } else { 2 };
    let n = (3.0 + f64::from(district_population) / 10_000.0 * 2.0).floor() as usize;
    n.max(floor)
}

fn type_weights(kind: DistrictKind) -> &'static [(AccommodationType, f64)] {
    use AccommodationType::*;
    match kind {
        DistrictKind::Business => &[
            (BusinessHotel, 0.40),
            (CityHotel,     0.30),
            (CapsuleHotel,  0.20),
            (GuestHouse,    0.05),
            (Ryokan,        0.05),
        ],
        DistrictKind::Tourist => &[
            (Ryokan,        0.35),
            (GuestHouse,    0.25),
            (CityHotel,     0.20),
            (BusinessHotel, 0.15),
            (CapsuleHotel,  0.05),
        ],
        DistrictKind::Mixed => &[
            (BusinessHotel, 0.35),
            (CityHotel,     0.20),
            (GuestHouse,    0.20),
            (Ryokan,        0.15),
            (CapsuleHotel,  0.10),
        ],
    }
}

fn occupancy_base(kind: DistrictKind) -> f64 {
    match kind {
        DistrictKind::Business => 0.75,
        DistrictKind::Tourist  => 0.80,
        DistrictKind::Mixed    => 0.65,
    }
}

/// Facilities for every district of every city in `catalog`.
pub fn generate_accommodation(catalog: &Prefecture, rng: &mut GenRng) -> Vec<AccommodationFacility> {
    if !usable(catalog, "accommodation") {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (city_key, city) in &catalog.cities {
        for (di, district) in city.districts.iter().enumerate() {
            let count = accommodation_count(district.population, city.is_major());
            let weights = type_weights(district.kind);

            for (i, at) in sample_around(district.center, count, SPREAD_DEG, rng).into_iter().enumerate() {
                let kind = rng.weighted(weights).unwrap_or(AccommodationType::BusinessHotel);
                let scale: f64 = rng.gen_range(0.6..=1.4);
                let jitter: f64 = rng.gen_range(-0.10..=0.15);
                let capacity = (kind.base_capacity() * scale).round().max(1.0) as u32;
                let occupancy = (occupancy_base(district.kind) + jitter).clamp(0.5, 0.95);

                out.push(AccommodationFacility {
                    id:          format!("acc-{city_key}-{di}-{i}"),
                    coordinates: at,
                    name:        format!("{} {} {}", district.name, kind.label(), i + 1),
                    kind,
                    occupancy,
                    capacity,
                    city:        city.name.clone(),
                    district:    district.name.clone(),
                });
            }
        }
    }

    debug!(prefecture = %catalog.name, count = out.len(), "accommodation generated");
    out
}

//! Static prefecture tables.
//!
//! Coordinates are real-world WGS-84 positions; populations are rounded
//! census figures.  The tables are data, not logic: generators derive
//! everything else from them.

use std::sync::OnceLock;

use ue_core::{
    Bounds, DistrictKind, LandmarkCategory, LineCategory, LngLat, RouteKind, VenueKind,
};

use crate::{City, CommercialArea, District, LandmarkSite, Prefecture, RailLine, Station, Venue};

mod fukuoka;
mod hiroshima;
mod osaka;
mod tokyo;
mod yamaguchi;

static CATALOGS: OnceLock<Vec<Prefecture>> = OnceLock::new();

/// Every shipped prefecture, in display order.
pub fn all() -> &'static [Prefecture] {
    CATALOGS.get_or_init(|| {
        vec![
            hiroshima::prefecture(),
            yamaguchi::prefecture(),
            fukuoka::prefecture(),
            osaka::prefecture(),
            tokyo::prefecture(),
        ]
    })
}

/// Look up a prefecture by Japanese name (`広島県`), short name (`広島`) or
/// English key (`hiroshima`, case-insensitive).
pub fn by_name(name: &str) -> Option<&'static Prefecture> {
    let name = name.trim();
    all().iter().find(|p| {
        p.name == name
            || p.name_en.eq_ignore_ascii_case(name)
            || (!name.is_empty() && p.name.trim_end_matches(['県', '都', '府']) == name)
    })
}

// ── Table-building helpers ────────────────────────────────────────────────────

fn bounds(north: f64, south: f64, east: f64, west: f64, center: (f64, f64), zoom: f64) -> Bounds {
    Bounds {
        north,
        south,
        east,
        west,
        center: Some(LngLat::new(center.0, center.1)),
        default_zoom: zoom,
    }
}

fn district(name: &str, lng: f64, lat: f64, population: u32, kind: DistrictKind) -> District {
    District {
        name: name.to_owned(),
        center: LngLat::new(lng, lat),
        population,
        kind,
    }
}

fn city(
    name: &str,
    name_en: &str,
    center: (f64, f64),
    population: u32,
    districts: Vec<District>,
    tourist_spots: &[&str],
    commercial_areas: &[&str],
) -> City {
    City {
        name: name.to_owned(),
        name_en: name_en.to_owned(),
        center: LngLat::new(center.0, center.1),
        population,
        districts,
        tourist_spots: tourist_spots.iter().map(|s| (*s).to_owned()).collect(),
        commercial_areas: commercial_areas.iter().map(|s| (*s).to_owned()).collect(),
    }
}

fn landmark(
    name: &str,
    city: &str,
    lng: f64,
    lat: f64,
    height: f64,
    category: LandmarkCategory,
    tourist: bool,
) -> LandmarkSite {
    LandmarkSite {
        name: name.to_owned(),
        coordinates: LngLat::new(lng, lat),
        height,
        city: city.to_owned(),
        category,
        tourist,
    }
}

fn area(name: &str, city: &str, lng: f64, lat: f64) -> CommercialArea {
    CommercialArea {
        name: name.to_owned(),
        city: city.to_owned(),
        coordinates: LngLat::new(lng, lat),
    }
}

fn venue(name: &str, city: &str, lng: f64, lat: f64, capacity: u32, kind: VenueKind) -> Venue {
    Venue {
        name: name.to_owned(),
        city: city.to_owned(),
        coordinates: LngLat::new(lng, lat),
        capacity,
        kind,
    }
}

fn line(name: &str, kind: RouteKind, category: LineCategory, stations: &[(&str, f64, f64)]) -> RailLine {
    RailLine {
        name: name.to_owned(),
        kind,
        category,
        stations: stations
            .iter()
            .map(|&(n, lng, lat)| Station { name: n.to_owned(), coordinates: LngLat::new(lng, lat) })
            .collect(),
    }
}

fn keyed(cities: Vec<(&str, City)>) -> std::collections::BTreeMap<String, City> {
    cities.into_iter().map(|(k, c)| (k.to_owned(), c)).collect()
}

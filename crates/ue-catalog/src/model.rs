//! Catalog value types.
//!
//! All types deserialise from JSON (camelCase keys) so a deployment can ship
//! its own catalog.  Fields the generators depend on (`bounds`, `cities`) are
//! allowed to be absent at the type level; [`Prefecture::checked_center`] is
//! the single place that decides whether a catalog is usable.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use ue_core::{Bounds, DistrictKind, LandmarkCategory, LineCategory, LngLat, RouteKind, VenueKind};

use crate::{CatalogError, CatalogResult};

/// Cities above this population count as "major" and get higher floors.
pub const MAJOR_CITY_POPULATION: u32 = 500_000;

/// One prefecture's worth of static data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefecture {
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    /// Keyed by romanised city key (`hiroshima`, `fukuyama`, …).
    #[serde(default)]
    pub cities: BTreeMap<String, City>,
    #[serde(default)]
    pub landmarks: Vec<LandmarkSite>,
    #[serde(default)]
    pub commercial_areas: Vec<CommercialArea>,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub rail_lines: Vec<RailLine>,
}

impl Prefecture {
    /// Parse a catalog from JSON.
    pub fn from_json_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The catalog's centre, or why the catalog can't seed generation.
    pub fn checked_center(&self) -> CatalogResult<LngLat> {
        let bounds = self
            .bounds
            .as_ref()
            .ok_or_else(|| CatalogError::MissingBounds(self.name.clone()))?;
        let center = bounds
            .center
            .ok_or_else(|| CatalogError::MissingCenter(self.name.clone()))?;
        if self.cities.is_empty() {
            return Err(CatalogError::NoCities(self.name.clone()));
        }
        Ok(center)
    }

    pub fn total_population(&self) -> u64 {
        self.cities.values().map(|c| u64::from(c.population)).sum()
    }

    /// Landmarks that count as tourist attractions.
    pub fn tourist_landmarks(&self) -> impl Iterator<Item = &LandmarkSite> + '_ {
        self.landmarks.iter().filter(|l| l.tourist)
    }

    /// Landmarks sited in the city with key `city_key`.
    pub fn landmarks_in<'a>(&'a self, city_key: &'a str) -> impl Iterator<Item = &'a LandmarkSite> + 'a {
        self.landmarks.iter().filter(move |l| l.city == city_key)
    }

    /// Commercial areas sited in the city with key `city_key`.
    pub fn commercial_areas_in<'a>(
        &'a self,
        city_key: &'a str,
    ) -> impl Iterator<Item = &'a CommercialArea> + 'a {
        self.commercial_areas.iter().filter(move |a| a.city == city_key)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub name_en: String,
    pub center: LngLat,
    pub population: u32,
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub tourist_spots: Vec<String>,
    #[serde(default)]
    pub commercial_areas: Vec<String>,
}

impl City {
    #[inline]
    pub fn is_major(&self) -> bool {
        self.population > MAJOR_CITY_POPULATION
    }

    /// Sum of district populations.  Only loosely tracks `population`.
    pub fn district_population(&self) -> u64 {
        self.districts.iter().map(|d| u64::from(d.population)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub center: LngLat,
    pub population: u32,
    pub kind: DistrictKind,
}

/// A named landmark with real-world coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSite {
    pub name: String,
    pub coordinates: LngLat,
    /// Height in metres, used for 3-D extrusion.
    pub height: f64,
    /// Key of the city the landmark belongs to.
    pub city: String,
    pub category: LandmarkCategory,
    /// Counts for the tourist-area consumption multiplier.
    pub tourist: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommercialArea {
    pub name: String,
    pub city: String,
    pub coordinates: LngLat,
}

/// An event venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub coordinates: LngLat,
    /// Maximum attendance.
    pub capacity: u32,
    pub kind: VenueKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinates: LngLat,
}

/// A named rail or subway line as an ordered station list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RailLine {
    pub name: String,
    pub kind: RouteKind,
    pub category: LineCategory,
    pub stations: Vec<Station>,
}

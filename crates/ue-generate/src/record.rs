//! Generated entity records.
//!
//! Field names (and therefore GeoJSON property names) follow the dashboard's
//! wire format, which mixes `snake_case` and `camelCase`.

use serde::{Deserialize, Serialize};
use serde_json::json;

use ue_core::{
    AccommodationType, ConsumptionCategory, EventCategory, HeatCategory, LandmarkCategory,
    LngLat, SentimentBucket,
};
use ue_geojson::{point_feature, properties, with_id, Feature, ToFeature};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccommodationFacility {
    pub id:          String,
    pub coordinates: LngLat,
    pub name:        String,
    #[serde(rename = "type")]
    pub kind:        AccommodationType,
    /// In `[0.5, 0.95]`.
    pub occupancy:   f64,
    pub capacity:    u32,
    pub city:        String,
    pub district:    String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPoint {
    pub id:              String,
    pub coordinates:     LngLat,
    pub amount:          f64,
    pub category:        ConsumptionCategory,
    pub area:            String,
    pub city:            String,
    #[serde(rename = "isTouristArea")]
    pub is_tourist_area: bool,
    /// Hour of day, `0..=23`.
    pub peak_time:       u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id:          String,
    pub coordinates: LngLat,
    pub name:        String,
    /// Metres.
    pub height:      f64,
    pub city:        String,
    pub category:    LandmarkCategory,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id:                  String,
    pub coordinates:         LngLat,
    pub name:                String,
    pub category:            EventCategory,
    pub icon:                String,
    /// Metres.
    pub impact_radius:       f64,
    pub expected_attendance: u32,
    pub city:                String,
    /// `YYYY-MM-DD`.
    pub date:                String,
}

/// Sentiment is kept as a raw score; bucketing happens when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub coordinates: LngLat,
    pub intensity:   f64,
    pub sentiment:   f64,
    pub category:    HeatCategory,
    pub city:        String,
}

impl HeatmapPoint {
    pub fn bucket(&self) -> SentimentBucket {
        SentimentBucket::from_score(self.sentiment)
    }
}

// ── GeoJSON ───────────────────────────────────────────────────────────────────

impl ToFeature for AccommodationFacility {
    fn to_feature(&self) -> Feature {
        let props = properties(json!({
            "id":        self.id,
            "name":      self.name,
            "type":      self.kind.label(),
            "occupancy": self.occupancy,
            "capacity":  self.capacity,
            "city":      self.city,
            "district":  self.district,
            "color":     self.kind.color(),
        }));
        with_id(point_feature(self.coordinates, props), self.id.clone())
    }
}

impl ToFeature for ConsumptionPoint {
    fn to_feature(&self) -> Feature {
        let props = properties(json!({
            "id":            self.id,
            "amount":        self.amount,
            "category":      self.category.label(),
            "area":          self.area,
            "city":          self.city,
            "isTouristArea": self.is_tourist_area,
            "peak_time":     self.peak_time,
            "color":         self.category.color(),
        }));
        with_id(point_feature(self.coordinates, props), self.id.clone())
    }
}

impl ToFeature for Landmark {
    fn to_feature(&self) -> Feature {
        let props = properties(json!({
            "id":       self.id,
            "name":     self.name,
            "height":   self.height,
            "city":     self.city,
            "category": self.category.label(),
            "color":    self.category.color(),
        }));
        with_id(point_feature(self.coordinates, props), self.id.clone())
    }
}

impl ToFeature for Event {
    fn to_feature(&self) -> Feature {
        let props = properties(json!({
            "id":                  self.id,
            "name":                self.name,
            "category":            self.category.label(),
            "icon":                self.icon,
            "impact_radius":       self.impact_radius,
            "expected_attendance": self.expected_attendance,
            "city":                self.city,
            "date":                self.date,
            "color":               self.category.color(),
        }));
        with_id(point_feature(self.coordinates, props), self.id.clone())
    }
}

impl ToFeature for HeatmapPoint {
    fn to_feature(&self) -> Feature {
        let bucket = self.bucket();
        point_feature(
            self.coordinates,
            properties(json!({
                "intensity":       self.intensity,
                "sentiment":       self.sentiment,
                "sentiment_label": bucket.label(),
                "category":        self.category.label(),
                "city":            self.city,
                "color":           bucket.color(),
            })),
        )
    }
}

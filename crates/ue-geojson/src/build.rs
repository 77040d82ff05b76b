//! Feature builders and coordinate accessors.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use ue_core::LngLat;

/// Domain records that render as a single GeoJSON feature.
pub trait ToFeature {
    fn to_feature(&self) -> Feature;
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox:            None,
        geometry:        Some(Geometry::new(value)),
        id:              None,
        properties:      Some(properties),
        foreign_members: None,
    }
}

/// A `Point` feature.
pub fn point_feature(p: LngLat, properties: JsonObject) -> Feature {
    feature(Value::Point(p.to_position()), properties)
}

/// A `LineString` feature through `points`, in order.
pub fn line_feature(points: &[LngLat], properties: JsonObject) -> Feature {
    let coords = points.iter().map(|p| p.to_position()).collect();
    feature(Value::LineString(coords), properties)
}

/// Attach a string id.
pub fn with_id(mut feature: Feature, id: impl Into<String>) -> Feature {
    feature.id = Some(Id::String(id.into()));
    feature
}

pub fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection { bbox: None, features, foreign_members: None }
}

pub fn empty_collection() -> FeatureCollection {
    collection(Vec::new())
}

pub fn to_collection<T: ToFeature>(items: &[T]) -> FeatureCollection {
    collection(items.iter().map(ToFeature::to_feature).collect())
}

/// Position of a `Point` feature.
pub fn point_coordinates(feature: &Feature) -> Option<LngLat> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(p) if p.len() >= 2 => Some(LngLat::new(p[0], p[1])),
        _ => None,
    }
}

/// Vertices of a `LineString` feature.
pub fn line_coordinates(feature: &Feature) -> Option<Vec<LngLat>> {
    match &feature.geometry.as_ref()?.value {
        Value::LineString(ls) => ls
            .iter()
            .map(|p| (p.len() >= 2).then(|| LngLat::new(p[0], p[1])))
            .collect(),
        _ => None,
    }
}

/// Convert a `json!({...})` object into a property map.  Anything other
/// than an object gives an empty map.
pub fn properties(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(map) => map,
        _ => JsonObject::new(),
    }
}

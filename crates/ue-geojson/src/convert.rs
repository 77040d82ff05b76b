//! Arbitrary JSON → valid `FeatureCollection`.
//!
//! Accepted shapes:
//!
//! * a `FeatureCollection` (or any object with a `features` array),
//! * a single `Feature`,
//! * an array of records or features,
//! * an object wrapping any of the above under `data`.
//!
//! Records are plain objects; their position is looked up under a fixed key
//! list (see [`GeometryType::coordinate_keys`]) and may be a `[lng, lat]`
//! array or a `{lng|lon|longitude, lat|latitude}` object.  Every other key
//! becomes a property.  Anything that cannot be turned into a valid feature
//! is dropped with a debug log line.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue, Value};
use tracing::debug;

use crate::build::{collection, empty_collection};
use crate::sanitize::sanitize_properties;
use crate::validate::{validate_coordinates, validate_feature, validate_line_string};

/// Geometry built for plain records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    LineString,
}

impl GeometryType {
    /// Record keys searched, in order, for the geometry.
    pub fn coordinate_keys(self) -> &'static [&'static str] {
        match self {
            GeometryType::Point => &["coordinates", "coordinate", "location", "center", "position"],
            GeometryType::LineString => &["coordinates", "points", "path"],
        }
    }
}

const LNG_KEYS: &[&str] = &["lng", "lon", "longitude"];
const LAT_KEYS: &[&str] = &["lat", "latitude"];

/// Normalise `data` into a valid collection of features.
///
/// Surviving features have their properties sanitised against `required`.
/// Never fails: unrecognised input yields an empty collection.
pub fn to_valid_geojson(
    data: &JsonValue,
    geometry: GeometryType,
    required: &[&str],
) -> FeatureCollection {
    let raw = candidates(data);
    let total = raw.len();

    let features: Vec<Feature> = raw
        .into_iter()
        .filter_map(|item| to_feature(item, geometry))
        .filter(validate_feature)
        .map(|mut f| {
            let props = f.properties.get_or_insert_with(JsonObject::new);
            sanitize_properties(props, required);
            f
        })
        .collect();

    if features.len() < total {
        debug!(dropped = total - features.len(), kept = features.len(), "invalid features dropped");
    }
    if features.is_empty() {
        return empty_collection();
    }
    collection(features)
}

/// Unwrap the container shapes down to a flat list of items.
fn candidates(data: &JsonValue) -> Vec<&JsonValue> {
    match data {
        JsonValue::Array(items) => items.iter().collect(),
        JsonValue::Object(obj) => {
            if let Some(JsonValue::Array(features)) = obj.get("features") {
                features.iter().collect()
            } else if is_feature(obj) {
                vec![data]
            } else if let Some(inner) = obj.get("data") {
                candidates(inner)
            } else {
                debug!("unrecognised GeoJSON payload shape");
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn is_feature(obj: &JsonObject) -> bool {
    obj.get("type").and_then(JsonValue::as_str) == Some("Feature")
}

fn to_feature(item: &JsonValue, geometry: GeometryType) -> Option<Feature> {
    let obj = item.as_object()?;
    if is_feature(obj) {
        return match serde_json::from_value::<Feature>(item.clone()) {
            Ok(f) => Some(f),
            Err(e) => {
                debug!(error = %e, "unparseable feature");
                None
            }
        };
    }
    record_to_feature(obj, geometry)
}

/// Build a feature from a plain record.
fn record_to_feature(obj: &JsonObject, geometry: GeometryType) -> Option<Feature> {
    let (consumed, value): (Vec<&str>, Value) = match geometry {
        GeometryType::Point => {
            let (keys, pos) = find_point(obj)?;
            if !validate_coordinates(&pos) {
                return None;
            }
            (keys, Value::Point(pos))
        }
        GeometryType::LineString => {
            let (key, line) = geometry
                .coordinate_keys()
                .iter()
                .find_map(|&k| obj.get(k).and_then(parse_line).map(|l| (k, l)))?;
            if !validate_line_string(&line) {
                return None;
            }
            (vec![key], Value::LineString(line))
        }
    };

    let id = match obj.get("id") {
        Some(JsonValue::String(s)) => Some(Id::String(s.clone())),
        Some(JsonValue::Number(n)) => Some(Id::Number(n.clone())),
        _ => None,
    };

    let properties: JsonObject = obj
        .iter()
        .filter(|(k, _)| !consumed.contains(&k.as_str()) && k.as_str() != "geometry")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Some(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Locate a point position in a record.  Falls back to top-level
/// `lng`/`lat` style keys when none of the coordinate keys match.
fn find_point(obj: &JsonObject) -> Option<(Vec<&'static str>, Vec<f64>)> {
    for &key in GeometryType::Point.coordinate_keys() {
        if let Some(pos) = obj.get(key).and_then(parse_position) {
            return Some((vec![key], pos));
        }
    }
    let lng_key = LNG_KEYS.iter().copied().find(|k| obj.contains_key(*k))?;
    let lat_key = LAT_KEYS.iter().copied().find(|k| obj.contains_key(*k))?;
    let lng = as_f64(obj.get(lng_key)?)?;
    let lat = as_f64(obj.get(lat_key)?)?;
    Some((vec![lng_key, lat_key], vec![lng, lat]))
}

fn as_f64(v: &JsonValue) -> Option<f64> {
    match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `[lng, lat(, alt)]` or `{lng|lon|longitude, lat|latitude}`.
fn parse_position(v: &JsonValue) -> Option<Vec<f64>> {
    match v {
        JsonValue::Array(items) if items.len() >= 2 => {
            items.iter().map(JsonValue::as_f64).collect()
        }
        JsonValue::Object(obj) => {
            let lng = LNG_KEYS.iter().find_map(|k| obj.get(*k)).and_then(as_f64)?;
            let lat = LAT_KEYS.iter().find_map(|k| obj.get(*k)).and_then(as_f64)?;
            Some(vec![lng, lat])
        }
        _ => None,
    }
}

fn parse_line(v: &JsonValue) -> Option<Vec<Vec<f64>>> {
    v.as_array()?.iter().map(parse_position).collect()
}

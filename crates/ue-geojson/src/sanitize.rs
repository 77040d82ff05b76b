//! Property defaulting and numeric coercion.
//!
//! Map layers read paint values straight out of feature properties, so a
//! missing `radius` or a `"12"` string where a number is expected breaks the
//! layer.  `sanitize_properties` fills required keys from a fixed default
//! table and forces the known numeric keys to JSON numbers.

use geojson::{JsonObject, JsonValue};
use serde_json::Number;

/// Default value of a property when it is required but missing.
#[derive(Copy, Clone, Debug, PartialEq)]
enum PropertyDefault {
    Number(f64),
    Text(&'static str),
}

const PROPERTY_DEFAULTS: &[(&str, PropertyDefault)] = &[
    ("radius",              PropertyDefault::Number(10.0)),
    ("height",              PropertyDefault::Number(20.0)),
    ("intensity",           PropertyDefault::Number(0.5)),
    ("opacity",             PropertyDefault::Number(1.0)),
    ("weight",              PropertyDefault::Number(1.0)),
    ("congestion",          PropertyDefault::Number(0.5)),
    ("speed",               PropertyDefault::Number(1.0)),
    ("particleCount",       PropertyDefault::Number(3.0)),
    ("level",               PropertyDefault::Number(0.5)),
    ("sentiment",           PropertyDefault::Number(0.5)),
    ("amount",              PropertyDefault::Number(0.0)),
    ("capacity",            PropertyDefault::Number(1.0)),
    ("occupancy",           PropertyDefault::Number(0.5)),
    ("impact_radius",       PropertyDefault::Number(100.0)),
    ("expected_attendance", PropertyDefault::Number(1.0)),
    ("color",               PropertyDefault::Text("#FFFFFF")),
    ("name",                PropertyDefault::Text("")),
];

/// Property names that are always coerced to JSON numbers when present.
pub const NUMERIC_PROPERTIES: &[&str] = &[
    "radius",
    "height",
    "intensity",
    "opacity",
    "weight",
    "congestion",
    "speed",
    "particleCount",
    "level",
    "sentiment",
    "amount",
    "capacity",
    "occupancy",
    "impact_radius",
    "expected_attendance",
];

fn lookup(key: &str) -> Option<PropertyDefault> {
    PROPERTY_DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, d)| d)
}

fn number(v: f64) -> JsonValue {
    Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
}

/// The default for `key`, or `None` when the table has no entry.
pub fn default_for(key: &str) -> Option<JsonValue> {
    lookup(key).map(|d| match d {
        PropertyDefault::Number(n) => number(n),
        PropertyDefault::Text(s) => JsonValue::String(s.to_owned()),
    })
}

/// `value` as a finite number, if it can be read as one.
fn coerce_number(value: &JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::Number(_) => Some(value.clone()),
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(number),
        JsonValue::Bool(b) => Some(number(if *b { 1.0 } else { 0.0 })),
        _ => None,
    }
}

/// Fill missing/null `required` keys from the default table, then coerce
/// every present numeric key.
///
/// Required keys without a table entry are left alone.  Applying the
/// function twice gives the same result as applying it once.
pub fn sanitize_properties(props: &mut JsonObject, required: &[&str]) {
    for &key in required {
        let missing = props.get(key).is_none_or(JsonValue::is_null);
        if missing {
            match default_for(key) {
                Some(v) => {
                    props.insert(key.to_owned(), v);
                }
                None => tracing::trace!(key, "required property has no default"),
            }
        }
    }

    for &key in NUMERIC_PROPERTIES {
        let Some(value) = props.get(key) else { continue };
        let coerced = coerce_number(value).or_else(|| default_for(key));
        if let Some(v) = coerced {
            props.insert(key.to_owned(), v);
        }
    }
}

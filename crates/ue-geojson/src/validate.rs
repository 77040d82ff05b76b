//! Geometry validity checks.

use geojson::{Feature, Value};

/// A GeoJSON position is valid when longitude and latitude are finite and
/// inside `[-180,180] × [-90,90]`.  An optional third (altitude) component
/// must be finite.
pub fn validate_coordinates(position: &[f64]) -> bool {
    match position {
        [lng, lat, rest @ ..] => {
            lng.is_finite()
                && lat.is_finite()
                && (-180.0..=180.0).contains(lng)
                && (-90.0..=90.0).contains(lat)
                && rest.len() <= 1
                && rest.iter().all(|v| v.is_finite())
        }
        _ => false,
    }
}

/// At least two positions, each individually valid.
pub fn validate_line_string(positions: &[Vec<f64>]) -> bool {
    positions.len() >= 2 && positions.iter().all(|p| validate_coordinates(p))
}

/// Closed ring of at least four valid positions.
fn validate_ring(ring: &[Vec<f64>]) -> bool {
    ring.len() >= 4
        && ring.iter().all(|p| validate_coordinates(p))
        && ring.first() == ring.last()
}

fn validate_value(value: &Value) -> bool {
    match value {
        Value::Point(p) => validate_coordinates(p),
        Value::MultiPoint(ps) => !ps.is_empty() && ps.iter().all(|p| validate_coordinates(p)),
        Value::LineString(ls) => validate_line_string(ls),
        Value::MultiLineString(mls) => !mls.is_empty() && mls.iter().all(|l| validate_line_string(l)),
        Value::Polygon(rings) => !rings.is_empty() && rings.iter().all(|r| validate_ring(r)),
        Value::MultiPolygon(polys) => {
            !polys.is_empty()
                && polys.iter().all(|rings| !rings.is_empty() && rings.iter().all(|r| validate_ring(r)))
        }
        Value::GeometryCollection(geoms) => {
            !geoms.is_empty() && geoms.iter().all(|g| validate_value(&g.value))
        }
    }
}

/// A feature is valid when it has a geometry and that geometry is valid.
pub fn validate_feature(feature: &Feature) -> bool {
    feature
        .geometry
        .as_ref()
        .is_some_and(|g| validate_value(&g.value))
}

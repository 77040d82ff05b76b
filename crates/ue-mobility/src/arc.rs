//! Flow-arc geometry.
//!
//! Arcs are cubic Bezier curves whose two inner control points sit at a
//! quarter and three quarters of the chord, lifted perpendicular to it by
//! `arc_height`.  All arithmetic is in degree space.

use ue_core::LngLat;

/// Segments per arc; an arc therefore has `ARC_SEGMENTS + 1` points.
pub const ARC_SEGMENTS: usize = 50;

const HEIGHT_RATIO: f64 = 0.3;
const MAX_HEIGHT_DEG: f64 = 0.5;

/// Control-point lift for an arc from `a` to `b`, capped at 0.5°.
pub fn arc_height(a: LngLat, b: LngLat) -> f64 {
    (a.degree_distance(b) * HEIGHT_RATIO).min(MAX_HEIGHT_DEG)
}

/// The 51-point Bezier arc from `a` to `b` (both endpoints included).
pub fn arc_points(a: LngLat, b: LngLat) -> Vec<LngLat> {
    let dx = b.lng - a.lng;
    let dy = b.lat - a.lat;
    let len = a.degree_distance(b);
    let h = arc_height(a, b);

    // Unit normal to the chord; zero for a degenerate chord.
    let (nx, ny) = if len > 0.0 { (-dy / len, dx / len) } else { (0.0, 0.0) };

    let c1 = LngLat::new(a.lng + dx * 0.25 + nx * h, a.lat + dy * 0.25 + ny * h);
    let c2 = LngLat::new(a.lng + dx * 0.75 + nx * h, a.lat + dy * 0.75 + ny * h);

    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f64 / ARC_SEGMENTS as f64;
            let u = 1.0 - t;
            let w0 = u * u * u;
            let w1 = 3.0 * u * u * t;
            let w2 = 3.0 * u * t * t;
            let w3 = t * t * t;
            LngLat::new(
                w0 * a.lng + w1 * c1.lng + w2 * c2.lng + w3 * b.lng,
                w0 * a.lat + w1 * c1.lat + w2 * c2.lat + w3 * b.lat,
            )
        })
        .collect()
}

/// Render geometry for a route: two points become an arc, longer polylines
/// pass through, shorter input has none.
pub fn route_geometry(points: &[LngLat]) -> Option<Vec<LngLat>> {
    match points {
        [a, b] => Some(arc_points(*a, *b)),
        _ if points.len() > 2 => Some(points.to_vec()),
        _ => None,
    }
}

/// Position at fraction `t ∈ [0, 1]` of the way along `points`, measured in
/// vertex steps (every segment counts equally).
pub fn point_along(points: &[LngLat], t: f64) -> Option<LngLat> {
    match points {
        [] => None,
        [only] => Some(*only),
        _ => {
            let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
            let scaled = t * (points.len() - 1) as f64;
            let i = (scaled.floor() as usize).min(points.len() - 2);
            Some(points[i].lerp(points[i + 1], scaled - i as f64))
        }
    }
}

//! Builds a [`FlowAnimator`] from the GeoJSON the mobility layer produced.

use std::collections::HashMap;

use serde_json::json;
use tracing::debug;

use ue_geojson::{line_coordinates, point_coordinates, Feature, FeatureCollection, JsonObject};
use ue_mobility::{FlowDirection, MAX_PARTICLES, MIN_PARTICLES};

use crate::{FlowAnimator, FlowArc, FlowError, FlowResult, Hub};

const DEFAULT_PHASE_STEP: f64 = 0.002;

/// Accepted `speed` range; external values outside it are clamped.
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 5.0;

/// Arc styling keys copied onto the flow lines by [`seed_flows`].
const ARC_STYLE_KEYS: [&str; 2] = ["distanceGroup", "glowOpacity"];

/// Fluent builder for [`FlowAnimator`].
///
/// | Method           | Default                    |
/// |------------------|----------------------------|
/// | `.hubs(fc)`      | no hubs                    |
/// | `.phase_step(s)` | 0.002 (must be in `(0, 1)`) |
///
/// Flow features that are not `LineString`s with at least two vertices are
/// skipped; missing numeric properties fall back to the sanitizer defaults.
/// `particleCount` is rounded and clamped to `MIN_PARTICLES..=MAX_PARTICLES`
/// and `speed` to `MIN_SPEED..=MAX_SPEED`, whatever the source sent.
pub struct AnimatorBuilder<'a> {
    flows: &'a FeatureCollection,
    hubs:  Option<&'a FeatureCollection>,
    step:  f64,
}

impl<'a> AnimatorBuilder<'a> {
    pub fn new(flows: &'a FeatureCollection) -> Self {
        Self { flows, hubs: None, step: DEFAULT_PHASE_STEP }
    }

    pub fn hubs(mut self, hubs: &'a FeatureCollection) -> Self {
        self.hubs = Some(hubs);
        self
    }

    pub fn phase_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn build(self) -> FlowResult<FlowAnimator> {
        if !(self.step > 0.0 && self.step < 1.0) {
            return Err(FlowError::Config(format!("phase step {} outside (0, 1)", self.step)));
        }

        let arcs: Vec<FlowArc> = self.flows.features.iter().filter_map(arc_from_feature).collect();
        let hubs: Vec<Hub> = self
            .hubs
            .map(|fc| fc.features.iter().filter_map(hub_from_feature).collect())
            .unwrap_or_default();

        let skipped = self.flows.features.len() - arcs.len();
        if skipped > 0 {
            debug!(skipped, "flow features without usable geometry");
        }
        Ok(FlowAnimator::new(arcs, hubs, self.step))
    }
}

fn number(props: Option<&JsonObject>, key: &str, default: f64) -> f64 {
    props
        .and_then(|p| p.get(key))
        .and_then(serde_json::Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn text<'p>(props: Option<&'p JsonObject>, key: &str) -> Option<&'p str> {
    props.and_then(|p| p.get(key)).and_then(serde_json::Value::as_str)
}

fn particle_count(props: Option<&JsonObject>) -> u32 {
    let (lo, hi) = (f64::from(MIN_PARTICLES), f64::from(MAX_PARTICLES));
    number(props, "particleCount", lo).round().clamp(lo, hi) as u32
}

fn arc_from_feature(f: &Feature) -> Option<FlowArc> {
    let points = line_coordinates(f)?;
    if points.len() < 2 {
        return None;
    }
    let props = f.properties.as_ref();
    let id = text(props, "id").map(str::to_owned).unwrap_or_default();
    let distance_km = match props.and_then(|p| p.get("distanceKm")).and_then(serde_json::Value::as_f64) {
        Some(km) if km.is_finite() => km,
        _ => points[0].distance_km(points[points.len() - 1]),
    };
    Some(FlowArc {
        id,
        particle_count: particle_count(props),
        speed:          number(props, "speed", 1.0).clamp(MIN_SPEED, MAX_SPEED),
        congestion:     number(props, "congestion", 0.5).clamp(0.0, 1.0),
        direction:      text(props, "flowDirection").map_or(FlowDirection::Forward, FlowDirection::from_label),
        distance_km,
        points,
    })
}

fn hub_from_feature(f: &Feature) -> Option<Hub> {
    let coordinates = point_coordinates(f)?;
    let props = f.properties.as_ref();
    Some(Hub {
        name: text(props, "name").unwrap_or_default().to_owned(),
        coordinates,
        level: number(props, "level", 0.5).clamp(0.0, 1.0),
        radius: number(props, "radius", 10.0),
    })
}

/// Prepare freshly loaded flow lines for drawing before the animation runs.
///
/// Lines without an `id` are given `flow-<n>`.  Each drawable line gets the
/// frame-0 `distanceGroup` and `glowOpacity` (and `color` when absent), and
/// the returned particles are frame 0's, so every particle's `routeId`
/// names one of the lines.
pub fn seed_flows(flows: &mut FeatureCollection) -> FeatureCollection {
    for (n, feature) in flows.features.iter_mut().enumerate() {
        let props = feature.properties.get_or_insert_with(JsonObject::new);
        if text(Some(&*props), "id").is_none_or(str::is_empty) {
            props.insert("id".to_owned(), json!(format!("flow-{n}")));
        }
    }

    let arcs: Vec<FlowArc> = flows.features.iter().filter_map(arc_from_feature).collect();
    let frame = FlowAnimator::new(arcs, Vec::new(), DEFAULT_PHASE_STEP).frame();

    let styles: HashMap<String, JsonObject> = frame
        .arcs
        .features
        .into_iter()
        .filter_map(|f| {
            let props = f.properties?;
            let id = text(Some(&props), "id")?.to_owned();
            Some((id, props))
        })
        .collect();

    for feature in &mut flows.features {
        let Some(props) = feature.properties.as_mut() else { continue };
        let Some(style) = text(Some(&*props), "id").and_then(|id| styles.get(id)) else { continue };
        for key in ARC_STYLE_KEYS {
            if let Some(v) = style.get(key) {
                props.insert(key.to_owned(), v.clone());
            }
        }
        if !props.contains_key("color") {
            if let Some(color) = style.get("color") {
                props.insert("color".to_owned(), color.clone());
            }
        }
    }

    frame.particles
}

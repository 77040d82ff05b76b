//! Layer toggles and the map state they imply.

use serde::{Deserialize, Serialize};
use serde_json::json;
use ue_map::{DesiredState, FlowSources, LayerKind, LayerSpec};

use crate::{LayerId, PrefectureView};

/// Which data layers are switched on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerToggles {
    pub accommodation: bool,
    pub consumption:   bool,
    pub landmarks:     bool,
    pub events:        bool,
    pub heatmap:       bool,
    pub mobility:      bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            accommodation: true,
            consumption:   false,
            landmarks:     true,
            events:        true,
            heatmap:       true,
            mobility:      true,
        }
    }
}

impl LayerToggles {
    pub fn all_off() -> Self {
        Self {
            accommodation: false,
            consumption:   false,
            landmarks:     false,
            events:        false,
            heatmap:       false,
            mobility:      false,
        }
    }

    pub fn is_on(&self, layer: LayerId) -> bool {
        match layer {
            LayerId::Accommodation => self.accommodation,
            LayerId::Consumption   => self.consumption,
            LayerId::Landmarks     => self.landmarks,
            LayerId::Events        => self.events,
            LayerId::Heatmap       => self.heatmap,
            LayerId::Mobility      => self.mobility,
        }
    }

    pub fn set(&mut self, layer: LayerId, on: bool) {
        let slot = match layer {
            LayerId::Accommodation => &mut self.accommodation,
            LayerId::Consumption   => &mut self.consumption,
            LayerId::Landmarks     => &mut self.landmarks,
            LayerId::Events        => &mut self.events,
            LayerId::Heatmap       => &mut self.heatmap,
            LayerId::Mobility      => &mut self.mobility,
        };
        *slot = on;
    }

    /// Flip `layer`, returning its new state.
    pub fn toggle(&mut self, layer: LayerId) -> bool {
        let on = !self.is_on(layer);
        self.set(layer, on);
        on
    }
}

/// Source id for a data layer.  Mobility uses [`FlowSources`].
pub fn source_id(layer: LayerId) -> &'static str {
    match layer {
        LayerId::Accommodation => "accommodation",
        LayerId::Consumption   => "consumption",
        LayerId::Landmarks     => "landmarks",
        LayerId::Events        => "events",
        LayerId::Heatmap       => "heatmap",
        LayerId::Mobility      => "flow-arcs",
    }
}

/// Every source is always present; toggles only flip layer visibility, so a
/// toggle never re-uploads data.
pub fn desired_state(view: &PrefectureView, toggles: &LayerToggles) -> DesiredState {
    let flow = FlowSources::default();
    let mut state = DesiredState::new();

    for layer in LayerId::ALL {
        let visible = toggles.is_on(layer);
        match layer {
            LayerId::Mobility => {
                state = state
                    .source(flow.arcs.clone(), view.flows.flows.clone())
                    .source(flow.particles.clone(), view.flows.particles.clone())
                    .source(flow.hubs.clone(), view.hubs.clone())
                    .layer(flow_arcs(&flow.arcs).visible(visible))
                    .layer(flow_particles(&flow.particles).visible(visible))
                    .layer(flow_hubs(&flow.hubs).visible(visible));
            }
            _ => {
                let source = source_id(layer);
                state = state
                    .source(source, view.collection(layer).clone())
                    .layer(data_layer(layer, source).visible(visible));
            }
        }
    }
    state
}

// ── Layer styles ──────────────────────────────────────────────────────────────

fn data_layer(layer: LayerId, source: &str) -> LayerSpec {
    let id = format!("{source}-layer");
    match layer {
        LayerId::Heatmap => LayerSpec::new(id, source, LayerKind::Heatmap)
            .paint("heatmap-weight", json!(["get", "intensity"]))
            .paint("heatmap-radius", json!(30))
            .paint("heatmap-opacity", json!(0.7)),
        LayerId::Events => LayerSpec::new(id, source, LayerKind::Symbol)
            .layout("text-field", json!(["get", "icon"]))
            .layout("text-size", json!(20))
            .interactive(),
        LayerId::Landmarks => LayerSpec::new(id, source, LayerKind::Circle)
            .paint("circle-radius", json!(["interpolate", ["linear"], ["get", "height"], 30, 6, 300, 14]))
            .paint("circle-color", json!(["get", "color"]))
            .interactive(),
        LayerId::Consumption => LayerSpec::new(id, source, LayerKind::Circle)
            .paint("circle-radius", json!(["interpolate", ["linear"], ["get", "amount"], 0, 3, 100000, 12]))
            .paint("circle-color", json!(["get", "color"]))
            .paint("circle-opacity", json!(0.8))
            .interactive(),
        LayerId::Accommodation => LayerSpec::new(id, source, LayerKind::Circle)
            .paint("circle-radius", json!(["interpolate", ["linear"], ["get", "capacity"], 10, 4, 500, 12]))
            .paint("circle-color", json!(["get", "color"]))
            .interactive(),
        LayerId::Mobility => LayerSpec::new(id, source, LayerKind::Circle)
            .paint("circle-color", json!(["get", "color"])),
    }
}

fn flow_arcs(source: &str) -> LayerSpec {
    LayerSpec::new("flow-arcs-layer", source, LayerKind::Line)
        .paint("line-color", json!(["get", "color"]))
        .paint("line-width", json!(["interpolate", ["linear"], ["get", "congestion"], 0, 1, 1, 4]))
        .paint("line-opacity", json!(["get", "glowOpacity"]))
        .layout("line-cap", json!("round"))
        .interactive()
}

fn flow_particles(source: &str) -> LayerSpec {
    LayerSpec::new("flow-particles-layer", source, LayerKind::Circle)
        .paint("circle-radius", json!(3))
        .paint("circle-color", json!(["get", "coreColor"]))
        .paint("circle-opacity", json!(["get", "opacity"]))
}

fn flow_hubs(source: &str) -> LayerSpec {
    LayerSpec::new("flow-hubs-layer", source, LayerKind::Circle)
        .paint("circle-radius", json!(["/", ["get", "radius"], 40]))
        .paint("circle-color", json!(["get", "color"]))
        .paint("circle-opacity", json!(["get", "opacity"]))
        .interactive()
}

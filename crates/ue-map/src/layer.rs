//! Desired map state.

use std::collections::BTreeMap;

use serde_json::json;
use ue_geojson::{FeatureCollection, JsonObject, JsonValue};

/// Renderer layer types the dashboard uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Circle,
    Line,
    Fill,
    FillExtrusion,
    Heatmap,
    Symbol,
}

impl LayerKind {
    /// Renderer type string.
    pub fn type_name(self) -> &'static str {
        match self {
            LayerKind::Circle        => "circle",
            LayerKind::Line          => "line",
            LayerKind::Fill          => "fill",
            LayerKind::FillExtrusion => "fill-extrusion",
            LayerKind::Heatmap       => "heatmap",
            LayerKind::Symbol        => "symbol",
        }
    }
}

/// One map layer as it should appear.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec {
    pub id:          String,
    pub source:      String,
    pub kind:        LayerKind,
    pub paint:       JsonObject,
    pub layout:      JsonObject,
    pub visible:     bool,
    /// Bind click / hover handlers.
    pub interactive: bool,
}

impl LayerSpec {
    pub fn new(id: impl Into<String>, source: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id:          id.into(),
            source:      source.into(),
            kind,
            paint:       JsonObject::new(),
            layout:      JsonObject::new(),
            visible:     true,
            interactive: false,
        }
    }

    pub fn paint(mut self, name: &str, value: JsonValue) -> Self {
        self.paint.insert(name.to_owned(), value);
        self
    }

    pub fn layout(mut self, name: &str, value: JsonValue) -> Self {
        self.layout.insert(name.to_owned(), value);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Layout `visibility` value for `visible`.
    pub fn visibility_value(visible: bool) -> JsonValue {
        json!(if visible { "visible" } else { "none" })
    }
}

/// The full set of sources and layers the map should show.
///
/// Layers are kept in draw order (first is bottom-most).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DesiredState {
    pub sources: BTreeMap<String, FeatureCollection>,
    pub layers:  Vec<LayerSpec>,
}

impl DesiredState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, id: impl Into<String>, data: FeatureCollection) -> Self {
        self.sources.insert(id.into(), data);
        self
    }

    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn find_layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id == id)
    }
}

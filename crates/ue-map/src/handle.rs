//! The renderer capability interface.

use std::fmt;

use ue_geojson::{FeatureCollection, JsonValue};

use crate::{LayerSpec, MapResult};

/// Pointer events a layer can be bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapEvent {
    Click,
    MouseEnter,
    MouseLeave,
    MoveEnd,
}

impl MapEvent {
    /// Events bound on every interactive layer (popups and hover cursor).
    pub const INTERACTIVE: [MapEvent; 3] = [MapEvent::Click, MapEvent::MouseEnter, MapEvent::MouseLeave];

    pub fn name(self) -> &'static str {
        match self {
            MapEvent::Click      => "click",
            MapEvent::MouseEnter => "mouseenter",
            MapEvent::MouseLeave => "mouseleave",
            MapEvent::MoveEnd    => "moveend",
        }
    }
}

impl fmt::Display for MapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the engine needs from a map renderer.
///
/// Sources and layers are addressed by string id.  Source data is always
/// replaced wholesale.
pub trait MapHandle {
    fn add_source(&mut self, id: &str, data: &FeatureCollection) -> MapResult<()>;
    fn set_source_data(&mut self, id: &str, data: &FeatureCollection) -> MapResult<()>;
    fn remove_source(&mut self, id: &str) -> MapResult<()>;
    fn has_source(&self, id: &str) -> bool;

    fn add_layer(&mut self, layer: &LayerSpec) -> MapResult<()>;
    fn remove_layer(&mut self, id: &str) -> MapResult<()>;
    fn has_layer(&self, id: &str) -> bool;

    fn set_paint_property(&mut self, layer: &str, name: &str, value: &JsonValue) -> MapResult<()>;
    fn set_layout_property(&mut self, layer: &str, name: &str, value: &JsonValue) -> MapResult<()>;

    /// Subscribe the engine's handler for `event` on `layer`.
    fn on(&mut self, event: MapEvent, layer: &str) -> MapResult<()>;
    fn off(&mut self, event: MapEvent, layer: &str) -> MapResult<()>;
}

//! A map that lives entirely in memory.

use std::collections::{BTreeMap, BTreeSet};

use ue_geojson::{FeatureCollection, JsonObject, JsonValue};

use crate::{LayerKind, LayerSpec, MapError, MapEvent, MapHandle, MapResult};

/// A layer as the in-memory renderer holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryLayer {
    pub source:  String,
    pub kind:    LayerKind,
    pub paint:   JsonObject,
    pub layout:  JsonObject,
    pub visible: bool,
}

/// [`MapHandle`] that behaves like a real renderer: duplicate adds and
/// missing ids produce the same error messages, and nothing works until
/// the style has loaded.
#[derive(Debug)]
pub struct InMemoryMap {
    style_loaded:   bool,
    sources:        BTreeMap<String, FeatureCollection>,
    source_updates: BTreeMap<String, u64>,
    layers:         BTreeMap<String, MemoryLayer>,
    order:          Vec<String>,
    handlers:       BTreeSet<(MapEvent, String)>,
    calls:          u64,
}

impl Default for InMemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMap {
    /// A map whose style has already loaded.
    pub fn new() -> Self {
        Self {
            style_loaded:   true,
            sources:        BTreeMap::new(),
            source_updates: BTreeMap::new(),
            layers:         BTreeMap::new(),
            order:          Vec::new(),
            handlers:       BTreeSet::new(),
            calls:          0,
        }
    }

    /// A map still loading its style; every call fails transiently.
    pub fn loading() -> Self {
        Self { style_loaded: false, ..Self::new() }
    }

    pub fn finish_loading(&mut self) {
        self.style_loaded = true;
    }

    pub fn source(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id)
    }

    /// Number of `set_source_data` calls on `id`.
    pub fn source_updates(&self, id: &str) -> u64 {
        self.source_updates.get(id).copied().unwrap_or(0)
    }

    pub fn layer(&self, id: &str) -> Option<&MemoryLayer> {
        self.layers.get(id)
    }

    /// Layer ids in draw order.
    pub fn layer_order(&self) -> &[String] {
        &self.order
    }

    pub fn is_bound(&self, event: MapEvent, layer: &str) -> bool {
        self.handlers.contains(&(event, layer.to_owned()))
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Total calls received, failed ones included.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    fn enter(&mut self) -> MapResult<()> {
        self.calls += 1;
        if self.style_loaded {
            Ok(())
        } else {
            Err(MapError::Renderer("style is not done loading".into()))
        }
    }

    fn layer_mut(&mut self, id: &str) -> MapResult<&mut MemoryLayer> {
        self.layers
            .get_mut(id)
            .ok_or_else(|| MapError::Renderer(format!("layer '{id}' does not exist")))
    }
}

impl MapHandle for InMemoryMap {
    fn add_source(&mut self, id: &str, data: &FeatureCollection) -> MapResult<()> {
        self.enter()?;
        if self.sources.contains_key(id) {
            return Err(MapError::Renderer(format!("source '{id}' already exists")));
        }
        self.sources.insert(id.to_owned(), data.clone());
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: &FeatureCollection) -> MapResult<()> {
        self.enter()?;
        let slot = self
            .sources
            .get_mut(id)
            .ok_or_else(|| MapError::Renderer(format!("source '{id}' not found")))?;
        *slot = data.clone();
        *self.source_updates.entry(id.to_owned()).or_default() += 1;
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> MapResult<()> {
        self.enter()?;
        if let Some((layer, _)) = self.layers.iter().find(|(_, l)| l.source == id) {
            return Err(MapError::Renderer(format!("source '{id}' is used by layer '{layer}'")));
        }
        self.sources
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MapError::Renderer(format!("source '{id}' does not exist")))
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> MapResult<()> {
        self.enter()?;
        if self.layers.contains_key(&layer.id) {
            return Err(MapError::Renderer(format!("layer '{}' already exists", layer.id)));
        }
        if !self.sources.contains_key(&layer.source) {
            return Err(MapError::MissingSource { layer: layer.id.clone(), source_id: layer.source.clone() });
        }
        self.layers.insert(layer.id.clone(), MemoryLayer {
            source:  layer.source.clone(),
            kind:    layer.kind,
            paint:   layer.paint.clone(),
            layout:  layer.layout.clone(),
            visible: layer.visible,
        });
        self.order.push(layer.id.clone());
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> MapResult<()> {
        self.enter()?;
        if self.layers.remove(id).is_none() {
            return Err(MapError::Renderer(format!("layer '{id}' does not exist")));
        }
        self.order.retain(|l| l != id);
        self.handlers.retain(|(_, l)| l != id);
        Ok(())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn set_paint_property(&mut self, layer: &str, name: &str, value: &JsonValue) -> MapResult<()> {
        self.enter()?;
        self.layer_mut(layer)?.paint.insert(name.to_owned(), value.clone());
        Ok(())
    }

    fn set_layout_property(&mut self, layer: &str, name: &str, value: &JsonValue) -> MapResult<()> {
        self.enter()?;
        let l = self.layer_mut(layer)?;
        if name == "visibility" {
            l.visible = value.as_str() != Some("none");
        } else {
            l.layout.insert(name.to_owned(), value.clone());
        }
        Ok(())
    }

    fn on(&mut self, event: MapEvent, layer: &str) -> MapResult<()> {
        self.enter()?;
        if !self.layers.contains_key(layer) {
            return Err(MapError::Renderer(format!("layer '{layer}' does not exist")));
        }
        self.handlers.insert((event, layer.to_owned()));
        Ok(())
    }

    fn off(&mut self, event: MapEvent, layer: &str) -> MapResult<()> {
        self.enter()?;
        self.handlers.remove(&(event, layer.to_owned()));
        Ok(())
    }
}

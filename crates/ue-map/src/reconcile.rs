//! Diff desired state against applied state and emit the delta.

use tracing::{debug, warn};
use ue_geojson::{FeatureCollection, JsonValue};

use crate::{tolerate, DesiredState, LayerSpec, MapEvent, MapHandle, MapResult};

/// One renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOp {
    AddSource     { id: String, data: FeatureCollection },
    SetSourceData { id: String, data: FeatureCollection },
    RemoveSource  { id: String },
    AddLayer(LayerSpec),
    RemoveLayer   { id: String },
    SetPaint      { layer: String, name: String, value: JsonValue },
    SetLayout     { layer: String, name: String, value: JsonValue },
    Bind          { event: MapEvent, layer: String },
    Unbind        { event: MapEvent, layer: String },
}

impl MapOp {
    /// Issue this op against `map`.
    pub fn run<M: MapHandle + ?Sized>(&self, map: &mut M) -> MapResult<()> {
        match self {
            MapOp::AddSource { id, data }          => map.add_source(id, data),
            MapOp::SetSourceData { id, data }      => map.set_source_data(id, data),
            MapOp::RemoveSource { id }             => map.remove_source(id),
            MapOp::AddLayer(layer)                 => map.add_layer(layer),
            MapOp::RemoveLayer { id }              => map.remove_layer(id),
            MapOp::SetPaint { layer, name, value } => map.set_paint_property(layer, name, value),
            MapOp::SetLayout { layer, name, value } => map.set_layout_property(layer, name, value),
            MapOp::Bind { event, layer }           => map.on(*event, layer),
            MapOp::Unbind { event, layer }         => map.off(*event, layer),
        }
    }
}

/// Remembers what was last applied so each call issues only the delta.
#[derive(Debug, Default)]
pub struct Reconciler {
    applied: DesiredState,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// State as of the last successful [`apply`](Self::apply).
    pub fn applied(&self) -> &DesiredState {
        &self.applied
    }

    /// Forget the applied state, e.g. after the map style was reloaded.
    pub fn reset(&mut self) {
        self.applied = DesiredState::default();
    }

    /// Compute the ops that take the map from the applied state to `desired`.
    ///
    /// Order: stale layers, stale sources, new or changed sources, then
    /// layers in draw order.  Layers never outlive the source they draw.
    pub fn plan(&self, desired: &DesiredState) -> Vec<MapOp> {
        let mut ops = Vec::new();
        let prev = &self.applied;

        // ── Removals ──────────────────────────────────────────────────────────
        for old in &prev.layers {
            let keep = desired.find_layer(&old.id).is_some_and(|new| !needs_replace(old, new))
                && desired.sources.contains_key(&old.source);
            if !keep {
                unbind(&mut ops, old);
                ops.push(MapOp::RemoveLayer { id: old.id.clone() });
            }
        }
        for id in prev.sources.keys() {
            if !desired.sources.contains_key(id) {
                ops.push(MapOp::RemoveSource { id: id.clone() });
            }
        }

        // ── Sources ───────────────────────────────────────────────────────────
        for (id, data) in &desired.sources {
            match prev.sources.get(id) {
                None => ops.push(MapOp::AddSource { id: id.clone(), data: data.clone() }),
                Some(old) if old != data => {
                    ops.push(MapOp::SetSourceData { id: id.clone(), data: data.clone() });
                }
                Some(_) => {}
            }
        }

        // ── Layers ────────────────────────────────────────────────────────────
        for new in &desired.layers {
            if !desired.sources.contains_key(&new.source) {
                warn!(layer = %new.id, source = %new.source, "layer skipped, source not in desired state");
                continue;
            }
            match prev.find_layer(&new.id).filter(|old| !needs_replace(old, new)) {
                None => {
                    ops.push(MapOp::AddLayer(new.clone()));
                    bind(&mut ops, new);
                }
                Some(old) => diff_layer(&mut ops, old, new),
            }
        }

        ops
    }

    /// Plan and run against `map`.
    ///
    /// Transient renderer errors are tolerated.  On any other error the
    /// applied state is left untouched so the next call retries the delta.
    /// Returns the number of ops issued.
    pub fn apply<M: MapHandle + ?Sized>(&mut self, map: &mut M, desired: &DesiredState) -> MapResult<usize> {
        let ops = self.plan(desired);
        for op in &ops {
            tolerate(op.run(map))?;
        }
        debug!(ops = ops.len(), layers = desired.layers.len(), "map reconciled");
        self.applied = desired.clone();
        Ok(ops.len())
    }
}

/// Layer type and source binding cannot be changed in place.
fn needs_replace(old: &LayerSpec, new: &LayerSpec) -> bool {
    old.kind != new.kind || old.source != new.source
}

fn bind(ops: &mut Vec<MapOp>, layer: &LayerSpec) {
    if layer.interactive {
        for event in MapEvent::INTERACTIVE {
            ops.push(MapOp::Bind { event, layer: layer.id.clone() });
        }
    }
}

fn unbind(ops: &mut Vec<MapOp>, layer: &LayerSpec) {
    if layer.interactive {
        for event in MapEvent::INTERACTIVE {
            ops.push(MapOp::Unbind { event, layer: layer.id.clone() });
        }
    }
}

fn diff_layer(ops: &mut Vec<MapOp>, old: &LayerSpec, new: &LayerSpec) {
    if old.visible != new.visible {
        ops.push(MapOp::SetLayout {
            layer: new.id.clone(),
            name:  "visibility".into(),
            value: LayerSpec::visibility_value(new.visible),
        });
    }
    for (name, value) in &new.paint {
        if old.paint.get(name) != Some(value) {
            ops.push(MapOp::SetPaint { layer: new.id.clone(), name: name.clone(), value: value.clone() });
        }
    }
    for (name, value) in &new.layout {
        if old.layout.get(name) != Some(value) {
            ops.push(MapOp::SetLayout { layer: new.id.clone(), name: name.clone(), value: value.clone() });
        }
    }
    match (old.interactive, new.interactive) {
        (false, true) => bind(ops, new),
        (true, false) => unbind(ops, old),
        _ => {}
    }
}

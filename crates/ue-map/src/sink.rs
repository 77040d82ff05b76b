//! Publish flow frames into map sources.

use tracing::warn;
use ue_flow::{FlowFrame, FrameSink};

use crate::{tolerate, MapHandle};

/// Source ids the flow layers draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowSources {
    pub particles: String,
    pub arcs:      String,
    pub hubs:      String,
}

impl Default for FlowSources {
    fn default() -> Self {
        Self {
            particles: "flow-particles".into(),
            arcs:      "flow-arcs".into(),
            hubs:      "flow-hubs".into(),
        }
    }
}

/// [`FrameSink`] that replaces the three flow sources wholesale every frame.
///
/// Errors never stop the loop: transient ones are ignored, others are
/// counted and logged.
pub struct MapSourceSink<'m, M: MapHandle + ?Sized> {
    map:     &'m mut M,
    sources: FlowSources,
    errors:  u64,
}

impl<'m, M: MapHandle + ?Sized> MapSourceSink<'m, M> {
    pub fn new(map: &'m mut M) -> Self {
        Self::with_sources(map, FlowSources::default())
    }

    pub fn with_sources(map: &'m mut M, sources: FlowSources) -> Self {
        Self { map, sources, errors: 0 }
    }

    /// Non-transient errors seen so far.
    pub fn errors(&self) -> u64 {
        self.errors
    }
}

impl<M: MapHandle + ?Sized> FrameSink for MapSourceSink<'_, M> {
    fn on_frame(&mut self, frame: &FlowFrame) {
        let updates = [
            (&self.sources.particles, &frame.particles),
            (&self.sources.arcs, &frame.arcs),
            (&self.sources.hubs, &frame.hubs),
        ];
        for (id, data) in updates {
            if let Err(e) = tolerate(self.map.set_source_data(id, data)) {
                self.errors += 1;
                warn!(source = %id, frame = frame.index, error = %e, "flow source update failed");
            }
        }
    }
}

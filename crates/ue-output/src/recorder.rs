//! `FrameRecorder<W>` — bridges `FrameSink` to a `FrameWriter`.

use std::collections::HashMap;

use ue_flow::{FlowFrame, FrameSink};
use ue_geojson::point_coordinates;

use crate::row::ParticleRow;
use crate::writer::FrameWriter;
use crate::{OutputError, OutputResult};

/// A [`FrameSink`] that writes every `every`-th frame's particles to any
/// [`FrameWriter`].
///
/// Errors from the writer are stored internally because `FrameSink`
/// methods have no return value.  After the loop stops, check with
/// [`take_error`][Self::take_error].
pub struct FrameRecorder<W: FrameWriter> {
    writer:     W,
    every:      u64,
    recorded:   u64,
    last_error: Option<OutputError>,
}

impl<W: FrameWriter> FrameRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, every: 1, recorded: 0, last_error: None }
    }

    /// Record only frames whose index is a multiple of `n` (minimum 1).
    pub fn every(mut self, n: u64) -> Self {
        self.every = n.max(1);
        self
    }

    /// Frames written so far.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    /// Take the stored write error (if any) after the loop stops.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// Particle rows for `frame`; each arc's particles are numbered in order.
pub fn particle_rows(frame: &FlowFrame) -> Vec<ParticleRow> {
    let mut per_arc: HashMap<&str, u32> = HashMap::new();
    frame
        .particles
        .features
        .iter()
        .filter_map(|f| {
            let at = point_coordinates(f)?;
            let props = f.properties.as_ref()?;
            let arc_id = props.get("routeId").and_then(|v| v.as_str()).unwrap_or("");
            let slot = per_arc.entry(arc_id).or_insert(0);
            let particle = *slot;
            *slot += 1;
            Some(ParticleRow {
                frame: frame.index,
                arc_id: arc_id.to_owned(),
                particle,
                lng: at.lng,
                lat: at.lat,
                core_color: props
                    .get("coreColor")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_owned(),
            })
        })
        .collect()
}

impl<W: FrameWriter> FrameSink for FrameRecorder<W> {
    fn on_frame(&mut self, frame: &FlowFrame) {
        if frame.index % self.every != 0 {
            return;
        }
        let rows = particle_rows(frame);
        if !rows.is_empty() {
            let result = self.writer.write_particles(&rows);
            self.store_err(result);
        }
        self.recorded += 1;
    }

    fn on_stop(&mut self, _frames: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

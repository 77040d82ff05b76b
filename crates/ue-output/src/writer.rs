//! The `FrameWriter` trait implemented by frame output backends.

use crate::{OutputResult, ParticleRow};

/// Destination for recorded particle rows.
///
/// Errors are returned to [`FrameRecorder`](crate::FrameRecorder), which
/// stores the first one because frame sinks have no return value.
pub trait FrameWriter {
    /// Write all particle rows of one frame.
    fn write_particles(&mut self, rows: &[ParticleRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! Frame consumers.

use crate::FlowFrame;

/// Receives each frame produced by [`FlowLoop`][crate::FlowLoop].
///
/// Both methods default to no-ops so implementors override only what they
/// need.
///
/// # Example — frame counter
///
/// ```rust,ignore
/// struct Counter(u64);
///
/// impl FrameSink for Counter {
///     fn on_frame(&mut self, _frame: &FlowFrame) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FrameSink {
    /// Called once per rendered frame with the complete frame.
    fn on_frame(&mut self, _frame: &FlowFrame) {}

    /// Called once when the loop stops, with the number of frames rendered.
    fn on_stop(&mut self, _frames: u64) {}
}

/// A [`FrameSink`] that does nothing.
pub struct NoopSink;

impl FrameSink for NoopSink {}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub frames:  Vec<FlowFrame>,
    pub stopped: Option<u64>,
}

impl FrameSink for CollectSink {
    fn on_frame(&mut self, frame: &FlowFrame) {
        self.frames.push(frame.clone());
    }

    fn on_stop(&mut self, frames: u64) {
        self.stopped = Some(frames);
    }
}

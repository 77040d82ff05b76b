//! The cancellable frame loop.

use tracing::{debug, trace};

use crate::{FlowAnimator, FrameClock, FrameHandle, FrameSink, Visibility};

/// Drives a [`FlowAnimator`] from a [`FrameClock`] while `visibility` is on.
///
/// At most one frame request is outstanding at a time.  It is cancelled as
/// soon as the loop sees visibility off, and when the loop is dropped.
pub struct FlowLoop<'c, C: FrameClock> {
    animator:   FlowAnimator,
    clock:      &'c mut C,
    visibility: Visibility,
    pending:    Option<FrameHandle>,
}

impl<'c, C: FrameClock> FlowLoop<'c, C> {
    pub fn new(animator: FlowAnimator, clock: &'c mut C, visibility: Visibility) -> Self {
        Self { animator, clock, visibility, pending: None }
    }

    pub fn animator(&self) -> &FlowAnimator {
        &self.animator
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// The outstanding frame request, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Request the next frame if visible and none is outstanding.
    pub fn schedule(&mut self) -> Option<FrameHandle> {
        if self.pending.is_none() && self.visibility.is_visible() {
            self.pending = Some(self.clock.request_frame());
        }
        self.pending
    }

    /// Cancel the outstanding request, if any.
    pub fn cancel(&mut self) {
        if let Some(h) = self.pending.take() {
            self.clock.cancel_frame(h);
            debug!(handle = h.0, "frame request cancelled");
        }
    }

    /// Run until visibility turns off or the clock stops firing.
    ///
    /// Returns the number of frames rendered by this call.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> u64 {
        let mut rendered = 0;
        loop {
            let Some(handle) = self.schedule() else { break };
            if !self.visibility.is_visible() {
                self.cancel();
                break;
            }
            self.pending = None;
            if !self.clock.wait_frame(handle) {
                debug!(handle = handle.0, "frame clock stopped");
                break;
            }
            if !self.visibility.is_visible() {
                break;
            }
            self.step(sink);
            rendered += 1;
        }
        sink.on_stop(rendered);
        rendered
    }

    /// Render exactly `n` frames without consulting the clock or visibility.
    ///
    /// Useful for tests and offline recording.
    pub fn run_frames<S: FrameSink>(&mut self, n: u64, sink: &mut S) {
        for _ in 0..n {
            self.step(sink);
        }
    }

    fn step<S: FrameSink>(&mut self, sink: &mut S) {
        self.animator.advance();
        let frame = self.animator.frame();
        trace!(
            frame = frame.index,
            particles = frame.particles.features.len(),
            phase = self.animator.phase(),
            "frame"
        );
        sink.on_frame(&frame);
    }
}

impl<C: FrameClock> Drop for FlowLoop<'_, C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

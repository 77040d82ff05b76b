//! Frame scheduling.
//!
//! A [`FrameClock`] plays the part of the browser's animation-frame
//! scheduler: the loop requests a frame, gets a handle back, waits on it,
//! and must cancel any handle it will not wait on.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Opaque id of a requested frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

pub trait FrameClock {
    /// Schedule the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Block until `handle` is due.  `false` means the frame will never
    /// fire (cancelled, unknown or clock exhausted).
    fn wait_frame(&mut self, handle: FrameHandle) -> bool;

    /// Drop a pending request.  Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Shared on/off flag of the layer that owns the animation.
///
/// Clones share state; flipping it from any clone stops the loop before its
/// next frame.
#[derive(Clone, Debug, Default)]
pub struct Visibility(Arc<AtomicBool>);

impl Visibility {
    pub fn new(visible: bool) -> Self {
        Visibility(Arc::new(AtomicBool::new(visible)))
    }

    pub fn show(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn hide(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn set(&self, visible: bool) {
        self.0.store(visible, Ordering::Release);
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ── IntervalClock ─────────────────────────────────────────────────────────────

/// Wall-clock frames at a fixed interval (sleeps the calling thread).
pub struct IntervalClock {
    interval: Duration,
    next_id:  u64,
    pending:  BTreeSet<u64>,
    due:      Instant,
}

impl IntervalClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_id: 0, pending: BTreeSet::new(), due: Instant::now() }
    }

    /// Number of requested frames not yet waited on or cancelled.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }
}

impl FrameClock for IntervalClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.pending.insert(self.next_id);
        self.due = Instant::now() + self.interval;
        FrameHandle(self.next_id)
    }

    fn wait_frame(&mut self, handle: FrameHandle) -> bool {
        if !self.pending.remove(&handle.0) {
            return false;
        }
        let now = Instant::now();
        if self.due > now {
            thread::sleep(self.due - now);
        }
        true
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.remove(&handle.0);
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// Deterministic clock for tests and offline rendering.
///
/// Fires every requested frame immediately, up to an optional budget, and
/// records every request and cancellation.  `hide_after(v, n)` hides `v`
/// while the `n + 1`-th frame is being requested, which is how tests flip
/// visibility mid-run.
#[derive(Debug, Default)]
pub struct ManualClock {
    next_id:   u64,
    budget:    Option<u64>,
    fired:     u64,
    pending:   BTreeSet<u64>,
    cancelled: Vec<FrameHandle>,
    hide:      Option<(Visibility, u64)>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire at most `frames` frames; later waits return `false`.
    pub fn with_budget(frames: u64) -> Self {
        Self { budget: Some(frames), ..Self::default() }
    }

    pub fn hide_after(mut self, visibility: Visibility, frames: u64) -> Self {
        self.hide = Some((visibility, frames));
        self
    }

    pub fn requested(&self) -> u64 {
        self.next_id
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self) -> FrameHandle {
        if let Some((v, after)) = &self.hide {
            if self.fired >= *after {
                v.hide();
            }
        }
        self.next_id += 1;
        self.pending.insert(self.next_id);
        FrameHandle(self.next_id)
    }

    fn wait_frame(&mut self, handle: FrameHandle) -> bool {
        if !self.pending.remove(&handle.0) {
            return false;
        }
        if self.budget.is_some_and(|b| self.fired >= b) {
            return false;
        }
        self.fired += 1;
        true
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle.0) {
            self.cancelled.push(handle);
        }
    }
}

//! `ue-flow` — the per-frame flow animation.
//!
//! # Frame loop
//!
//! ```text
//! request frame ──▶ visible? ──no──▶ cancel handle, stop
//!                      │yes
//!                      ▼
//!                 wait for frame ──closed──▶ stop
//!                      │
//!                      ▼
//!           ① advance phase and time base
//!           ② rebuild particles / arcs / hubs
//!           ③ hand the whole FlowFrame to the sink
//! ```
//!
//! Each frame replaces every collection wholesale; nothing is patched.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`animator`]  | `FlowAnimator`, `FlowArc`, `Hub`, pulse and bucket maths   |
//! | [`builder`]   | `AnimatorBuilder`, `seed_flows` — flow / hub collections   |
//! | [`clock`]     | `FrameClock`, `IntervalClock`, `ManualClock`, `Visibility` |
//! | [`frame_loop`]| `FlowLoop` — run / run_frames with cancellation            |
//! | [`sink`]      | `FrameSink`, `NoopSink`, `CollectSink`                     |
//! | [`error`]     | `FlowError`, `FlowResult<T>`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let animator = AnimatorBuilder::new(&layers.flows)
//!     .hubs(&hubs)
//!     .phase_step(config.phase_step)
//!     .build()?;
//! let visibility = Visibility::new(true);
//! let mut clock = IntervalClock::new(config.frame_interval());
//! FlowLoop::new(animator, &mut clock, visibility.clone()).run(&mut sink);
//! ```

pub mod animator;
pub mod builder;
pub mod clock;
pub mod error;
pub mod frame_loop;
pub mod sink;

#[cfg(test)]
mod tests;

pub use animator::{
    distance_bucket, speed_multiplier, FlowAnimator, FlowArc, FlowFrame, Hub, DISTANCE_BUCKETS_KM,
};
pub use builder::{seed_flows, AnimatorBuilder, MAX_SPEED, MIN_SPEED};
pub use clock::{FrameClock, FrameHandle, IntervalClock, ManualClock, Visibility};
pub use error::{FlowError, FlowResult};
pub use frame_loop::FlowLoop;
pub use sink::{CollectSink, FrameSink, NoopSink};

// The colour bands are defined next to the flow generator that first uses
// them; re-exported here because the animation is their main consumer.
pub use ue_mobility::CongestionBand;

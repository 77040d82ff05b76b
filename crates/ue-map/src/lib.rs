//! `ue-map` — everything that touches the map renderer.
//!
//! The renderer itself is external; it is reached through [`MapHandle`].
//! Layer lifecycle is declarative: callers describe the [`DesiredState`]
//! (sources, layers, visibility, paint) and the [`Reconciler`] diffs it
//! against what it applied last time, emitting only the delta as
//! [`MapOp`]s.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`handle`]    | `MapHandle` capability trait, `MapEvent`                   |
//! | [`layer`]     | `LayerKind`, `LayerSpec`, `DesiredState`                   |
//! | [`reconcile`] | `MapOp`, `Reconciler::plan` / `apply`                      |
//! | [`sink`]      | `MapSourceSink` — publishes flow frames to map sources     |
//! | [`memory`]    | `InMemoryMap` — a `MapHandle` for tests and headless runs  |
//! | [`error`]     | `MapError` with transient-error classification             |

pub mod error;
pub mod handle;
pub mod layer;
pub mod memory;
pub mod reconcile;
pub mod sink;

#[cfg(test)]
mod tests;

pub use error::{tolerate, MapError, MapResult};
pub use handle::{MapEvent, MapHandle};
pub use layer::{DesiredState, LayerKind, LayerSpec};
pub use memory::InMemoryMap;
pub use reconcile::{MapOp, Reconciler};
pub use sink::{FlowSources, MapSourceSink};

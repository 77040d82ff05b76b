//! `ue-core` — foundational types for the Uesugi Engine workspace.
//!
//! This crate is a dependency of every other `ue-*` crate.  It has no
//! `ue-*` dependencies and only a handful of external ones (`rand`,
//! `thiserror`, `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`geo`]        | `LngLat`, `Bounds`, degree and haversine distances        |
//! | [`rng`]        | `GenRng` (seedable, per-stream derivation)                |
//! | [`sampler`]    | `sample_around` — Box–Muller point clouds                 |
//! | [`category`]   | Closed category enums with label / colour / icon tables   |
//! | [`config`]     | `EngineConfig` (env + JSON loading)                       |
//! | [`error`]      | `UeError`, `UeResult`                                     |

pub mod category;
pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod sampler;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{
    AccommodationType, CongestionKind, ConsumptionCategory, DistrictKind, EventCategory,
    HeatCategory, LandmarkCategory, LineCategory, RouteKind, SentimentBucket, VenueKind,
};
pub use config::EngineConfig;
pub use error::{UeError, UeResult};
pub use geo::{Bounds, LngLat};
pub use rng::GenRng;
pub use sampler::sample_around;

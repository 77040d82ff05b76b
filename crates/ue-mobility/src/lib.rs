//! `ue-mobility` — transport routes, congestion points and flow geometry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`route`]     | `MobilityRoute`, `CongestionPoint`, `MobilityData`, `FlowDirection` |
//! | [`generate`]  | `generate_mobility` — rail segments, highway graph, hubs        |
//! | [`intercity`] | `inter_prefecture_routes` — static shinkansen / expressway / air table |
//! | [`arc`]       | Cubic Bezier arcs and polyline interpolation                    |
//! | [`band`]      | `CongestionBand` — the five congestion colour bands             |
//! | [`layers`]    | Routes → `FlowLayers { particles, flows }`, hubs → points        |
//!
//! # Geometry rule
//!
//! A route with exactly two points is drawn as a 51-point Bezier arc; a
//! route that already carries a polyline (more than two points) is drawn
//! as-is; anything shorter has no geometry and is skipped.

pub mod arc;
pub mod band;
pub mod generate;
pub mod intercity;
pub mod layers;
pub mod route;


pub use arc::{arc_height, arc_points, point_along, route_geometry, ARC_SEGMENTS};
pub use band::CongestionBand;
pub use generate::generate_mobility;
pub use intercity::{inter_prefecture_layers, inter_prefecture_routes, InterPrefectureRoute};
pub use layers::{congestion_to_collection, to_flow_layers, FlowLayers, MAX_PARTICLES, MIN_PARTICLES};
pub use route::{CongestionPoint, FlowDirection, MobilityData, MobilityRoute};

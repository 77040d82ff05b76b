//! Mobility records.

use serde::{Deserialize, Serialize};

use ue_core::{CongestionKind, LngLat, RouteKind};

/// A named transport connection.
///
/// `points` is either the two endpoints (drawn as an arc) or a real
/// polyline.  `congestion` is a synthetic scalar in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobilityRoute {
    pub id:         String,
    pub name:       String,
    #[serde(rename = "type")]
    pub kind:       RouteKind,
    pub points:     Vec<LngLat>,
    pub congestion: f64,
    /// Relative particle speed, always positive.
    pub flow_speed: f64,
    pub category:   String,
}

/// A congested area drawn as a pulsing hub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CongestionPoint {
    pub coordinates: LngLat,
    pub level:       f64,
    /// Metres.
    pub radius:      f64,
    #[serde(rename = "type")]
    pub kind:        CongestionKind,
    pub name:        String,
}

/// Everything `generate_mobility` produces for one prefecture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobilityData {
    pub routes:            Vec<MobilityRoute>,
    pub congestion_points: Vec<CongestionPoint>,
}

impl MobilityData {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.congestion_points.is_empty()
    }
}

/// Which way particles travel along a flow arc.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Forward,
    Reverse,
}

impl FlowDirection {
    pub fn label(self) -> &'static str {
        match self {
            FlowDirection::Forward => "forward",
            FlowDirection::Reverse => "reverse",
        }
    }

    /// Anything other than `"reverse"` reads as forward.
    pub fn from_label(s: &str) -> FlowDirection {
        if s == "reverse" { FlowDirection::Reverse } else { FlowDirection::Forward }
    }
}

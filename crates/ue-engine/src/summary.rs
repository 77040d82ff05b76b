//! Sidebar figures.
//!
//! Computed from the layer collections rather than the generated records so
//! backend-sourced layers are summarised the same way.

use serde::{Deserialize, Serialize};
use ue_generate::WeatherSnapshot;
use ue_geojson::FeatureCollection;

use crate::{LayerId, PrefectureView};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub prefecture:          String,
    pub accommodation_count: usize,
    pub total_capacity:      f64,
    pub mean_occupancy:      f64,
    pub consumption_count:   usize,
    pub consumption_total:   f64,
    pub tourist_share:       f64,
    pub landmark_count:      usize,
    pub event_count:         usize,
    pub expected_attendance: f64,
    pub heatmap_count:       usize,
    pub mean_sentiment:      f64,
    pub route_count:         usize,
    pub mean_congestion:     f64,
    pub hub_count:           usize,
    pub weather:             WeatherSnapshot,
    /// Layers that came from the backend.
    pub live_layers:         Vec<String>,
}

impl DashboardSummary {
    pub fn from_view(view: &PrefectureView) -> Self {
        let tourist = view
            .consumption
            .features
            .iter()
            .filter(|f| f.property("isTouristArea").and_then(|v| v.as_bool()) == Some(true))
            .count();

        Self {
            prefecture:          view.prefecture.clone(),
            accommodation_count: view.accommodation.features.len(),
            total_capacity:      sum(&view.accommodation, "capacity"),
            mean_occupancy:      mean(&view.accommodation, "occupancy"),
            consumption_count:   view.consumption.features.len(),
            consumption_total:   sum(&view.consumption, "amount"),
            tourist_share:       ratio(tourist, view.consumption.features.len()),
            landmark_count:      view.landmarks.features.len(),
            event_count:         view.events.features.len(),
            expected_attendance: sum(&view.events, "expected_attendance"),
            heatmap_count:       view.heatmap.features.len(),
            mean_sentiment:      mean(&view.heatmap, "sentiment"),
            route_count:         view.flows.flows.features.len(),
            mean_congestion:     mean(&view.flows.flows, "congestion"),
            hub_count:           view.hubs.features.len(),
            weather:             view.weather.clone(),
            live_layers:         LayerId::ALL
                .into_iter()
                .filter(|&l| view.origin(l) == ue_feed::DataOrigin::Backend)
                .map(|l| l.label().to_owned())
                .collect(),
        }
    }
}

fn values<'a>(fc: &'a FeatureCollection, key: &'a str) -> impl Iterator<Item = f64> + 'a {
    fc.features
        .iter()
        .filter_map(move |f| f.property(key).and_then(|v| v.as_f64()))
}

fn sum(fc: &FeatureCollection, key: &str) -> f64 {
    values(fc, key).sum()
}

/// Mean over features carrying `key`; 0 when none do.
fn mean(fc: &FeatureCollection, key: &str) -> f64 {
    let (total, n) = values(fc, key).fold((0.0, 0usize), |(t, n), v| (t + v, n + 1));
    if n == 0 { 0.0 } else { total / n as f64 }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}

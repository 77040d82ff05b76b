//! Everything the dashboard shows for one prefecture.

use std::fmt;

use ue_catalog::Prefecture;
use ue_core::GenRng;
use ue_feed::{DataOrigin, Endpoint};
use ue_generate::{generate_weather, PrefectureData, WeatherSnapshot};
use ue_geojson::{empty_collection, to_collection, FeatureCollection};
use ue_flow::seed_flows;
use ue_mobility::{congestion_to_collection, to_flow_layers, FlowLayers};

/// The toggleable data layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerId {
    Accommodation,
    Consumption,
    Landmarks,
    Events,
    Heatmap,
    Mobility,
}

impl LayerId {
    /// Draw order, bottom first.
    pub const ALL: [LayerId; 6] = [
        LayerId::Heatmap,
        LayerId::Mobility,
        LayerId::Consumption,
        LayerId::Accommodation,
        LayerId::Landmarks,
        LayerId::Events,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayerId::Accommodation => "accommodation",
            LayerId::Consumption   => "consumption",
            LayerId::Landmarks     => "landmarks",
            LayerId::Events        => "events",
            LayerId::Heatmap       => "heatmap",
            LayerId::Mobility      => "mobility",
        }
    }

    pub fn from_label(label: &str) -> Option<LayerId> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }

    /// Backend resource for this layer, if the backend serves one.
    pub fn endpoint(self, prefecture: &Prefecture) -> Option<Endpoint> {
        let key = prefecture.name_en.to_lowercase();
        match self {
            LayerId::Accommodation => Some(Endpoint::Accommodation { prefecture: key }),
            LayerId::Consumption   => Some(Endpoint::Consumption),
            LayerId::Landmarks     => Some(Endpoint::TourismFacilities { region: key }),
            LayerId::Events        => Some(Endpoint::Events { prefecture: key }),
            LayerId::Mobility      => Some(Endpoint::Mobility { prefecture: key, city_only: false }),
            LayerId::Heatmap       => None,
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map-ready layers for one prefecture.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefectureView {
    pub prefecture:    String,
    pub accommodation: FeatureCollection,
    pub consumption:   FeatureCollection,
    pub landmarks:     FeatureCollection,
    pub events:        FeatureCollection,
    pub heatmap:       FeatureCollection,
    pub flows:         FlowLayers,
    pub hubs:          FeatureCollection,
    pub weather:       WeatherSnapshot,
    /// Where each layer came from, in [`LayerId::ALL`] order.
    pub origins:       Vec<(LayerId, DataOrigin)>,
}

impl PrefectureView {
    /// Convert generated records; every layer is marked generated.
    pub fn from_data(data: &PrefectureData, rng: &mut GenRng) -> Self {
        let mut view = Self {
            prefecture:    data.prefecture.clone(),
            accommodation: to_collection(&data.accommodation),
            consumption:   to_collection(&data.consumption),
            landmarks:     to_collection(&data.landmarks),
            events:        to_collection(&data.events),
            heatmap:       to_collection(&data.heatmap),
            flows:         to_flow_layers(&data.mobility, rng),
            hubs:          congestion_to_collection(&data.mobility.congestion_points),
            weather:       data.weather.clone(),
            origins:       LayerId::ALL.into_iter().map(|l| (l, DataOrigin::Generated)).collect(),
        };
        view.reseed_flows();
        view
    }

    /// Rebuild the particles and arc styling from the current flow lines.
    /// Call after replacing `flows.flows`.
    pub fn reseed_flows(&mut self) {
        self.flows.particles = seed_flows(&mut self.flows.flows);
    }

    /// No data at all, for names the catalog does not know.
    pub fn empty(prefecture: &str, rng: &mut GenRng) -> Self {
        Self {
            prefecture:    prefecture.to_owned(),
            accommodation: empty_collection(),
            consumption:   empty_collection(),
            landmarks:     empty_collection(),
            events:        empty_collection(),
            heatmap:       empty_collection(),
            flows:         FlowLayers::default(),
            hubs:          empty_collection(),
            weather:       generate_weather(prefecture, rng),
            origins:       LayerId::ALL.into_iter().map(|l| (l, DataOrigin::Generated)).collect(),
        }
    }

    /// The collection drawn for `layer`; mobility returns the flow lines.
    pub fn collection(&self, layer: LayerId) -> &FeatureCollection {
        match layer {
            LayerId::Accommodation => &self.accommodation,
            LayerId::Consumption   => &self.consumption,
            LayerId::Landmarks     => &self.landmarks,
            LayerId::Events        => &self.events,
            LayerId::Heatmap       => &self.heatmap,
            LayerId::Mobility      => &self.flows.flows,
        }
    }

    pub fn collection_mut(&mut self, layer: LayerId) -> &mut FeatureCollection {
        match layer {
            LayerId::Accommodation => &mut self.accommodation,
            LayerId::Consumption   => &mut self.consumption,
            LayerId::Landmarks     => &mut self.landmarks,
            LayerId::Events        => &mut self.events,
            LayerId::Heatmap       => &mut self.heatmap,
            LayerId::Mobility      => &mut self.flows.flows,
        }
    }

    pub fn origin(&self, layer: LayerId) -> DataOrigin {
        self.origins
            .iter()
            .find(|(l, _)| *l == layer)
            .map_or(DataOrigin::Generated, |&(_, o)| o)
    }

    /// `(layer, feature count)` for every layer in draw order.
    pub fn feature_counts(&self) -> Vec<(LayerId, usize)> {
        LayerId::ALL
            .into_iter()
            .map(|l| (l, self.collection(l).features.len()))
            .collect()
    }
}

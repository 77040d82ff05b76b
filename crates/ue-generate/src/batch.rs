//! Whole-prefecture generation.
//!
//! `generate_all` gives prefecture `i` of the input the RNG stream
//! `GenRng::for_stream(seed, i)`, so its output depends only on the seed and
//! its position, never on thread scheduling.  With the `parallel` feature the
//! prefectures are generated on Rayon's thread pool; results are identical.

use serde::{Deserialize, Serialize};
use tracing::info;

use ue_catalog::Prefecture;
use ue_core::GenRng;
use ue_mobility::{generate_mobility, MobilityData};

use crate::{
    generate_accommodation, generate_consumption, generate_events, generate_heatmap,
    generate_landmarks, generate_weather, AccommodationFacility, ConsumptionPoint, Event,
    HeatmapPoint, Landmark, WeatherSnapshot,
};

/// Every generated record for one prefecture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrefectureData {
    pub prefecture:    String,
    pub accommodation: Vec<AccommodationFacility>,
    pub consumption:   Vec<ConsumptionPoint>,
    pub landmarks:     Vec<Landmark>,
    pub events:        Vec<Event>,
    pub heatmap:       Vec<HeatmapPoint>,
    pub mobility:      MobilityData,
    pub weather:       WeatherSnapshot,
}

impl PrefectureData {
    /// Total number of generated records (weather excluded).
    pub fn record_count(&self) -> usize {
        self.accommodation.len()
            + self.consumption.len()
            + self.landmarks.len()
            + self.events.len()
            + self.heatmap.len()
            + self.mobility.routes.len()
            + self.mobility.congestion_points.len()
    }
}

/// Run every generator against `catalog`, in a fixed order.
pub fn generate_prefecture(catalog: &Prefecture, event_year: u16, rng: &mut GenRng) -> PrefectureData {
    PrefectureData {
        prefecture:    catalog.name.clone(),
        accommodation: generate_accommodation(catalog, rng),
        consumption:   generate_consumption(catalog, rng),
        landmarks:     generate_landmarks(catalog, rng),
        events:        generate_events(catalog, event_year, rng),
        heatmap:       generate_heatmap(catalog, rng),
        mobility:      generate_mobility(Some(catalog), rng),
        weather:       generate_weather(&catalog.name, rng),
    }
}

/// Generate every catalog in `catalogs` with independent RNG streams.
pub fn generate_all(catalogs: &[Prefecture], seed: u64, event_year: u16) -> Vec<PrefectureData> {
    let one = |(i, catalog): (usize, &Prefecture)| {
        let mut rng = GenRng::for_stream(seed, i as u64);
        generate_prefecture(catalog, event_year, &mut rng)
    };

    #[cfg(not(feature = "parallel"))]
    let out: Vec<PrefectureData> = catalogs.iter().enumerate().map(one).collect();

    #[cfg(feature = "parallel")]
    let out: Vec<PrefectureData> = {
        use rayon::prelude::*;
        catalogs.par_iter().enumerate().map(one).collect()
    };

    info!(
        prefectures = out.len(),
        records = out.iter().map(PrefectureData::record_count).sum::<usize>(),
        "batch generation complete"
    );
    out
}

//! `ue-generate` — synthetic entity records for one prefecture at a time.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`record`]        | Record types and their `ToFeature` impls                  |
//! | [`accommodation`] | Hotels, ryokan, guest houses per district                 |
//! | [`consumption`]   | Spending hotspots with the tourist-area multiplier        |
//! | [`landmark`]      | Catalogued landmarks plus synthetic high-rises            |
//! | [`event`]         | Venue events with attendance and impact radius            |
//! | [`heatmap`]       | SNS sentiment points                                      |
//! | [`weather`]       | Fallback weather snapshot                                 |
//! | [`batch`]         | `PrefectureData`, `generate_prefecture`, `generate_all`   |
//!
//! # Contract
//!
//! Every generator takes the catalog by reference and a `&mut GenRng`.  A
//! catalog without bounds, centre or cities is logged with `warn!` and
//! produces an empty `Vec`; generators never panic on catalog content.

pub mod accommodation;
pub mod batch;
pub mod consumption;
pub mod event;
pub mod heatmap;
pub mod landmark;
pub mod record;
pub mod weather;

#[cfg(test)]
mod tests;

pub use accommodation::generate_accommodation;
pub use batch::{generate_all, generate_prefecture, PrefectureData};
pub use consumption::{consumption_amount, generate_consumption, TOURIST_MULTIPLIER, TOURIST_RADIUS_DEG};
pub use event::generate_events;
pub use heatmap::generate_heatmap;
pub use landmark::generate_landmarks;
pub use record::{AccommodationFacility, ConsumptionPoint, Event, HeatmapPoint, Landmark};
pub use weather::{generate_weather, WeatherCondition, WeatherSnapshot};

use tracing::warn;
use ue_catalog::Prefecture;

/// `true` when `catalog` can seed generation; logs why not otherwise.
pub(crate) fn usable(catalog: &Prefecture, generator: &'static str) -> bool {
    match catalog.checked_center() {
        Ok(_) => true,
        Err(e) => {
            warn!(generator, error = %e, "catalog unusable, generating nothing");
            false
        }
    }
}

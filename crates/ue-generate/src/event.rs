//! Venue events.

use tracing::debug;

use ue_catalog::Prefecture;
use ue_core::{EventCategory, GenRng, VenueKind};

use crate::{usable, Event};

const JITTER_DEG: f64 = 0.002;

fn category_weights(kind: VenueKind) -> &'static [(EventCategory, f64)] {
    use EventCategory::*;
    match kind {
        VenueKind::Stadium    => &[(Sports, 0.60), (Concert, 0.25), (Festival, 0.15)],
        VenueKind::Arena      => &[(Concert, 0.45), (Sports, 0.35), (Exhibition, 0.20)],
        VenueKind::Park       => &[(Festival, 0.45), (Gourmet, 0.35), (Concert, 0.20)],
        VenueKind::Exhibition => &[(Exhibition, 0.55), (Gourmet, 0.25), (Concert, 0.20)],
        VenueKind::Shrine     => &[(Festival, 0.80), (Gourmet, 0.20)],
    }
}

/// Metres of noticeable crowd effect around an event.
pub fn impact_radius(attendance: u32) -> f64 {
    300.0 + f64::from(attendance) / 50.0
}

/// One to three events per venue, dated within `year`.
pub fn generate_events(catalog: &Prefecture, year: u16, rng: &mut GenRng) -> Vec<Event> {
    if !usable(catalog, "events") {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (vi, venue) in catalog.venues.iter().enumerate() {
        let city = catalog
            .cities
            .get(&venue.city)
            .map_or_else(|| venue.city.clone(), |c| c.name.clone());
        let n: usize = rng.gen_range(1..=3);

        for i in 0..n {
            let category = rng.weighted(category_weights(venue.kind)).unwrap_or(EventCategory::Festival);
            let share: f64 = rng.gen_range(0.3..=1.0);
            let attendance = ((f64::from(venue.capacity) * share).round() as u32).max(1);
            let dlng: f64 = rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            let dlat: f64 = rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            let month: u8 = rng.gen_range(1..=12);
            let day: u8 = rng.gen_range(1..=28);

            out.push(Event {
                id:                  format!("evt-{}-{vi}-{i}", catalog.name_en),
                coordinates:         venue.coordinates.offset(dlng, dlat),
                name:                format!("{} {}", venue.name, category.title_suffix()),
                category,
                icon:                category.icon().to_owned(),
                impact_radius:       impact_radius(attendance),
                expected_attendance: attendance,
                city:                city.clone(),
                date:                format!("{year:04}-{month:02}-{day:02}"),
            });
        }
    }

    debug!(prefecture = %catalog.name, count = out.len(), "events generated");
    out
}

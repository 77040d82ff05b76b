//! Unit tests for ue-generate.

#[cfg(test)]
mod validity {
    use ue_catalog::all;
    use ue_core::GenRng;
    use ue_geojson::{to_collection, validate_feature};

    use crate::{
        generate_accommodation, generate_consumption, generate_events, generate_heatmap,
        generate_landmarks,
    };

    #[test]
    fn every_generated_coordinate_is_valid() {
        for seed in [1_u64, 7, 42] {
            for p in all() {
                let mut rng = GenRng::new(seed);
                let layers = [
                    to_collection(&generate_accommodation(p, &mut rng)),
                    to_collection(&generate_consumption(p, &mut rng)),
                    to_collection(&generate_landmarks(p, &mut rng)),
                    to_collection(&generate_events(p, 2025, &mut rng)),
                    to_collection(&generate_heatmap(p, &mut rng)),
                ];
                for fc in &layers {
                    assert!(!fc.features.is_empty(), "{}: empty layer", p.name);
                    assert!(fc.features.iter().all(validate_feature), "{}: invalid feature", p.name);
                }
            }
        }
    }

    #[test]
    fn numeric_ranges() {
        let p = ue_catalog::by_name("osaka").unwrap();
        let mut rng = GenRng::new(9);
        for a in generate_accommodation(p, &mut rng) {
            assert!((0.5..=0.95).contains(&a.occupancy));
            assert!(a.capacity > 0);
        }
        for c in generate_consumption(p, &mut rng) {
            assert!(c.amount >= 0.0);
            assert!(c.peak_time <= 23);
        }
        for l in generate_landmarks(p, &mut rng) {
            assert!(l.height > 0.0);
        }
        for e in generate_events(p, 2025, &mut rng) {
            assert!(e.expected_attendance > 0);
            assert!(e.impact_radius > 300.0);
            assert!(e.date.starts_with("2025-") && e.date.len() == 10);
        }
        for h in generate_heatmap(p, &mut rng) {
            assert!((0.2..=1.0).contains(&h.intensity));
            assert!((0.0..=1.0).contains(&h.sentiment));
        }
    }
}

#[cfg(test)]
mod counts {
    use ue_catalog::by_name;
    use ue_core::GenRng;

    use crate::accommodation::accommodation_count;
    use crate::landmark::high_rise_count;
    use crate::generate_accommodation;

    #[test]
    fn larger_district_never_gets_fewer_facilities() {
        for major in [true, false] {
            let mut prev = 0;
            for pop in (0..300_000).step_by(7_500) {
                let n = accommodation_count(pop, major);
                assert!(n >= prev);
                prev = n;
            }
        }
        assert_eq!(accommodation_count(0, true), 6);
        assert_eq!(accommodation_count(0, false), 2);
        assert_eq!(accommodation_count(140_000, true), 31);
    }

    #[test]
    fn generated_counts_follow_district_population() {
        let p = by_name("hiroshima").unwrap();
        let city = &p.cities["hiroshima"];
        for seed in 0..5 {
            let facilities = generate_accommodation(p, &mut GenRng::new(seed));
            let per_district = |name: &str| facilities.iter().filter(|f| f.district == name).count();
            for a in &city.districts {
                for b in &city.districts {
                    if a.population > b.population {
                        assert!(per_district(&a.name) >= per_district(&b.name), "{} vs {}", a.name, b.name);
                    }
                }
            }
        }
    }

    #[test]
    fn high_rises_are_capped() {
        assert_eq!(high_rise_count(100_000), 1);
        assert_eq!(high_rise_count(1_200_000), 7);
        assert_eq!(high_rise_count(9_000_000), 8);
    }
}

#[cfg(test)]
mod tourist {
    use ue_catalog::{by_name, TouristIndex};
    use ue_core::{ConsumptionCategory, GenRng};

    use crate::{consumption_amount, generate_consumption, TOURIST_RADIUS_DEG};

    #[test]
    fn multiplier_outweighs_jitter() {
        for cat in ConsumptionCategory::ALL {
            let worst_tourist = consumption_amount(*cat, 1_200_000, 0.8, true);
            let best_plain = consumption_amount(*cat, 1_200_000, 1.2, false);
            assert!(worst_tourist >= 10.0 * best_plain);
        }
    }

    #[test]
    fn flag_matches_landmark_proximity() {
        let p = by_name("hiroshima").unwrap();
        let idx = TouristIndex::for_prefecture(p);
        let points = generate_consumption(p, &mut GenRng::new(21));
        assert!(points.iter().any(|c| c.is_tourist_area));
        for c in &points {
            assert_eq!(c.is_tourist_area, idx.within(c.coordinates, TOURIST_RADIUS_DEG));
        }
    }
}

#[cfg(test)]
mod degradation {
    use ue_catalog::{by_name, Prefecture};
    use ue_core::GenRng;

    use crate::{
        generate_accommodation, generate_consumption, generate_events, generate_heatmap,
        generate_landmarks, generate_prefecture,
    };

    #[test]
    fn missing_center_gives_empty_output() {
        let mut p: Prefecture = by_name("hiroshima").unwrap().clone();
        p.bounds.as_mut().unwrap().center = None;
        let mut rng = GenRng::new(1);
        assert!(generate_accommodation(&p, &mut rng).is_empty());
        assert!(generate_consumption(&p, &mut rng).is_empty());
        assert!(generate_landmarks(&p, &mut rng).is_empty());
        assert!(generate_events(&p, 2025, &mut rng).is_empty());
        assert!(generate_heatmap(&p, &mut rng).is_empty());
        let data = generate_prefecture(&p, 2025, &mut rng);
        assert_eq!(data.record_count(), 0);
    }

    #[test]
    fn no_cities_gives_empty_output() {
        let json = r#"{
            "name": "架空県",
            "bounds": { "north": 35.0, "south": 34.0, "east": 133.0, "west": 132.0, "center": [132.5, 34.5] }
        }"#;
        let p = Prefecture::from_json_reader(json.as_bytes()).unwrap();
        assert!(generate_accommodation(&p, &mut GenRng::new(1)).is_empty());
    }
}

#[cfg(test)]
mod batch {
    use ue_catalog::all;

    use crate::generate_all;

    #[test]
    fn deterministic_per_seed() {
        let a = generate_all(all(), 99, 2025);
        let b = generate_all(all(), 99, 2025);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|d| d.record_count() > 0));
    }

    #[test]
    fn streams_are_positional() {
        let full = generate_all(all(), 5, 2025);
        let first_only = generate_all(&all()[..1], 5, 2025);
        assert_eq!(full[0], first_only[0]);
    }
}

#[cfg(test)]
mod features {
    use ue_core::{GenRng, SentimentBucket};
    use ue_geojson::{to_collection, ToFeature};

    use crate::generate_heatmap;

    #[test]
    fn heatmap_feature_carries_bucket() {
        let p = ue_catalog::by_name("yamaguchi").unwrap();
        let points = generate_heatmap(p, &mut GenRng::new(4));
        let f = points[0].to_feature();
        let props = f.properties.unwrap();
        let label = props["sentiment_label"].as_str().unwrap();
        assert_eq!(SentimentBucket::from_label(label), Some(points[0].bucket()));
        assert_eq!(to_collection(&points).features.len(), points.len());
    }
}

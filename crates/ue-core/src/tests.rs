//! Unit tests for ue-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Bounds, LngLat};

    #[test]
    fn validity_range() {
        assert!(LngLat::new(132.45, 34.39).is_valid());
        assert!(LngLat::new(180.0, -90.0).is_valid());
        assert!(!LngLat::new(200.0, 34.0).is_valid());
        assert!(!LngLat::new(132.0, 91.0).is_valid());
        assert!(!LngLat::new(f64::NAN, 34.0).is_valid());
        assert!(!LngLat::new(132.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = LngLat::new(132.0, 34.0);
        let b = LngLat::new(132.0, 35.0);
        let d = a.distance_km(b);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn degree_distance_is_euclidean() {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(3.0, 4.0);
        assert!((a.degree_distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn serialises_as_position() {
        let p = LngLat::new(132.5, 34.25);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[132.5,34.25]");
        let back: LngLat = serde_json::from_str("[132.5,34.25]").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds {
            north: 35.1,
            south: 34.0,
            east: 133.5,
            west: 132.0,
            center: Some(LngLat::new(132.45, 34.39)),
            default_zoom: 10.0,
        };
        assert!(b.contains(LngLat::new(132.45, 34.39)));
        assert!(!b.contains(LngLat::new(131.0, 34.39)));
    }

    #[test]
    fn lerp_endpoints() {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), LngLat::new(1.0, 2.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::GenRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GenRng::new(12345);
        let mut r2 = GenRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn streams_differ() {
        let mut r0 = GenRng::for_stream(1, 0);
        let mut r1 = GenRng::for_stream(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "adjacent streams should diverge");
    }

    #[test]
    fn weighted_respects_zero_weights() {
        let mut rng = GenRng::new(7);
        let table = [("never", 0.0), ("always", 1.0)];
        for _ in 0..200 {
            assert_eq!(rng.weighted(&table), Some("always"));
        }
        let empty: [(u8, f64); 0] = [];
        assert_eq!(rng.weighted(&empty), None);
        assert_eq!(rng.weighted(&[(1u8, 0.0)]), None);
    }

    #[test]
    fn normal_pair_has_unit_variance() {
        let mut rng = GenRng::new(99);
        let n = 20_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let (a, b) = rng.normal_pair();
            assert!(a.is_finite() && b.is_finite());
            sum += a + b;
            sum_sq += a * a + b * b;
        }
        let mean = sum / (2 * n) as f64;
        let var = sum_sq / (2 * n) as f64 - mean * mean;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }
}

#[cfg(test)]
mod sampler {
    use crate::{sample_around, GenRng, LngLat};

    #[test]
    fn count_and_spread() {
        let mut rng = GenRng::new(3);
        let center = LngLat::new(132.4553, 34.3853);
        let pts = sample_around(center, 2_000, 0.01, &mut rng);
        assert_eq!(pts.len(), 2_000);

        let mean_lng = pts.iter().map(|p| p.lng).sum::<f64>() / pts.len() as f64;
        let mean_lat = pts.iter().map(|p| p.lat).sum::<f64>() / pts.len() as f64;
        assert!((mean_lng - center.lng).abs() < 0.002);
        assert!((mean_lat - center.lat).abs() < 0.002);

        // Practically every Gaussian draw stays within 6 sigma.
        assert!(pts.iter().all(|p| p.degree_distance(center) < 0.06));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = GenRng::new(0);
        assert!(sample_around(LngLat::new(0.0, 0.0), 0, 0.01, &mut rng).is_empty());
    }
}

#[cfg(test)]
mod category {
    use crate::{ConsumptionCategory, EventCategory, SentimentBucket};

    #[test]
    fn labels_round_trip_through_serde() {
        for &c in ConsumptionCategory::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.label()));
            assert_eq!(ConsumptionCategory::from_label(c.label()), Some(c));
        }
        let dining: ConsumptionCategory = serde_json::from_str("\"飲食\"").unwrap();
        assert_eq!(dining, ConsumptionCategory::Dining);
    }

    #[test]
    fn sentiment_buckets() {
        assert_eq!(SentimentBucket::from_score(0.95), SentimentBucket::Positive);
        assert_eq!(SentimentBucket::from_score(0.7), SentimentBucket::Positive);
        assert_eq!(SentimentBucket::from_score(0.69), SentimentBucket::Neutral);
        assert_eq!(SentimentBucket::from_score(0.4), SentimentBucket::Neutral);
        assert_eq!(SentimentBucket::from_score(0.39), SentimentBucket::Negative);
    }

    #[test]
    fn every_event_category_has_an_icon() {
        for &c in EventCategory::ALL {
            assert!(!c.icon().is_empty());
        }
    }
}

#[cfg(test)]
mod config {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::EngineConfig;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert!(cfg.map_token.is_none());
    }

    #[test]
    fn reads_env_values() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("MAPBOX_ACCESS_TOKEN", "pk.test"),
            ("UESUGI_SEED", "42"),
            ("UESUGI_FETCH_TIMEOUT_SECS", "45"),
            ("UESUGI_PREFECTURE", "福岡県"),
        ]))
        .unwrap();
        assert_eq!(cfg.map_token.as_deref(), Some("pk.test"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(45));
        assert_eq!(cfg.default_prefecture, "福岡県");
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let cfg = EngineConfig::from_lookup(lookup(&[("MAPBOX_ACCESS_TOKEN", "  ")])).unwrap();
        assert!(cfg.map_token.is_none());
    }

    #[test]
    fn malformed_seed_is_config_error() {
        let err = EngineConfig::from_lookup(lookup(&[("UESUGI_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("UESUGI_SEED"));
    }

    #[test]
    fn timeout_is_clamped() {
        let cfg = EngineConfig { fetch_timeout_secs: 600, ..EngineConfig::default() };
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(90));
        let cfg = EngineConfig { fetch_timeout_secs: 0, ..EngineConfig::default() };
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn json_partial_document() {
        let cfg = EngineConfig::from_json_reader(r#"{"seed": 7, "phase_step": 0.01}"#.as_bytes())
            .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.phase_step, 0.01);
        assert_eq!(cfg.fetch_timeout_secs, 30);
    }

    #[test]
    fn json_rejects_bad_phase_step() {
        assert!(EngineConfig::from_json_reader(r#"{"phase_step": 1.5}"#.as_bytes()).is_err());
    }
}

//! Unit tests for ue-catalog.
//!
//! The static tables are data, so most tests are integrity checks that keep
//! future edits honest.

#[cfg(test)]
mod tables {
    use crate::{all, by_name};

    #[test]
    fn five_prefectures() {
        let names: Vec<&str> = all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["広島県", "山口県", "福岡県", "大阪府", "東京都"]);
    }

    #[test]
    fn center_lies_within_bounds() {
        for p in all() {
            let b = p.bounds.as_ref().expect("shipped catalogs have bounds");
            let c = b.center.expect("shipped catalogs have a centre");
            assert!(b.contains(c), "{}: centre {c} outside bounds", p.name);
        }
    }

    #[test]
    fn every_coordinate_is_valid() {
        for p in all() {
            for city in p.cities.values() {
                assert!(city.center.is_valid());
                for d in &city.districts {
                    assert!(d.center.is_valid(), "{} {}", city.name, d.name);
                    assert!(d.population > 0);
                }
            }
            assert!(p.landmarks.iter().all(|l| l.coordinates.is_valid() && l.height > 0.0));
            assert!(p.venues.iter().all(|v| v.coordinates.is_valid() && v.capacity > 0));
            assert!(p.commercial_areas.iter().all(|a| a.coordinates.is_valid()));
        }
    }

    #[test]
    fn city_references_resolve() {
        for p in all() {
            for l in &p.landmarks {
                assert!(p.cities.contains_key(&l.city), "{}: landmark {} -> {}", p.name, l.name, l.city);
            }
            for a in &p.commercial_areas {
                assert!(p.cities.contains_key(&a.city), "{}: area {} -> {}", p.name, a.name, a.city);
            }
            for v in &p.venues {
                assert!(p.cities.contains_key(&v.city), "{}: venue {} -> {}", p.name, v.name, v.city);
            }
        }
    }

    #[test]
    fn named_networks_for_the_three_largest() {
        for name in ["東京都", "大阪府", "福岡県"] {
            let p = by_name(name).unwrap();
            assert!(!p.rail_lines.is_empty(), "{name} should carry rail lines");
            assert!(p.rail_lines.iter().all(|l| l.stations.len() >= 2));
        }
        assert!(by_name("広島県").unwrap().rail_lines.is_empty());
    }

    #[test]
    fn lookup_variants() {
        assert_eq!(by_name("広島県").unwrap().name_en, "hiroshima");
        assert_eq!(by_name("広島").unwrap().name, "広島県");
        assert_eq!(by_name("Tokyo").unwrap().name, "東京都");
        assert_eq!(by_name(" osaka ").unwrap().name, "大阪府");
        assert!(by_name("北海道").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn major_cities() {
        let hiroshima = by_name("hiroshima").unwrap();
        assert!(hiroshima.cities["hiroshima"].is_major());
        assert!(!hiroshima.cities["kure"].is_major());
    }
}

#[cfg(test)]
mod validation {
    use crate::{by_name, CatalogError, Prefecture};

    #[test]
    fn checked_center_on_shipped_catalog() {
        let p = by_name("hiroshima").unwrap();
        let c = p.checked_center().unwrap();
        assert_eq!(c, p.bounds.as_ref().unwrap().center.unwrap());
    }

    #[test]
    fn missing_center_is_reported() {
        let mut p = by_name("hiroshima").unwrap().clone();
        p.bounds.as_mut().unwrap().center = None;
        assert!(matches!(p.checked_center(), Err(CatalogError::MissingCenter(_))));
    }

    #[test]
    fn missing_bounds_and_cities() {
        let json = r#"{ "name": "架空県" }"#;
        let p = Prefecture::from_json_reader(json.as_bytes()).unwrap();
        assert!(matches!(p.checked_center(), Err(CatalogError::MissingBounds(_))));

        let json = r#"{
            "name": "架空県",
            "bounds": { "north": 35.0, "south": 34.0, "east": 133.0, "west": 132.0,
                        "center": [132.5, 34.5] }
        }"#;
        let p = Prefecture::from_json_reader(json.as_bytes()).unwrap();
        assert!(matches!(p.checked_center(), Err(CatalogError::NoCities(_))));
        assert_eq!(p.bounds.unwrap().default_zoom, 10.0);
    }

    #[test]
    fn json_round_trip_of_shipped_catalog() {
        let p = by_name("fukuoka").unwrap();
        let json = serde_json::to_string(p).unwrap();
        let back = Prefecture::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(&back, p);
    }
}

#[cfg(test)]
mod index {
    use ue_core::LngLat;

    use crate::{by_name, TouristIndex};

    #[test]
    fn indexes_only_tourist_landmarks() {
        let p = by_name("hiroshima").unwrap();
        let idx = TouristIndex::for_prefecture(p);
        assert_eq!(idx.len(), p.tourist_landmarks().count());
        // マツダスタジアム is not a tourist landmark; the nearest tourist
        // one is further than 0.01° away.
        let stadium = LngLat::new(132.4846, 34.3918);
        assert!(!idx.within(stadium, 0.01));
    }

    #[test]
    fn near_dome_is_within_threshold() {
        let p = by_name("hiroshima").unwrap();
        let idx = TouristIndex::for_prefecture(p);
        let near_dome = LngLat::new(132.4540, 34.3950);
        assert!(idx.within(near_dome, 0.01));
        let (i, d) = idx.nearest(near_dome).unwrap();
        assert_eq!(p.landmarks[i].name, "原爆ドーム");
        assert!(d < 0.001);
    }

    #[test]
    fn empty_index() {
        let idx = TouristIndex::from_points(&[]);
        assert!(idx.is_empty());
        assert!(idx.nearest(LngLat::new(0.0, 0.0)).is_none());
        assert!(!idx.within(LngLat::new(0.0, 0.0), 10.0));
    }
}

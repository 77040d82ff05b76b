//! Unit tests for ue-map.

use serde_json::json;
use ue_core::LngLat;
use ue_geojson::{collection, point_feature, FeatureCollection, JsonObject};

use crate::{DesiredState, LayerKind, LayerSpec};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn points(n: usize) -> FeatureCollection {
    collection(
        (0..n)
            .map(|i| point_feature(LngLat::new(132.4 + i as f64 * 0.01, 34.4), JsonObject::new()))
            .collect(),
    )
}

fn hotels_visible(visible: bool) -> DesiredState {
    DesiredState::new()
        .source("accommodation", points(3))
        .layer(
            LayerSpec::new("accommodation-circles", "accommodation", LayerKind::Circle)
                .paint("circle-radius", json!(6))
                .visible(visible)
                .interactive(),
        )
}

// ── Error classification ──────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use crate::{tolerate, MapError};

    #[test]
    fn transient_messages() {
        for msg in [
            "source 'x' already exists",
            "layer 'y' does not exist",
            "source 'z' not found",
            "style is not done loading",
        ] {
            let e = MapError::Renderer(msg.into());
            assert!(e.is_transient(), "{msg}");
            assert!(tolerate(Err(e)).is_ok());
        }
    }

    #[test]
    fn other_errors_propagate() {
        let e = MapError::Renderer("WebGL context lost".into());
        assert!(!e.is_transient());
        assert!(tolerate(Err(e)).is_err());

        let missing = MapError::MissingSource { layer: "a".into(), source_id: "b".into() };
        assert!(tolerate(Err(missing)).is_err());
    }
}

// ── Reconciliation ────────────────────────────────────────────────────────────

#[cfg(test)]
mod reconcile {
    use super::*;
    use crate::{InMemoryMap, MapEvent, MapHandle, MapOp, Reconciler};

    #[test]
    fn first_apply_adds_source_layer_and_handlers() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        let n = r.apply(&mut map, &hotels_visible(true)).unwrap();

        // source + layer + three handlers
        assert_eq!(n, 5);
        assert!(map.has_source("accommodation"));
        assert!(map.has_layer("accommodation-circles"));
        for event in MapEvent::INTERACTIVE {
            assert!(map.is_bound(event, "accommodation-circles"));
        }
    }

    #[test]
    fn reapplying_the_same_state_is_a_no_op() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        let desired = hotels_visible(true);
        r.apply(&mut map, &desired).unwrap();
        let calls = map.calls();

        assert!(r.plan(&desired).is_empty());
        assert_eq!(r.apply(&mut map, &desired).unwrap(), 0);
        assert_eq!(map.calls(), calls);
    }

    #[test]
    fn toggle_only_touches_visibility() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();

        let ops = r.plan(&hotels_visible(false));
        assert_eq!(ops, vec![MapOp::SetLayout {
            layer: "accommodation-circles".into(),
            name:  "visibility".into(),
            value: json!("none"),
        }]);
        r.apply(&mut map, &hotels_visible(false)).unwrap();
        assert!(!map.layer("accommodation-circles").unwrap().visible);
        assert_eq!(map.handler_count(), 3);
    }

    #[test]
    fn changed_data_replaces_source_wholesale() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();

        let mut next = hotels_visible(true);
        next.sources.insert("accommodation".into(), points(7));
        let ops = r.plan(&next);
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], MapOp::SetSourceData { id, .. } if id == "accommodation"));

        r.apply(&mut map, &next).unwrap();
        assert_eq!(map.source("accommodation").unwrap().features.len(), 7);
        assert_eq!(map.source_updates("accommodation"), 1);
    }

    #[test]
    fn removal_unbinds_then_drops_layer_before_source() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();

        let ops = r.plan(&DesiredState::new());
        let remove_layer = ops.iter().position(|o| matches!(o, MapOp::RemoveLayer { .. })).unwrap();
        let remove_source = ops.iter().position(|o| matches!(o, MapOp::RemoveSource { .. })).unwrap();
        assert!(ops[..remove_layer].iter().all(|o| matches!(o, MapOp::Unbind { .. })));
        assert!(remove_layer < remove_source);

        r.apply(&mut map, &DesiredState::new()).unwrap();
        assert!(!map.has_layer("accommodation-circles"));
        assert!(!map.has_source("accommodation"));
        assert_eq!(map.handler_count(), 0);
    }

    #[test]
    fn kind_change_replaces_the_layer() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();

        let heat = DesiredState::new()
            .source("accommodation", points(3))
            .layer(LayerSpec::new("accommodation-circles", "accommodation", LayerKind::Heatmap));
        r.apply(&mut map, &heat).unwrap();
        assert_eq!(map.layer("accommodation-circles").unwrap().kind, LayerKind::Heatmap);
        assert_eq!(map.handler_count(), 0);
    }

    #[test]
    fn draw_order_follows_desired_order() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        let desired = DesiredState::new()
            .source("heat", points(2))
            .source("events", points(2))
            .layer(LayerSpec::new("heatmap", "heat", LayerKind::Heatmap))
            .layer(LayerSpec::new("events-symbols", "events", LayerKind::Symbol));
        r.apply(&mut map, &desired).unwrap();
        assert_eq!(map.layer_order(), ["heatmap", "events-symbols"]);
    }

    #[test]
    fn layer_without_source_is_skipped() {
        let r = Reconciler::new();
        let desired = DesiredState::new().layer(LayerSpec::new("orphan", "nowhere", LayerKind::Line));
        assert!(r.plan(&desired).is_empty());
    }

    #[test]
    fn pre_existing_objects_are_tolerated() {
        let mut map = InMemoryMap::new();
        map.add_source("accommodation", &points(1)).unwrap();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();
        assert!(map.has_layer("accommodation-circles"));
        // The existing source was left alone.
        assert_eq!(map.source("accommodation").unwrap().features.len(), 1);
    }

    #[test]
    fn loading_style_retries_after_reset() {
        let mut map = InMemoryMap::loading();
        let mut r = Reconciler::new();
        r.apply(&mut map, &hotels_visible(true)).unwrap();
        assert!(!map.has_layer("accommodation-circles"));

        map.finish_loading();
        r.reset();
        r.apply(&mut map, &hotels_visible(true)).unwrap();
        assert!(map.has_layer("accommodation-circles"));
    }

    #[test]
    fn hard_error_keeps_previous_applied_state() {
        let mut map = InMemoryMap::new();
        let mut r = Reconciler::new();
        // Source removed behind the reconciler's back after first apply.
        r.apply(&mut map, &DesiredState::new().source("a", points(1))).unwrap();
        map.remove_source("a").unwrap();

        let desired = DesiredState::new()
            .source("a", points(1))
            .layer(LayerSpec::new("a-circles", "a", LayerKind::Circle));
        assert!(r.apply(&mut map, &desired).is_err());
        assert!(r.applied().layers.is_empty());
    }
}

// ── Flow frame sink ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sink {
    use ue_core::GenRng;
    use ue_flow::{AnimatorBuilder, FlowLoop, ManualClock, Visibility};
    use ue_geojson::empty_collection;
    use ue_mobility::{congestion_to_collection, generate_mobility, to_flow_layers};

    use crate::{FlowSources, InMemoryMap, MapHandle, MapSourceSink};

    fn flow_map() -> InMemoryMap {
        let mut map = InMemoryMap::new();
        let ids = FlowSources::default();
        for id in [&ids.particles, &ids.arcs, &ids.hubs] {
            map.add_source(id, &empty_collection()).unwrap();
        }
        map
    }

    #[test]
    fn frames_replace_all_three_sources() {
        let p = ue_catalog::by_name("hiroshima").unwrap();
        let mut rng = GenRng::new(3);
        let data = generate_mobility(Some(p), &mut rng);
        let layers = to_flow_layers(&data, &mut rng);
        let hubs = congestion_to_collection(&data.congestion_points);
        let animator = AnimatorBuilder::new(&layers.flows).hubs(&hubs).build().unwrap();
        let particles: u32 = animator.arcs().iter().map(|a| a.particle_count).sum();

        let mut map = flow_map();
        let mut clock = ManualClock::with_budget(4);
        let errors = {
            let mut sink = MapSourceSink::new(&mut map);
            FlowLoop::new(animator, &mut clock, Visibility::new(true)).run(&mut sink);
            sink.errors()
        };

        assert_eq!(errors, 0);
        let ids = FlowSources::default();
        for id in [&ids.particles, &ids.arcs, &ids.hubs] {
            assert_eq!(map.source_updates(id), 4);
        }
        assert_eq!(map.source(&ids.particles).unwrap().features.len(), particles as usize);
        assert_eq!(map.source(&ids.hubs).unwrap().features.len(), data.congestion_points.len());
    }

    #[test]
    fn missing_sources_do_not_stop_the_loop() {
        let animator = AnimatorBuilder::new(&empty_collection()).build().unwrap();
        let mut map = InMemoryMap::new();
        let mut clock = ManualClock::with_budget(2);
        let mut sink = MapSourceSink::new(&mut map);
        let n = FlowLoop::new(animator, &mut clock, Visibility::new(true)).run(&mut sink);
        assert_eq!(n, 2);
        assert_eq!(sink.errors(), 0);
    }
}

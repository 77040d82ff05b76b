//! Unit tests for ue-flow.

use ue_core::LngLat;
use ue_mobility::FlowDirection;

use crate::{FlowAnimator, FlowArc, Hub};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn straight_arc(congestion: f64, direction: FlowDirection) -> FlowArc {
    FlowArc {
        id:             "a".into(),
        points:         vec![LngLat::new(132.0, 34.0), LngLat::new(132.1, 34.0)],
        particle_count: 4,
        speed:          1.0,
        congestion,
        direction,
        distance_km:    9.2,
    }
}

fn animator() -> FlowAnimator {
    let hub = Hub {
        name:        "広島駅周辺".into(),
        coordinates: LngLat::new(132.4757, 34.3972),
        level:       0.7,
        radius:      800.0,
    };
    FlowAnimator::new(
        vec![straight_arc(0.3, FlowDirection::Forward), straight_arc(0.9, FlowDirection::Reverse)],
        vec![hub],
        0.002,
    )
}

// ── Bands and buckets ─────────────────────────────────────────────────────────

#[cfg(test)]
mod bands {
    use crate::{CongestionBand, distance_bucket, speed_multiplier};

    #[test]
    fn sweep_in_005_steps_has_no_gaps() {
        for i in 0..=20 {
            let c = f64::from(i) / 20.0;
            let expected = match i {
                16..=20 => CongestionBand::Red,
                12..=15 => CongestionBand::Orange,
                8..=11  => CongestionBand::Yellow,
                4..=7   => CongestionBand::LightGreen,
                _       => CongestionBand::Blue,
            };
            let band = CongestionBand::from_congestion(c);
            assert_eq!(band, expected, "congestion {c}");
            let matching = CongestionBand::ALL
                .iter()
                .filter(|b| b.core_color() == band.core_color())
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn speed_multiplier_range() {
        assert_eq!(speed_multiplier(0.0), 0.5);
        assert_eq!(speed_multiplier(1.0), 2.0);
        assert_eq!(speed_multiplier(5.0), 2.0);
        assert!((speed_multiplier(0.5) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn distance_buckets() {
        assert_eq!(distance_bucket(0.0), 0);
        assert_eq!(distance_bucket(19.9), 0);
        assert_eq!(distance_bucket(20.0), 1);
        assert_eq!(distance_bucket(99.0), 3);
        assert_eq!(distance_bucket(450.0), 5);
        assert_eq!(distance_bucket(800.0), 6);
    }
}

// ── Animator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animation {
    use super::*;
    use ue_geojson::{point_coordinates, validate_feature};

    #[test]
    fn phase_wraps_into_unit_interval() {
        let mut a = FlowAnimator::new(Vec::new(), Vec::new(), 0.3);
        for _ in 0..10 {
            a.advance();
            assert!((0.0..1.0).contains(&a.phase()));
        }
        assert_eq!(a.frames(), 10);
        assert!(a.time() > 0.0);
    }

    #[test]
    fn particles_are_evenly_offset() {
        let arc = straight_arc(0.0, FlowDirection::Forward);
        let fractions: Vec<f64> = (0..4).map(|k| arc.particle_fraction(0.0, k)).collect();
        assert_eq!(fractions, [0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn reverse_flows_run_backwards() {
        let fwd = straight_arc(0.5, FlowDirection::Forward);
        let rev = straight_arc(0.5, FlowDirection::Reverse);
        let p = fwd.particle_fraction(0.1, 1);
        assert!((rev.particle_fraction(0.1, 1) - (1.0 - p)).abs() < 1e-12);
    }

    #[test]
    fn congestion_speeds_particles_up() {
        let slow = straight_arc(0.0, FlowDirection::Forward);
        let fast = straight_arc(1.0, FlowDirection::Forward);
        // Speed multipliers 0.5 and 2.0.
        assert!((slow.particle_fraction(0.1, 0) - 0.05).abs() < 1e-12);
        assert!((fast.particle_fraction(0.1, 0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn frame_contents() {
        let mut a = animator();
        a.advance();
        let f = a.frame();
        assert_eq!(f.index, 1);
        assert_eq!(f.particles.features.len(), 8);
        assert_eq!(f.arcs.features.len(), 2);
        assert_eq!(f.hubs.features.len(), 1);
        assert!(f.particles.features.iter().all(validate_feature));
        for p in &f.particles.features {
            let at = point_coordinates(p).unwrap();
            assert!((132.0..=132.1).contains(&at.lng));
            let props = p.properties.as_ref().unwrap();
            let opacity = props["opacity"].as_f64().unwrap();
            assert!((0.6..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn pulse_is_shared_across_particles() {
        let mut a = animator();
        for _ in 0..7 {
            a.advance();
        }
        let f = a.frame();
        let opacities: Vec<f64> = f
            .particles
            .features
            .iter()
            .map(|p| p.properties.as_ref().unwrap()["opacity"].as_f64().unwrap())
            .collect();
        assert!(opacities.windows(2).all(|w| w[0] == w[1]));
    }
    #[test]
    fn particles_move_steadily_across_the_phase_wrap() {
        let arc = straight_arc(0.3, FlowDirection::Forward);
        let mut a = FlowAnimator::new(vec![arc.clone()], Vec::new(), 0.3);
        let expected = 0.3 * crate::speed_multiplier(0.3);
        let mut last = arc.particle_fraction(a.travel(), 0);
        for _ in 0..10 {
            a.advance();
            assert!((0.0..1.0).contains(&a.phase()));
            let now = arc.particle_fraction(a.travel(), 0);
            let delta = (now - last).rem_euclid(1.0);
            assert!((delta - expected).abs() < 1e-9, "step of {delta} at frame {}", a.frames());

            let f = a.frame();
            let lng = point_coordinates(&f.particles.features[0]).unwrap().lng;
            assert!((lng - (132.0 + 0.1 * now)).abs() < 1e-9);
            last = now;
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ue_core::GenRng;
    use ue_geojson::empty_collection;
    use ue_mobility::{congestion_to_collection, generate_mobility, to_flow_layers};

    use crate::{AnimatorBuilder, FlowError};

    #[test]
    fn from_generated_layers() {
        let p = ue_catalog::by_name("fukuoka").unwrap();
        let mut rng = GenRng::new(8);
        let data = generate_mobility(Some(p), &mut rng);
        let layers = to_flow_layers(&data, &mut rng);
        let hubs = congestion_to_collection(&data.congestion_points);

        let a = AnimatorBuilder::new(&layers.flows).hubs(&hubs).build().unwrap();
        assert_eq!(a.arcs().len(), layers.flows.features.len());
        assert_eq!(a.hubs().len(), data.congestion_points.len());
        let particles: u32 = a.arcs().iter().map(|arc| arc.particle_count).sum();
        assert_eq!(particles as usize, layers.particles.features.len());
    }

    #[test]
    fn empty_layers_build_an_idle_animator() {
        let flows = empty_collection();
        let mut a = AnimatorBuilder::new(&flows).build().unwrap();
        a.advance();
        let f = a.frame();
        assert!(f.particles.features.is_empty() && f.arcs.features.is_empty());
    }

    #[test]
    fn rejects_bad_phase_step() {
        let flows = empty_collection();
        for step in [0.0, 1.0, -0.1, f64::NAN] {
            let r = AnimatorBuilder::new(&flows).phase_step(step).build();
            assert!(matches!(r, Err(FlowError::Config(_))), "{step}");
        }
    }
}

// ── Frame loop and cancellation ───────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use std::time::Duration;

    use super::*;
    use crate::{CollectSink, FlowFrame, FlowLoop, FrameHandle, FrameSink, IntervalClock, ManualClock, NoopSink, Visibility};

    #[test]
    fn hidden_before_start_requests_nothing() {
        let vis = Visibility::new(false);
        let mut clock = ManualClock::new();
        let n = FlowLoop::new(animator(), &mut clock, vis).run(&mut NoopSink);
        assert_eq!(n, 0);
        assert_eq!(clock.requested(), 0);
    }

    #[test]
    fn hiding_cancels_the_pending_request() {
        let vis = Visibility::new(true);
        let mut clock = ManualClock::new().hide_after(vis.clone(), 5);
        let mut sink = CollectSink::default();
        let n = FlowLoop::new(animator(), &mut clock, vis.clone()).run(&mut sink);

        assert_eq!(n, 5);
        assert_eq!(sink.frames.len(), 5);
        assert_eq!(sink.stopped, Some(5));
        assert_eq!(clock.cancelled(), [FrameHandle(6)]);
        assert_eq!(clock.outstanding(), 0);
        assert!(!vis.is_visible());
    }

    /// Hides the layer from inside the frame callback.
    struct HideAfter {
        vis:   Visibility,
        after: usize,
        seen:  usize,
    }

    impl FrameSink for HideAfter {
        fn on_frame(&mut self, _frame: &FlowFrame) {
            self.seen += 1;
            if self.seen == self.after {
                self.vis.hide();
            }
        }
    }

    #[test]
    fn no_request_after_flag_flips() {
        let vis = Visibility::new(true);
        let mut clock = ManualClock::new();
        let mut sink = HideAfter { vis: vis.clone(), after: 3, seen: 0 };
        let n = FlowLoop::new(animator(), &mut clock, vis).run(&mut sink);
        assert_eq!(n, 3);
        assert_eq!(clock.requested(), 3);
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn exhausted_clock_stops_the_loop() {
        let mut clock = ManualClock::with_budget(4);
        let n = FlowLoop::new(animator(), &mut clock, Visibility::new(true)).run(&mut NoopSink);
        assert_eq!(n, 4);
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn drop_cancels_outstanding_request() {
        let mut clock = ManualClock::new();
        {
            let mut l = FlowLoop::new(animator(), &mut clock, Visibility::new(true));
            assert_eq!(l.schedule(), Some(FrameHandle(1)));
            // A second schedule reuses the outstanding request.
            assert_eq!(l.schedule(), Some(FrameHandle(1)));
        }
        assert_eq!(clock.cancelled(), [FrameHandle(1)]);
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn run_frames_steps_without_the_clock() {
        let mut clock = ManualClock::new();
        let mut sink = CollectSink::default();
        let mut l = FlowLoop::new(animator(), &mut clock, Visibility::new(false));
        l.run_frames(3, &mut sink);
        assert_eq!(l.animator().frames(), 3);
        let indices: Vec<u64> = sink.frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, [1, 2, 3]);
        drop(l);
        assert_eq!(clock.requested(), 0);
    }

    #[test]
    fn interval_clock_stops_when_hidden_from_another_thread() {
        let vis = Visibility::new(true);
        let worker_vis = vis.clone();
        let worker = std::thread::spawn(move || {
            let mut clock = IntervalClock::new(Duration::from_millis(1));
            let n = FlowLoop::new(animator(), &mut clock, worker_vis).run(&mut NoopSink);
            (n, clock.outstanding())
        });
        std::thread::sleep(Duration::from_millis(30));
        vis.hide();
        let (n, outstanding) = worker.join().unwrap();
        assert!(n > 0);
        assert_eq!(outstanding, 0);
    }
}

// ── Untrusted flow data ───────────────────────────────────────────────────────

#[cfg(test)]
mod flow_data {
    use serde_json::json;
    use ue_core::GenRng;
    use ue_geojson::{to_valid_geojson, GeometryType};
    use ue_mobility::{generate_mobility, to_flow_layers, MAX_PARTICLES, MIN_PARTICLES};

    use crate::{seed_flows, AnimatorBuilder, MAX_SPEED, MIN_SPEED};

    fn line(id: &str, particle_count: serde_json::Value, speed: f64) -> serde_json::Value {
        json!({
            "id": id,
            "coordinates": [[132.0, 34.0], [132.1, 34.05], [132.2, 34.1]],
            "particleCount": particle_count,
            "speed": speed,
        })
    }

    #[test]
    fn particle_count_and_speed_are_bounded() {
        let body = json!({ "data": [
            line("huge", json!(1.0e12), 1.0e9),
            line("negative", json!(-4), -3.0),
            line("fraction", json!(6.6), 0.5),
            line("text", json!("7"), 1.0),
        ]});
        let flows = to_valid_geojson(&body, GeometryType::LineString, &["particleCount", "speed"]);
        assert_eq!(flows.features.len(), 4);

        let a = AnimatorBuilder::new(&flows).build().unwrap();
        let counts: Vec<u32> = a.arcs().iter().map(|arc| arc.particle_count).collect();
        assert_eq!(counts, [MAX_PARTICLES, MIN_PARTICLES, 7, 7]);
        let speeds: Vec<f64> = a.arcs().iter().map(|arc| arc.speed).collect();
        assert_eq!(speeds, [MAX_SPEED, MIN_SPEED, 0.5, 1.0]);

        let frame = a.frame();
        assert_eq!(frame.particles.features.len(), (MAX_PARTICLES + MIN_PARTICLES + 14) as usize);
    }

    #[test]
    fn seeded_particles_follow_the_lines() {
        let body = json!({ "data": [
            line("be-1", json!(4), 1.0),
            { "coordinates": [[133.0, 34.0], [133.1, 34.1]], "particleCount": 3 },
        ]});
        let mut flows = to_valid_geojson(&body, GeometryType::LineString, &["particleCount"]);
        let particles = seed_flows(&mut flows);

        let ids: Vec<&str> = flows
            .features
            .iter()
            .map(|f| f.properties.as_ref().unwrap()["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["be-1", "flow-1"]);
        assert_eq!(particles.features.len(), 7);
        for p in &particles.features {
            let route = p.properties.as_ref().unwrap()["routeId"].as_str().unwrap();
            assert!(ids.contains(&route), "{route}");
        }
        for f in &flows.features {
            let props = f.properties.as_ref().unwrap();
            assert!(props["glowOpacity"].as_f64().is_some());
            assert!(props["distanceGroup"].as_u64().is_some());
            assert!(props["color"].as_str().is_some());
        }
    }

    #[test]
    fn seeding_keeps_generated_styling() {
        let p = ue_catalog::by_name("hiroshima").unwrap();
        let mut rng = GenRng::new(5);
        let mut layers = to_flow_layers(&generate_mobility(Some(p), &mut rng), &mut rng);
        let before = layers.flows.clone();
        let particles = seed_flows(&mut layers.flows);

        assert_eq!(particles.features.len(), layers.particles.features.len());
        for (old, new) in before.features.iter().zip(&layers.flows.features) {
            let (old, new) = (old.properties.as_ref().unwrap(), new.properties.as_ref().unwrap());
            assert_eq!(old["id"], new["id"]);
            assert_eq!(old["color"], new["color"]);
            assert!(new.contains_key("glowOpacity"));
        }
    }
}

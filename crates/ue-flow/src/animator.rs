//! Animation state and per-frame geometry.
//!
//! # Particle placement
//!
//! Particle `k` of `n` on an arc sits at fraction
//!
//!   p = fract(s × speed × speed_multiplier(congestion) + k / n)
//!
//! of the arc (`1 − p` for reverse flows), interpolated along the arc's
//! vertices.  `s = frames × step` is the unwrapped travel; the reported
//! `phase ∈ [0, 1)` is `s mod 1`.  Scaling the unwrapped value keeps every
//! particle moving continuously when the phase wraps.
//!
//! # Pulses
//!
//! All colour/opacity modulation is keyed to one shared time base, not to
//! per-particle phase, so every particle of a band breathes together.  Arc
//! glow uses a second wave offset by distance bucket, so short and long
//! connections light up in turn.

use std::f64::consts::TAU;

use serde_json::json;

use ue_core::LngLat;
use ue_geojson::{
    collection, line_feature, point_feature, properties, with_id, FeatureCollection,
};
use ue_mobility::{point_along, CongestionBand, FlowDirection};

/// Upper edges (km) of the distance buckets; beyond the last is one more
/// bucket.
pub const DISTANCE_BUCKETS_KM: [f64; 6] = [20.0, 40.0, 60.0, 100.0, 200.0, 500.0];

/// Seconds of shared time base per frame (60 fps).
const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Particle pulse period, seconds.
const PULSE_PERIOD: f64 = 2.0;
/// Arc glow wave period, seconds.
const WAVE_PERIOD: f64 = 4.0;
/// Phase offset between neighbouring distance buckets, radians.
const BUCKET_OFFSET: f64 = TAU / 7.0;

/// Congestion `[0, 1]` → speed multiplier `[0.5, 2.0]`.
pub fn speed_multiplier(congestion: f64) -> f64 {
    0.5 + 1.5 * congestion.clamp(0.0, 1.0)
}

/// Index of the distance bucket `km` falls in, `0..=6`.
pub fn distance_bucket(km: f64) -> usize {
    DISTANCE_BUCKETS_KM
        .iter()
        .position(|&edge| km < edge)
        .unwrap_or(DISTANCE_BUCKETS_KM.len())
}

/// One animated connection.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowArc {
    pub id:             String,
    pub points:         Vec<LngLat>,
    pub particle_count: u32,
    pub speed:          f64,
    pub congestion:     f64,
    pub direction:      FlowDirection,
    pub distance_km:    f64,
}

impl FlowArc {
    /// Fraction along the arc of particle `k` after `travel` (unwrapped
    /// phase).
    pub fn particle_fraction(&self, travel: f64, k: u32) -> f64 {
        let n = f64::from(self.particle_count.max(1));
        let p = (travel * self.speed * speed_multiplier(self.congestion) + f64::from(k) / n).rem_euclid(1.0);
        match self.direction {
            FlowDirection::Forward => p,
            FlowDirection::Reverse => 1.0 - p,
        }
    }

    pub fn band(&self) -> CongestionBand {
        CongestionBand::from_congestion(self.congestion)
    }
}

/// A pulsing anchor point (station, commercial area, venue).
#[derive(Clone, Debug, PartialEq)]
pub struct Hub {
    pub name:        String,
    pub coordinates: LngLat,
    pub level:       f64,
    pub radius:      f64,
}

/// Everything published for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowFrame {
    pub index:     u64,
    pub particles: FeatureCollection,
    pub arcs:      FeatureCollection,
    pub hubs:      FeatureCollection,
}

/// Owns the arcs and hubs and the two clocks that drive them.
#[derive(Clone, Debug)]
pub struct FlowAnimator {
    arcs:   Vec<FlowArc>,
    hubs:   Vec<Hub>,
    step:   f64,
    phase:  f64,
    time:   f64,
    frames: u64,
}

impl FlowAnimator {
    /// `phase_step` is not validated here; use
    /// [`AnimatorBuilder`](crate::AnimatorBuilder) for checked construction.
    pub fn new(arcs: Vec<FlowArc>, hubs: Vec<Hub>, phase_step: f64) -> Self {
        Self { arcs, hubs, step: phase_step, phase: 0.0, time: 0.0, frames: 0 }
    }

    pub fn arcs(&self) -> &[FlowArc] {
        &self.arcs
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase before wrapping: `frames × step`.
    #[inline]
    pub fn travel(&self) -> f64 {
        self.frames as f64 * self.step
    }

    /// Shared time base, seconds.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Move one frame forward.
    pub fn advance(&mut self) {
        self.phase = (self.phase + self.step).rem_euclid(1.0);
        self.time += FRAME_SECONDS;
        self.frames += 1;
    }

    /// Particle breathing factor in `[0, 1]`.
    pub fn pulse(&self) -> f64 {
        0.5 + 0.5 * (TAU * self.time / PULSE_PERIOD).sin()
    }

    /// Arc glow factor in `[0, 1]` for distance bucket `bucket`.
    pub fn glow_wave(&self, bucket: usize) -> f64 {
        0.5 + 0.5 * (TAU * self.time / WAVE_PERIOD - bucket as f64 * BUCKET_OFFSET).sin()
    }

    /// Build the current frame.
    pub fn frame(&self) -> FlowFrame {
        FlowFrame {
            index:     self.frames,
            particles: self.particles(),
            arcs:      self.arc_lines(),
            hubs:      self.hub_points(),
        }
    }

    fn particles(&self) -> FeatureCollection {
        let pulse = self.pulse();
        let travel = self.travel();
        let mut features = Vec::new();
        for arc in &self.arcs {
            let band = arc.band();
            for k in 0..arc.particle_count {
                let Some(at) = point_along(&arc.points, arc.particle_fraction(travel, k)) else {
                    continue;
                };
                features.push(point_feature(
                    at,
                    properties(json!({
                        "routeId":      arc.id,
                        "congestion":   arc.congestion,
                        "coreColor":    band.core_color(),
                        "glowColor":    band.glow_color(),
                        "opacity":      0.6 + 0.4 * pulse,
                        "glowOpacity":  0.2 + 0.4 * pulse,
                    })),
                ));
            }
        }
        collection(features)
    }

    fn arc_lines(&self) -> FeatureCollection {
        let features = self
            .arcs
            .iter()
            .map(|arc| {
                let bucket = distance_bucket(arc.distance_km);
                let props = properties(json!({
                    "id":           arc.id,
                    "congestion":   arc.congestion,
                    "color":        arc.band().core_color(),
                    "distanceGroup": bucket,
                    "glowOpacity":  0.1 + 0.6 * self.glow_wave(bucket),
                }));
                with_id(line_feature(&arc.points, props), arc.id.clone())
            })
            .collect();
        collection(features)
    }

    fn hub_points(&self) -> FeatureCollection {
        let pulse = self.pulse();
        let features = self
            .hubs
            .iter()
            .map(|hub| {
                let band = CongestionBand::from_congestion(hub.level);
                point_feature(
                    hub.coordinates,
                    properties(json!({
                        "name":    hub.name,
                        "level":   hub.level,
                        "radius":  hub.radius * (1.0 + 0.2 * pulse),
                        "color":   band.core_color(),
                        "opacity": 0.5 + 0.5 * pulse,
                    })),
                )
            })
            .collect();
        collection(features)
    }
}

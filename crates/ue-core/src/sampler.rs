//! Gaussian point clouds around a centre.

use crate::{GenRng, LngLat};

/// Place `count` points around `center`, each offset by a 2-D Gaussian with
/// standard deviation `spread` degrees on both axes.
///
/// The result is not clipped to any bounds; callers that need valid
/// coordinates must check them.
pub fn sample_around(center: LngLat, count: usize, spread: f64, rng: &mut GenRng) -> Vec<LngLat> {
    (0..count)
        .map(|_| {
            let (dx, dy) = rng.normal_pair();
            center.offset(dx * spread, dy * spread)
        })
        .collect()
}

//! Spatial index over tourist landmarks.
//!
//! An R-tree (via `rstar`) over `[lng, lat]` points answers "is any tourist
//! landmark within `radius` degrees of this point".  Distances are plain
//! Euclidean in degree space, the same approximation the consumption
//! generator's 0.01° threshold is tuned against.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ue_core::LngLat;

use crate::Prefecture;

/// Entry stored in the R-tree: a landmark position and its catalog index.
#[derive(Clone)]
struct LandmarkEntry {
    point: [f64; 2], // [lng, lat]
    idx:   usize,
}

impl RTreeObject for LandmarkEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LandmarkEntry {
    /// Squared Euclidean distance in degree space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlng = self.point[0] - point[0];
        let dlat = self.point[1] - point[1];
        dlng * dlng + dlat * dlat
    }
}

/// Nearest-landmark queries over a prefecture's tourist landmarks.
pub struct TouristIndex {
    tree: RTree<LandmarkEntry>,
}

impl TouristIndex {
    /// Bulk-load every `tourist` landmark of `prefecture`.
    pub fn for_prefecture(prefecture: &Prefecture) -> Self {
        let entries = prefecture
            .landmarks
            .iter()
            .enumerate()
            .filter(|(_, l)| l.tourist)
            .map(|(idx, l)| LandmarkEntry {
                point: [l.coordinates.lng, l.coordinates.lat],
                idx,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Index over arbitrary points (the catalog index is the slice position).
    pub fn from_points(points: &[LngLat]) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(idx, p)| LandmarkEntry { point: [p.lng, p.lat], idx })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Catalog index and degree distance of the nearest tourist landmark.
    pub fn nearest(&self, p: LngLat) -> Option<(usize, f64)> {
        let q = [p.lng, p.lat];
        self.tree
            .nearest_neighbor(&q)
            .map(|e| (e.idx, e.distance_2(&q).sqrt()))
    }

    /// `true` if a tourist landmark lies within `radius` degrees of `p`.
    pub fn within(&self, p: LngLat, radius: f64) -> bool {
        self.nearest(p).is_some_and(|(_, d)| d <= radius)
    }
}

//! Plain data row types written by output backends.

/// One animated particle in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRow {
    pub frame:      u64,
    pub arc_id:     String,
    /// Index of the particle along its arc, `0..particle_count`.
    pub particle:   u32,
    pub lng:        f64,
    pub lat:        f64,
    pub core_color: String,
}

/// Feature count of one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSummaryRow {
    pub layer:         String,
    pub feature_count: usize,
}

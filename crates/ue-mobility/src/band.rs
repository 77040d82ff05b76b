//! Congestion colour bands.

use serde::{Deserialize, Serialize};

/// Five half-open congestion bands with lower bounds 0.8, 0.6, 0.4 and 0.2.
///
/// Every finite value falls in exactly one band; values at a boundary belong
/// to the higher band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CongestionBand {
    Red,
    Orange,
    Yellow,
    LightGreen,
    Blue,
}

impl CongestionBand {
    pub const ALL: [CongestionBand; 5] = [
        CongestionBand::Red,
        CongestionBand::Orange,
        CongestionBand::Yellow,
        CongestionBand::LightGreen,
        CongestionBand::Blue,
    ];

    pub fn from_congestion(c: f64) -> CongestionBand {
        if c >= 0.8 {
            CongestionBand::Red
        } else if c >= 0.6 {
            CongestionBand::Orange
        } else if c >= 0.4 {
            CongestionBand::Yellow
        } else if c >= 0.2 {
            CongestionBand::LightGreen
        } else {
            CongestionBand::Blue
        }
    }

    /// Particle centre colour.
    pub fn core_color(self) -> &'static str {
        match self {
            CongestionBand::Red        => "#FF1744",
            CongestionBand::Orange     => "#FF9100",
            CongestionBand::Yellow     => "#FFEA00",
            CongestionBand::LightGreen => "#76FF03",
            CongestionBand::Blue       => "#00B0FF",
        }
    }

    /// Halo colour drawn under the core.
    pub fn glow_color(self) -> &'static str {
        match self {
            CongestionBand::Red        => "#FF5252",
            CongestionBand::Orange     => "#FFAB40",
            CongestionBand::Yellow     => "#FFFF8D",
            CongestionBand::LightGreen => "#B2FF59",
            CongestionBand::Blue       => "#40C4FF",
        }
    }
}

//! Fixed inter-prefecture connections.
//!
//! Shinkansen segments between named stations, national expressways with
//! intermediate waypoints, and four domestic air routes.  The flow counts
//! and congestion figures are fixed display values, not generated.

use ue_core::{GenRng, LngLat, RouteKind};

use crate::layers::{routes_to_layers, FlowLayers};
use crate::MobilityRoute;

/// A static route plus its nominal daily flow count.
#[derive(Clone, Debug, PartialEq)]
pub struct InterPrefectureRoute {
    pub route:       MobilityRoute,
    pub daily_flows: u32,
}

// ── Stations, interchanges and airports ───────────────────────────────────────

type Site = (&'static str, f64, f64);

const TOKYO:          Site = ("東京",   139.7671, 35.6812);
const SHIN_OSAKA:     Site = ("新大阪", 135.5002, 34.7334);
const FUKUYAMA:       Site = ("福山",   133.3625, 34.4893);
const HIROSHIMA:      Site = ("広島",   132.4757, 34.3972);
const SHIN_YAMAGUCHI: Site = ("新山口", 131.3960, 34.0940);
const KOKURA:         Site = ("小倉",   130.8824, 33.8868);
const HAKATA:         Site = ("博多",   130.4206, 33.5897);

const HANEDA:         Site = ("羽田空港",     139.7798, 35.5494);
const ITAMI:          Site = ("伊丹空港",     135.4380, 34.7855);
const HIROSHIMA_AP:   Site = ("広島空港",     132.9194, 34.4361);
const FUKUOKA_AP:     Site = ("福岡空港",     130.4511, 33.5859);
const UBE_AP:         Site = ("山口宇部空港", 131.2789, 33.9300);

/// (from, to, daily flows, congestion)
const SHINKANSEN: &[(Site, Site, u32, f64)] = &[
    (TOKYO,          SHIN_OSAKA,     360, 0.85),
    (SHIN_OSAKA,     FUKUYAMA,       190, 0.70),
    (FUKUYAMA,       HIROSHIMA,      170, 0.65),
    (HIROSHIMA,      SHIN_YAMAGUCHI, 120, 0.55),
    (SHIN_YAMAGUCHI, KOKURA,         110, 0.50),
    (KOKURA,         HAKATA,         160, 0.60),
];

/// (name, waypoints, daily flows, congestion)
const EXPRESSWAYS: &[(&str, &[(f64, f64)], u32, f64)] = &[
    (
        "東名・名神高速道路",
        &[(139.7671, 35.6812), (138.3831, 34.9756), (136.9066, 35.1815), (135.7681, 35.0116), (135.5002, 34.7334)],
        420,
        0.80,
    ),
    (
        "山陽自動車道",
        &[(135.5002, 34.7334), (134.6939, 34.8151), (133.9195, 34.6551), (133.3625, 34.4893), (132.4757, 34.3972)],
        260,
        0.65,
    ),
    (
        "山陽自動車道（広島–山口）",
        &[(132.4757, 34.3972), (131.8000, 34.1500), (131.4735, 34.1784), (130.9410, 33.9570)],
        150,
        0.45,
    ),
    (
        "九州自動車道",
        &[(130.9410, 33.9570), (130.8824, 33.8868), (130.6200, 33.7500), (130.4206, 33.5897)],
        210,
        0.60,
    ),
];

/// (from, to, daily flights, congestion)
const AIR: &[(Site, Site, u32, f64)] = &[
    (HANEDA, HIROSHIMA_AP, 17, 0.55),
    (HANEDA, FUKUOKA_AP,   50, 0.75),
    (HANEDA, UBE_AP,       10, 0.40),
    (ITAMI,  FUKUOKA_AP,   15, 0.50),
];

fn at((_, lng, lat): Site) -> LngLat {
    LngLat::new(lng, lat)
}

/// The full static table.
pub fn inter_prefecture_routes() -> Vec<InterPrefectureRoute> {
    let mut out = Vec::with_capacity(SHINKANSEN.len() + EXPRESSWAYS.len() + AIR.len());

    for (i, &(from, to, flows, congestion)) in SHINKANSEN.iter().enumerate() {
        out.push(InterPrefectureRoute {
            route: MobilityRoute {
                id:         format!("inter-shinkansen-{i}"),
                name:       format!("新幹線 {}–{}", from.0, to.0),
                kind:       RouteKind::Shinkansen,
                points:     vec![at(from), at(to)],
                congestion,
                flow_speed: RouteKind::Shinkansen.base_speed(),
                category:   "新幹線".to_owned(),
            },
            daily_flows: flows,
        });
    }

    for (i, &(name, waypoints, flows, congestion)) in EXPRESSWAYS.iter().enumerate() {
        out.push(InterPrefectureRoute {
            route: MobilityRoute {
                id:         format!("inter-expressway-{i}"),
                name:       name.to_owned(),
                kind:       RouteKind::Highway,
                points:     waypoints.iter().map(|&(lng, lat)| LngLat::new(lng, lat)).collect(),
                congestion,
                flow_speed: 0.2 + 2.0 * (1.0 - congestion),
                category:   "高速道路".to_owned(),
            },
            daily_flows: flows,
        });
    }

    for (i, &(from, to, flights, congestion)) in AIR.iter().enumerate() {
        out.push(InterPrefectureRoute {
            route: MobilityRoute {
                id:         format!("inter-air-{i}"),
                name:       format!("{}→{}", from.0, to.0),
                kind:       RouteKind::Air,
                points:     vec![at(from), at(to)],
                congestion,
                flow_speed: RouteKind::Air.base_speed(),
                category:   "航空".to_owned(),
            },
            daily_flows: flights,
        });
    }

    out
}

/// Flow layers for the static table.
pub fn inter_prefecture_layers(rng: &mut GenRng) -> FlowLayers {
    let table = inter_prefecture_routes();
    routes_to_layers(table.iter().map(|r| (&r.route, Some(r.daily_flows))), rng)
}

//! 広島県

use ue_core::{DistrictKind::*, LandmarkCategory as L, VenueKind};

use super::{area, bounds, city, district, keyed, landmark, venue};
use crate::Prefecture;

pub(super) fn prefecture() -> Prefecture {
    Prefecture {
        name: "広島県".to_owned(),
        name_en: "hiroshima".to_owned(),
        bounds: Some(bounds(35.10, 34.00, 133.50, 132.00, (132.4553, 34.3853), 10.0)),
        cities: keyed(vec![
            ("hiroshima", city(
                "広島市", "Hiroshima", (132.4553, 34.3853), 1_200_000,
                vec![
                    district("中区",     132.4596, 34.3915, 140_000, Business),
                    district("南区",     132.4757, 34.3797, 142_000, Mixed),
                    district("西区",     132.4297, 34.3924, 190_000, Mixed),
                    district("東区",     132.4806, 34.4053, 120_000, Mixed),
                    district("安佐南区", 132.4711, 34.4539, 245_000, Mixed),
                    district("安佐北区", 132.5080, 34.5089, 140_000, Mixed),
                    district("安芸区",   132.5369, 34.3729,  80_000, Mixed),
                    district("佐伯区",   132.3600, 34.3638, 135_000, Mixed),
                ],
                &["原爆ドーム", "平和記念公園", "広島城", "縮景園"],
                &["紙屋町", "八丁堀", "本通り", "広島駅前"],
            )),
            ("fukuyama", city(
                "福山市", "Fukuyama", (133.3625, 34.4858), 460_000,
                vec![
                    district("福山中心部", 133.3625, 34.4858, 150_000, Business),
                    district("鞆の浦",     133.3833, 34.3833,   4_000, Tourist),
                    district("神辺",       133.3833, 34.5419,  43_000, Mixed),
                    district("松永",       133.2600, 34.4450,  40_000, Mixed),
                ],
                &["福山城", "鞆の浦"],
                &["福山駅前"],
            )),
            ("kure", city(
                "呉市", "Kure", (132.5658, 34.2492), 210_000,
                vec![
                    district("呉中央", 132.5658, 34.2492, 60_000, Business),
                    district("広",     132.6300, 34.2350, 40_000, Mixed),
                    district("音戸",   132.5380, 34.1990, 10_000, Tourist),
                ],
                &["大和ミュージアム", "てつのくじら館"],
                &["呉駅前", "れんがどおり"],
            )),
            ("hatsukaichi", city(
                "廿日市市", "Hatsukaichi", (132.3317, 34.3483), 115_000,
                vec![
                    district("宮島",       132.3196, 34.2960,  1_500, Tourist),
                    district("廿日市中心", 132.3317, 34.3483, 70_000, Mixed),
                ],
                &["厳島神社"],
                &["宮島表参道商店街"],
            )),
            ("onomichi", city(
                "尾道市", "Onomichi", (133.2050, 34.4090), 130_000,
                vec![
                    district("尾道中心部", 133.2050, 34.4090, 60_000, Tourist),
                    district("因島",       133.1850, 34.3120, 22_000, Mixed),
                ],
                &["千光寺", "しまなみ海道"],
                &["尾道商店街"],
            )),
            ("higashihiroshima", city(
                "東広島市", "Higashihiroshima", (132.7431, 34.4264), 190_000,
                vec![
                    district("西条",   132.7431, 34.4264, 80_000, Business),
                    district("八本松", 132.6900, 34.4400, 30_000, Mixed),
                ],
                &["酒蔵通り"],
                &["西条駅前"],
            )),
        ]),
        landmarks: vec![
            landmark("原爆ドーム",       "hiroshima",   132.4536, 34.3955, 25.0, L::History,     true),
            landmark("平和記念公園",     "hiroshima",   132.4520, 34.3915, 15.0, L::Park,        true),
            landmark("広島城",           "hiroshima",   132.4594, 34.4027, 39.0, L::History,     true),
            landmark("縮景園",           "hiroshima",   132.4676, 34.4000, 10.0, L::Park,        true),
            landmark("マツダスタジアム", "hiroshima",   132.4846, 34.3918, 40.0, L::Sports,      false),
            landmark("広島駅",           "hiroshima",   132.4757, 34.3972, 30.0, L::Transit,     false),
            landmark("厳島神社",         "hatsukaichi", 132.3196, 34.2960, 16.0, L::Shrine,      true),
            landmark("大和ミュージアム", "kure",        132.5560, 34.2410, 20.0, L::Museum,      true),
            landmark("福山城",           "fukuyama",    133.3612, 34.4900, 30.0, L::History,     true),
            landmark("千光寺",           "onomichi",    133.1970, 34.4100, 15.0, L::Shrine,      true),
        ],
        commercial_areas: vec![
            area("紙屋町",           "hiroshima",        132.4560, 34.3950),
            area("八丁堀",           "hiroshima",        132.4630, 34.3940),
            area("本通り",           "hiroshima",        132.4575, 34.3930),
            area("広島駅前",         "hiroshima",        132.4757, 34.3972),
            area("福山駅前",         "fukuyama",         133.3625, 34.4890),
            area("呉駅前",           "kure",             132.5650, 34.2470),
            area("れんがどおり",     "kure",             132.5640, 34.2480),
            area("宮島表参道商店街", "hatsukaichi",      132.3210, 34.2980),
            area("尾道商店街",       "onomichi",         133.2000, 34.4080),
            area("西条駅前",         "higashihiroshima", 132.7431, 34.4270),
        ],
        venues: vec![
            venue("マツダスタジアム",       "hiroshima",   132.4846, 34.3918, 33_000, VenueKind::Stadium),
            venue("広島グリーンアリーナ",   "hiroshima",   132.4560, 34.3990, 10_000, VenueKind::Arena),
            venue("平和記念公園",           "hiroshima",   132.4520, 34.3915, 50_000, VenueKind::Park),
            venue("宮島",                   "hatsukaichi", 132.3196, 34.2960, 20_000, VenueKind::Shrine),
            venue("福山ばら公園",           "fukuyama",    133.3490, 34.4860, 15_000, VenueKind::Park),
        ],
        rail_lines: Vec::new(),
    }
}

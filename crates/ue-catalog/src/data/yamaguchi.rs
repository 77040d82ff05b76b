//! 山口県

use ue_core::{DistrictKind::*, LandmarkCategory as L, VenueKind};

use super::{area, bounds, city, district, keyed, landmark, venue};
use crate::Prefecture;

pub(super) fn prefecture() -> Prefecture {
    Prefecture {
        name: "山口県".to_owned(),
        name_en: "yamaguchi".to_owned(),
        bounds: Some(bounds(34.80, 33.70, 132.50, 130.75, (131.4714, 34.1859), 9.0)),
        cities: keyed(vec![
            ("shimonoseki", city(
                "下関市", "Shimonoseki", (130.9417, 33.9578), 250_000,
                vec![
                    district("下関駅周辺", 130.9230, 33.9500, 80_000, Business),
                    district("唐戸",       130.9450, 33.9570, 30_000, Tourist),
                    district("長府",       130.9900, 34.0150, 40_000, Mixed),
                ],
                &["唐戸市場", "赤間神宮"],
                &["下関駅前"],
            )),
            ("yamaguchi", city(
                "山口市", "Yamaguchi", (131.4714, 34.1859), 190_000,
                vec![
                    district("山口中心部", 131.4714, 34.1859, 80_000, Mixed),
                    district("湯田温泉",   131.4560, 34.1600, 20_000, Tourist),
                    district("小郡",       131.3966, 34.0937, 25_000, Business),
                ],
                &["瑠璃光寺五重塔"],
                &["山口駅前"],
            )),
            ("iwakuni", city(
                "岩国市", "Iwakuni", (132.2200, 34.1664), 130_000,
                vec![
                    district("岩国中心部", 132.2200, 34.1664, 60_000, Mixed),
                    district("錦帯橋周辺", 132.1790, 34.1676,  5_000, Tourist),
                ],
                &["錦帯橋"],
                &["岩国駅前"],
            )),
            ("ube", city(
                "宇部市", "Ube", (131.2467, 33.9517), 160_000,
                vec![
                    district("宇部中心部", 131.2467, 33.9517, 90_000, Business),
                    district("常盤",       131.2790, 33.9610, 20_000, Mixed),
                ],
                &["ときわ公園"],
                &["宇部新川"],
            )),
            ("hagi", city(
                "萩市", "Hagi", (131.3994, 34.4081), 45_000,
                vec![
                    district("萩中心部", 131.3994, 34.4081, 30_000, Tourist),
                ],
                &["萩城下町"],
                &["萩東浜崎"],
            )),
        ]),
        landmarks: vec![
            landmark("錦帯橋",         "iwakuni",     132.1790, 34.1676, 10.0, L::History, true),
            landmark("瑠璃光寺五重塔", "yamaguchi",   131.4733, 34.1905, 31.0, L::Shrine,  true),
            landmark("赤間神宮",       "shimonoseki", 130.9590, 33.9600, 15.0, L::Shrine,  true),
            landmark("唐戸市場",       "shimonoseki", 130.9450, 33.9570, 12.0, L::Commercial, true),
            landmark("海峡ゆめタワー", "shimonoseki", 130.9230, 33.9530, 153.0, L::Observation, true),
            landmark("ときわ公園",     "ube",         131.2790, 33.9610, 10.0, L::Park,    true),
            landmark("萩城跡",         "hagi",        131.3860, 34.4190, 10.0, L::History, true),
            landmark("新山口駅",       "yamaguchi",   131.3966, 34.0937, 25.0, L::Transit, false),
        ],
        commercial_areas: vec![
            area("下関駅前", "shimonoseki", 130.9230, 33.9500),
            area("山口駅前", "yamaguchi",   131.4770, 34.1710),
            area("岩国駅前", "iwakuni",     132.2200, 34.1700),
            area("宇部新川", "ube",         131.2467, 33.9480),
            area("萩東浜崎", "hagi",        131.4050, 34.4190),
        ],
        venues: vec![
            venue("維新百年記念公園", "yamaguchi",   131.4530, 34.1660, 20_000, VenueKind::Park),
            venue("海峡メッセ下関",   "shimonoseki", 130.9410, 33.9540, 10_000, VenueKind::Exhibition),
            venue("錦帯橋",           "iwakuni",     132.1790, 34.1676, 15_000, VenueKind::Park),
            venue("赤間神宮",         "shimonoseki", 130.9590, 33.9600,  8_000, VenueKind::Shrine),
        ],
        rail_lines: Vec::new(),
    }
}

//! 大阪府

use ue_core::{DistrictKind::*, LandmarkCategory as L, LineCategory, RouteKind, VenueKind};

use super::{area, bounds, city, district, keyed, landmark, line, venue};
use crate::Prefecture;

pub(super) fn prefecture() -> Prefecture {
    Prefecture {
        name: "大阪府".to_owned(),
        name_en: "osaka".to_owned(),
        bounds: Some(bounds(35.05, 34.27, 135.75, 135.10, (135.5023, 34.6937), 10.0)),
        cities: keyed(vec![
            ("osaka", city(
                "大阪市", "Osaka", (135.5023, 34.6937), 2_750_000,
                vec![
                    district("北区",     135.5100, 34.7055, 140_000, Business),
                    district("中央区",   135.5100, 34.6810, 100_000, Business),
                    district("浪速区",   135.4990, 34.6590,  75_000, Tourist),
                    district("天王寺区", 135.5190, 34.6540,  80_000, Mixed),
                    district("西区",     135.4870, 34.6760, 105_000, Mixed),
                    district("淀川区",   135.4860, 34.7210, 180_000, Mixed),
                    district("住吉区",   135.5000, 34.6040, 150_000, Mixed),
                    district("此花区",   135.4320, 34.6830,  65_000, Tourist),
                ],
                &["大阪城", "通天閣", "道頓堀", "ユニバーサル・スタジオ・ジャパン"],
                &["梅田", "難波", "心斎橋", "天王寺"],
            )),
            ("sakai", city(
                "堺市", "Sakai", (135.4830, 34.5733), 820_000,
                vec![
                    district("堺区", 135.4830, 34.5733, 150_000, Tourist),
                    district("北区", 135.5000, 34.5700, 160_000, Mixed),
                    district("中区", 135.5090, 34.5390, 120_000, Mixed),
                ],
                &["仁徳天皇陵古墳"],
                &["堺東"],
            )),
            ("higashiosaka", city(
                "東大阪市", "Higashiosaka", (135.6008, 34.6794), 480_000,
                vec![
                    district("布施",   135.5640, 34.6650, 120_000, Business),
                    district("花園",   135.6180, 34.6680,  80_000, Mixed),
                ],
                &["花園ラグビー場"],
                &["布施"],
            )),
            ("toyonaka", city(
                "豊中市", "Toyonaka", (135.4694, 34.7814), 400_000,
                vec![
                    district("豊中中心部", 135.4694, 34.7814, 200_000, Mixed),
                ],
                &[],
                &["千里中央"],
            )),
            ("suita", city(
                "吹田市", "Suita", (135.5167, 34.7594), 380_000,
                vec![
                    district("千里",     135.5330, 34.8090, 150_000, Tourist),
                    district("吹田中心", 135.5167, 34.7594, 120_000, Mixed),
                ],
                &["万博記念公園"],
                &[],
            )),
        ]),
        landmarks: vec![
            landmark("大阪城",                         "osaka", 135.5262, 34.6873,  55.0, L::History,     true),
            landmark("通天閣",                         "osaka", 135.5063, 34.6525, 108.0, L::Observation, true),
            landmark("あべのハルカス",                 "osaka", 135.5135, 34.6457, 300.0, L::Observation, true),
            landmark("梅田スカイビル",                 "osaka", 135.4906, 34.7053, 173.0, L::Observation, true),
            landmark("道頓堀",                         "osaka", 135.5013, 34.6687,  20.0, L::Commercial,  true),
            landmark("ユニバーサル・スタジオ・ジャパン", "osaka", 135.4323, 34.6654,  30.0, L::ThemePark,   true),
            landmark("海遊館",                         "osaka", 135.4290, 34.6545,  40.0, L::Aquarium,    true),
            landmark("大阪駅",                         "osaka", 135.4959, 34.7024, 150.0, L::Transit,     false),
            landmark("仁徳天皇陵古墳",                 "sakai", 135.4870, 34.5640,  35.0, L::History,     true),
            landmark("万博記念公園 太陽の塔",          "suita", 135.5323, 34.8094,  70.0, L::Park,        true),
        ],
        commercial_areas: vec![
            area("梅田",     "osaka",        135.4983, 34.7025),
            area("難波",     "osaka",        135.5010, 34.6660),
            area("心斎橋",   "osaka",        135.5010, 34.6750),
            area("天王寺",   "osaka",        135.5140, 34.6460),
            area("堺東",     "sakai",        135.4870, 34.5730),
            area("布施",     "higashiosaka", 135.5640, 34.6650),
            area("千里中央", "toyonaka",     135.4950, 34.8090),
        ],
        venues: vec![
            venue("京セラドーム大阪",   "osaka", 135.4762, 34.6694, 55_000, VenueKind::Stadium),
            venue("大阪城ホール",       "osaka", 135.5340, 34.6890, 16_000, VenueKind::Arena),
            venue("インテックス大阪",   "osaka", 135.4220, 34.6380, 50_000, VenueKind::Exhibition),
            venue("万博記念公園",       "suita", 135.5320, 34.8090, 40_000, VenueKind::Park),
            venue("住吉大社",           "osaka", 135.4930, 34.6120, 30_000, VenueKind::Shrine),
        ],
        rail_lines: vec![
            line("大阪メトロ御堂筋線", RouteKind::Subway, LineCategory::Subway, &[
                ("梅田",   135.4983, 34.7025),
                ("淀屋橋", 135.5010, 34.6926),
                ("本町",   135.5010, 34.6820),
                ("心斎橋", 135.5010, 34.6750),
                ("なんば", 135.5010, 34.6660),
                ("天王寺", 135.5140, 34.6460),
            ]),
            line("JR大阪環状線", RouteKind::Train, LineCategory::Jr, &[
                ("大阪",       135.4959, 34.7024),
                ("京橋",       135.5340, 34.6966),
                ("大阪城公園", 135.5340, 34.6880),
                ("鶴橋",       135.5300, 34.6653),
                ("天王寺",     135.5140, 34.6460),
                ("新今宮",     135.5010, 34.6500),
                ("弁天町",     135.4610, 34.6690),
                ("西九条",     135.4660, 34.6830),
                ("大阪",       135.4959, 34.7024),
            ]),
            line("阪急宝塚線", RouteKind::Train, LineCategory::Private, &[
                ("大阪梅田", 135.4990, 34.7050),
                ("十三",     135.4830, 34.7200),
                ("服部天神", 135.4750, 34.7600),
                ("豊中",     135.4694, 34.7814),
            ]),
        ],
    }
}

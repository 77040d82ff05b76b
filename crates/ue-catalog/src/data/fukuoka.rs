//! 福岡県

use ue_core::{DistrictKind::*, LandmarkCategory as L, LineCategory, RouteKind, VenueKind};

use super::{area, bounds, city, district, keyed, landmark, line, venue};
use crate::Prefecture;

pub(super) fn prefecture() -> Prefecture {
    Prefecture {
        name: "福岡県".to_owned(),
        name_en: "fukuoka".to_owned(),
        bounds: Some(bounds(34.25, 33.00, 131.20, 129.90, (130.4017, 33.5904), 9.5)),
        cities: keyed(vec![
            ("fukuoka", city(
                "福岡市", "Fukuoka", (130.4017, 33.5904), 1_600_000,
                vec![
                    district("博多区", 130.4150, 33.5920, 240_000, Business),
                    district("中央区", 130.3930, 33.5890, 200_000, Business),
                    district("東区",   130.4170, 33.6180, 310_000, Mixed),
                    district("南区",   130.4260, 33.5610, 260_000, Mixed),
                    district("西区",   130.3230, 33.5830, 210_000, Mixed),
                    district("城南区", 130.3730, 33.5760, 130_000, Mixed),
                    district("早良区", 130.3490, 33.5820, 220_000, Mixed),
                ],
                &["福岡タワー", "大濠公園", "櫛田神社", "キャナルシティ博多"],
                &["天神", "博多駅", "中洲", "キャナルシティ"],
            )),
            ("kitakyushu", city(
                "北九州市", "Kitakyushu", (130.8750, 33.8834), 940_000,
                vec![
                    district("小倉北区", 130.8750, 33.8834, 180_000, Business),
                    district("小倉南区", 130.8800, 33.8400, 210_000, Mixed),
                    district("八幡西区", 130.7400, 33.8650, 250_000, Mixed),
                    district("門司区",   130.9600, 33.9450,  95_000, Tourist),
                ],
                &["小倉城", "門司港レトロ"],
                &["小倉駅前", "門司港"],
            )),
            ("kurume", city(
                "久留米市", "Kurume", (130.5083, 33.3192), 300_000,
                vec![
                    district("久留米中心部", 130.5083, 33.3192, 120_000, Business),
                    district("善導寺",       130.5900, 33.3240,  20_000, Mixed),
                ],
                &["水天宮"],
                &["久留米駅前"],
            )),
            ("dazaifu", city(
                "太宰府市", "Dazaifu", (130.5233, 33.5128), 72_000,
                vec![
                    district("太宰府", 130.5233, 33.5128, 72_000, Tourist),
                ],
                &["太宰府天満宮"],
                &[],
            )),
        ]),
        landmarks: vec![
            landmark("福岡タワー",         "fukuoka",    130.3515, 33.5933, 234.0, L::Observation, true),
            landmark("櫛田神社",           "fukuoka",    130.4107, 33.5930,  15.0, L::Shrine,      true),
            landmark("大濠公園",           "fukuoka",    130.3760, 33.5860,  10.0, L::Park,        true),
            landmark("キャナルシティ博多", "fukuoka",    130.4110, 33.5897,  50.0, L::Commercial,  true),
            landmark("博多駅",             "fukuoka",    130.4207, 33.5897,  60.0, L::Transit,     false),
            landmark("太宰府天満宮",       "dazaifu",    130.5348, 33.5215,  15.0, L::Shrine,      true),
            landmark("小倉城",             "kitakyushu", 130.8739, 33.8846,  30.0, L::History,     true),
            landmark("門司港レトロ",       "kitakyushu", 130.9619, 33.9456,  20.0, L::History,     true),
            landmark("水天宮",             "kurume",     130.5000, 33.3200,  12.0, L::Shrine,      true),
        ],
        commercial_areas: vec![
            area("天神",           "fukuoka",    130.3990, 33.5910),
            area("博多駅",         "fukuoka",    130.4207, 33.5897),
            area("中洲",           "fukuoka",    130.4060, 33.5930),
            area("キャナルシティ", "fukuoka",    130.4110, 33.5897),
            area("小倉駅前",       "kitakyushu", 130.8820, 33.8860),
            area("門司港",         "kitakyushu", 130.9619, 33.9456),
            area("久留米駅前",     "kurume",     130.5230, 33.3180),
        ],
        venues: vec![
            venue("福岡PayPayドーム",   "fukuoka", 130.3621, 33.5954, 40_000, VenueKind::Stadium),
            venue("マリンメッセ福岡",   "fukuoka", 130.4080, 33.6050, 15_000, VenueKind::Arena),
            venue("大濠公園",           "fukuoka", 130.3760, 33.5860, 30_000, VenueKind::Park),
            venue("櫛田神社",           "fukuoka", 130.4107, 33.5930, 30_000, VenueKind::Shrine),
            venue("西日本総合展示場",   "kitakyushu", 130.8870, 33.8890, 20_000, VenueKind::Exhibition),
        ],
        rail_lines: vec![
            line("福岡市地下鉄空港線", RouteKind::Subway, LineCategory::Subway, &[
                ("姪浜",     130.3236, 33.5838),
                ("西新",     130.3590, 33.5830),
                ("大濠公園", 130.3790, 33.5860),
                ("天神",     130.3990, 33.5910),
                ("中洲川端", 130.4060, 33.5940),
                ("博多",     130.4207, 33.5897),
                ("福岡空港", 130.4510, 33.5859),
            ]),
            line("JR鹿児島本線", RouteKind::Train, LineCategory::Jr, &[
                ("小倉",   130.8820, 33.8860),
                ("黒崎",   130.7640, 33.8670),
                ("香椎",   130.4460, 33.6580),
                ("博多",   130.4207, 33.5897),
                ("久留米", 130.5230, 33.3180),
            ]),
            line("西鉄天神大牟田線", RouteKind::Train, LineCategory::Private, &[
                ("西鉄福岡(天神)", 130.3990, 33.5900),
                ("大橋",           130.4270, 33.5590),
                ("西鉄二日市",     130.5150, 33.4990),
                ("西鉄久留米",     130.5190, 33.3130),
            ]),
        ],
    }
}

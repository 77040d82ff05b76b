//! 東京都 — the 23 wards are modelled as cities.

use ue_core::{DistrictKind::*, LandmarkCategory as L, LineCategory, RouteKind, VenueKind};

use super::{area, bounds, city, district, keyed, landmark, line, venue};
use crate::Prefecture;

// Stations shared by several lines.
const TOKYO: (&str, f64, f64) = ("東京", 139.7671, 35.6812);
const AKIHABARA: (&str, f64, f64) = ("秋葉原", 139.7731, 35.6984);
const UENO: (&str, f64, f64) = ("上野", 139.7774, 35.7138);
const SHINJUKU: (&str, f64, f64) = ("新宿", 139.7005, 35.6905);
const SHIBUYA: (&str, f64, f64) = ("渋谷", 139.7016, 35.6580);
const SHIMBASHI: (&str, f64, f64) = ("新橋", 139.7583, 35.6664);

pub(super) fn prefecture() -> Prefecture {
    Prefecture {
        name: "東京都".to_owned(),
        name_en: "tokyo".to_owned(),
        bounds: Some(bounds(35.90, 35.50, 139.95, 138.94, (139.6917, 35.6895), 10.0)),
        cities: keyed(vec![
            ("chiyoda", city(
                "千代田区", "Chiyoda", (139.7536, 35.6940), 67_000,
                vec![
                    district("丸の内", 139.7640, 35.6812, 30_000, Business),
                    district("秋葉原", 139.7731, 35.6984, 20_000, Tourist),
                ],
                &["東京駅", "皇居"],
                &["秋葉原", "丸の内"],
            )),
            ("chuo", city(
                "中央区", "Chuo", (139.7720, 35.6706), 170_000,
                vec![
                    district("銀座",   139.7671, 35.6717, 60_000, Business),
                    district("日本橋", 139.7745, 35.6840, 50_000, Business),
                ],
                &["築地場外市場"],
                &["銀座", "日本橋"],
            )),
            ("minato", city(
                "港区", "Minato", (139.7514, 35.6581), 260_000,
                vec![
                    district("六本木", 139.7310, 35.6627, 60_000, Business),
                    district("お台場", 139.7750, 35.6270, 15_000, Tourist),
                    district("品川",   139.7400, 35.6285, 80_000, Business),
                ],
                &["東京タワー", "お台場"],
                &["六本木"],
            )),
            ("shinjuku", city(
                "新宿区", "Shinjuku", (139.7036, 35.6938), 350_000,
                vec![
                    district("新宿駅周辺", 139.7005, 35.6905, 120_000, Business),
                    district("歌舞伎町",   139.7030, 35.6950,  30_000, Tourist),
                    district("高田馬場",   139.7038, 35.7127,  80_000, Mixed),
                ],
                &["東京都庁", "新宿御苑"],
                &["新宿"],
            )),
            ("shibuya", city(
                "渋谷区", "Shibuya", (139.7016, 35.6620), 230_000,
                vec![
                    district("渋谷駅周辺", 139.7016, 35.6580, 90_000, Business),
                    district("原宿",       139.7027, 35.6702, 50_000, Tourist),
                ],
                &["明治神宮", "渋谷スクランブル交差点"],
                &["渋谷", "表参道"],
            )),
            ("taito", city(
                "台東区", "Taito", (139.7800, 35.7126), 210_000,
                vec![
                    district("浅草", 139.7967, 35.7148, 80_000, Tourist),
                    district("上野", 139.7745, 35.7141, 70_000, Tourist),
                ],
                &["浅草寺", "上野公園"],
                &["上野"],
            )),
            ("sumida", city(
                "墨田区", "Sumida", (139.8016, 35.7107), 270_000,
                vec![
                    district("押上",   139.8107, 35.7101,  60_000, Tourist),
                    district("錦糸町", 139.8140, 35.6970, 100_000, Mixed),
                ],
                &["東京スカイツリー"],
                &[],
            )),
            ("toshima", city(
                "豊島区", "Toshima", (139.7160, 35.7260), 300_000,
                vec![
                    district("池袋", 139.7109, 35.7295, 200_000, Business),
                ],
                &["サンシャイン60"],
                &["池袋"],
            )),
            ("setagaya", city(
                "世田谷区", "Setagaya", (139.6532, 35.6464), 940_000,
                vec![
                    district("三軒茶屋", 139.6700, 35.6437, 300_000, Mixed),
                    district("二子玉川", 139.6267, 35.6116, 200_000, Mixed),
                    district("下北沢",   139.6680, 35.6613, 150_000, Mixed),
                ],
                &[],
                &[],
            )),
        ]),
        landmarks: vec![
            landmark("東京タワー",       "minato",   139.7454, 35.6586, 333.0, L::Observation,  true),
            landmark("東京スカイツリー", "sumida",   139.8107, 35.7101, 634.0, L::Observation,  true),
            landmark("浅草寺",           "taito",    139.7967, 35.7148,  53.0, L::Shrine,       true),
            landmark("上野公園",         "taito",    139.7714, 35.7148,  10.0, L::Park,         true),
            landmark("明治神宮",         "shibuya",  139.6993, 35.6764,  12.0, L::Shrine,       true),
            landmark("東京都庁",         "shinjuku", 139.6917, 35.6896, 243.0, L::Architecture, true),
            landmark("東京駅",           "chiyoda",  139.7671, 35.6812,  46.0, L::Transit,      false),
            landmark("サンシャイン60",   "toshima",  139.7196, 35.7289, 240.0, L::Observation,  true),
            landmark("お台場",           "minato",   139.7750, 35.6270,  20.0, L::ThemePark,    true),
        ],
        commercial_areas: vec![
            area("銀座",   "chuo",     139.7671, 35.6717),
            area("日本橋", "chuo",     139.7745, 35.6840),
            area("新宿",   "shinjuku", 139.7005, 35.6905),
            area("渋谷",   "shibuya",  139.7016, 35.6580),
            area("表参道", "shibuya",  139.7100, 35.6654),
            area("池袋",   "toshima",  139.7109, 35.7295),
            area("秋葉原", "chiyoda",  139.7731, 35.6984),
            area("丸の内", "chiyoda",  139.7640, 35.6812),
            area("六本木", "minato",   139.7310, 35.6627),
            area("上野",   "taito",    139.7745, 35.7141),
        ],
        venues: vec![
            venue("東京ドーム",       "chiyoda",  139.7519, 35.7056,  55_000, VenueKind::Stadium),
            venue("日本武道館",       "chiyoda",  139.7497, 35.6933,  14_000, VenueKind::Arena),
            venue("東京ビッグサイト", "minato",   139.7940, 35.6300,  80_000, VenueKind::Exhibition),
            venue("国立競技場",       "shinjuku", 139.7146, 35.6780,  68_000, VenueKind::Stadium),
            venue("隅田川",           "sumida",   139.8000, 35.7110, 100_000, VenueKind::Park),
            venue("浅草寺",           "taito",    139.7967, 35.7148,  50_000, VenueKind::Shrine),
        ],
        rail_lines: vec![
            line("JR山手線", RouteKind::Train, LineCategory::Jr, &[
                TOKYO,
                ("神田",   139.7708, 35.6918),
                AKIHABARA,
                UENO,
                ("日暮里", 139.7710, 35.7281),
                ("池袋",   139.7109, 35.7295),
                SHINJUKU,
                SHIBUYA,
                ("品川",   139.7400, 35.6285),
                SHIMBASHI,
                TOKYO,
            ]),
            line("JR中央線", RouteKind::Train, LineCategory::Jr, &[
                TOKYO,
                ("御茶ノ水", 139.7650, 35.6995),
                ("四ツ谷",   139.7301, 35.6860),
                SHINJUKU,
                ("中野",     139.6657, 35.7056),
                ("吉祥寺",   139.5799, 35.7031),
            ]),
            line("東京メトロ銀座線", RouteKind::Subway, LineCategory::Subway, &[
                SHIBUYA,
                ("表参道",   139.7122, 35.6654),
                ("赤坂見附", 139.7370, 35.6770),
                SHIMBASHI,
                ("銀座",     139.7671, 35.6717),
                ("日本橋",   139.7745, 35.6820),
                UENO,
                ("浅草",     139.7967, 35.7113),
            ]),
            line("東京メトロ丸ノ内線", RouteKind::Subway, LineCategory::Subway, &[
                ("池袋",     139.7109, 35.7295),
                ("後楽園",   139.7518, 35.7080),
                ("御茶ノ水", 139.7650, 35.6995),
                TOKYO,
                ("銀座",     139.7671, 35.6717),
                ("赤坂見附", 139.7370, 35.6770),
                SHINJUKU,
            ]),
        ],
    }
}

//! Closed category enums shared by the catalog, the generators and the map.
//!
//! Each enum carries its wire/display label (the string the dashboard shows
//! and the backend sends), plus colour and icon tables where the UI needs
//! them.  All labels are the serde representation, so a `"飲食"` in an API
//! payload deserialises straight into `ConsumptionCategory::Dining`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a label-carrying enum with serde renames, `ALL` and `Display`.
macro_rules! labelled_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vattr:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        $vis enum $name {
            $($(#[$vattr])* #[serde(rename = $label)] $variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label, identical to the serde wire string.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Inverse of [`label`](Self::label).
            pub fn from_label(s: &str) -> Option<$name> {
                match s {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ── Catalog classification ────────────────────────────────────────────────────

labelled_enum! {
    /// Land-use flag of a district; drives the generators' weight tables.
    pub enum DistrictKind {
        Business => "business",
        Tourist  => "tourist",
        Mixed    => "mixed",
    }
}

labelled_enum! {
    /// What kind of place an event venue is.
    pub enum VenueKind {
        Stadium    => "stadium",
        Arena      => "arena",
        Park       => "park",
        Exhibition => "exhibition",
        Shrine     => "shrine",
    }
}

// ── Accommodation ─────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum AccommodationType {
        CityHotel     => "シティホテル",
        BusinessHotel => "ビジネスホテル",
        CapsuleHotel  => "カプセルホテル",
        GuestHouse    => "ゲストハウス",
        Ryokan        => "旅館",
    }
}

impl AccommodationType {
    /// Typical room capacity before jitter.
    pub fn base_capacity(self) -> f64 {
        match self {
            AccommodationType::CityHotel     => 300.0,
            AccommodationType::BusinessHotel => 150.0,
            AccommodationType::CapsuleHotel  => 80.0,
            AccommodationType::GuestHouse    => 20.0,
            AccommodationType::Ryokan        => 40.0,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AccommodationType::CityHotel     => "#FF00FF",
            AccommodationType::BusinessHotel => "#00FFFF",
            AccommodationType::CapsuleHotel  => "#FFFF00",
            AccommodationType::GuestHouse    => "#00FF88",
            AccommodationType::Ryokan        => "#FF8800",
        }
    }
}

// ── Consumption ───────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum ConsumptionCategory {
        Dining        => "飲食",
        Shopping      => "ショッピング",
        Entertainment => "エンタメ",
        Services      => "サービス",
    }
}

impl ConsumptionCategory {
    /// Average spend per point in yen before population scaling.
    pub fn base_amount(self) -> f64 {
        match self {
            ConsumptionCategory::Dining        => 3_000.0,
            ConsumptionCategory::Shopping      => 8_000.0,
            ConsumptionCategory::Entertainment => 5_000.0,
            ConsumptionCategory::Services      => 4_000.0,
        }
    }

    /// Inclusive hour window in which the category peaks.
    pub fn peak_window(self) -> (u8, u8) {
        match self {
            ConsumptionCategory::Dining        => (11, 20),
            ConsumptionCategory::Shopping      => (13, 18),
            ConsumptionCategory::Entertainment => (18, 23),
            ConsumptionCategory::Services      => (9, 17),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ConsumptionCategory::Dining        => "#FF6B6B",
            ConsumptionCategory::Shopping      => "#4ECDC4",
            ConsumptionCategory::Entertainment => "#FFE66D",
            ConsumptionCategory::Services      => "#A8E6CF",
        }
    }
}

// ── Landmarks ─────────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum LandmarkCategory {
        History      => "歴史",
        Shrine       => "神社仏閣",
        Observation  => "展望",
        Museum       => "博物館",
        Park         => "公園",
        Sports       => "スポーツ",
        Transit      => "交通",
        Commercial   => "商業",
        ThemePark    => "テーマパーク",
        Aquarium     => "水族館",
        Nature       => "自然",
        Architecture => "建築",
        Building     => "ビル",
    }
}

impl LandmarkCategory {
    pub fn color(self) -> &'static str {
        match self {
            LandmarkCategory::History | LandmarkCategory::Shrine => "#FFD700",
            LandmarkCategory::Observation | LandmarkCategory::Architecture => "#00FFFF",
            LandmarkCategory::Museum | LandmarkCategory::Aquarium => "#9D4EDD",
            LandmarkCategory::Park | LandmarkCategory::Nature => "#00FF88",
            LandmarkCategory::Sports | LandmarkCategory::ThemePark => "#FF00FF",
            LandmarkCategory::Transit => "#FFFFFF",
            LandmarkCategory::Commercial => "#FF8800",
            LandmarkCategory::Building => "#4A5568",
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum EventCategory {
        Festival   => "祭り",
        Sports     => "スポーツ",
        Concert    => "音楽",
        Exhibition => "展示会",
        Gourmet    => "グルメ",
    }
}

impl EventCategory {
    pub fn icon(self) -> &'static str {
        match self {
            EventCategory::Festival   => "🎆",
            EventCategory::Sports     => "⚽",
            EventCategory::Concert    => "🎵",
            EventCategory::Exhibition => "🖼️",
            EventCategory::Gourmet    => "🍜",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EventCategory::Festival   => "#FF1744",
            EventCategory::Sports     => "#00E676",
            EventCategory::Concert    => "#D500F9",
            EventCategory::Exhibition => "#2979FF",
            EventCategory::Gourmet    => "#FF9100",
        }
    }

    /// Name suffix used when synthesising event titles.
    pub fn title_suffix(self) -> &'static str {
        match self {
            EventCategory::Festival   => "夏祭り",
            EventCategory::Sports     => "公式戦",
            EventCategory::Concert    => "ライブ",
            EventCategory::Exhibition => "展示会",
            EventCategory::Gourmet    => "グルメフェス",
        }
    }
}

// ── SNS heatmap ───────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum HeatCategory {
        Sightseeing => "観光",
        Gourmet     => "グルメ",
        Shopping    => "ショッピング",
        Event       => "イベント",
        Transit     => "交通",
    }
}

labelled_enum! {
    pub enum SentimentBucket {
        Positive => "positive",
        Neutral  => "neutral",
        Negative => "negative",
    }
}

impl SentimentBucket {
    /// Bucket a `[0, 1]` sentiment score: ≥0.7 positive, ≥0.4 neutral.
    pub fn from_score(score: f64) -> SentimentBucket {
        if score >= 0.7 {
            SentimentBucket::Positive
        } else if score >= 0.4 {
            SentimentBucket::Neutral
        } else {
            SentimentBucket::Negative
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SentimentBucket::Positive => "#00FF88",
            SentimentBucket::Neutral  => "#FFD700",
            SentimentBucket::Negative => "#FF3366",
        }
    }
}

// ── Mobility ──────────────────────────────────────────────────────────────────

labelled_enum! {
    pub enum RouteKind {
        Train      => "train",
        Subway     => "subway",
        Highway    => "highway",
        Shinkansen => "shinkansen",
        Air        => "air",
        Bus        => "bus",
    }
}

impl RouteKind {
    /// Animation speed of an uncongested route of this kind.
    pub fn base_speed(self) -> f64 {
        match self {
            RouteKind::Subway     => 1.0,
            RouteKind::Train      => 1.2,
            RouteKind::Bus        => 0.8,
            RouteKind::Highway    => 1.0,
            RouteKind::Shinkansen => 2.5,
            RouteKind::Air        => 3.0,
        }
    }
}

labelled_enum! {
    /// Operator class of a named rail line.
    pub enum LineCategory {
        Jr      => "JR",
        Subway  => "地下鉄",
        Private => "私鉄",
    }
}

impl LineCategory {
    /// Congestion before jitter.
    pub fn congestion_base(self) -> f64 {
        match self {
            LineCategory::Subway  => 0.85,
            LineCategory::Jr      => 0.70,
            LineCategory::Private => 0.60,
        }
    }
}

labelled_enum! {
    pub enum CongestionKind {
        Station    => "station",
        Commercial => "commercial",
    }
}

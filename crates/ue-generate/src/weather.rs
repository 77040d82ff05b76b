//! Fallback weather snapshot, used when the weather endpoint is unreachable.

use serde::{Deserialize, Serialize};

use ue_core::GenRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rain,
    Snow,
}

impl WeatherCondition {
    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny  => "晴れ",
            WeatherCondition::Cloudy => "曇り",
            WeatherCondition::Rain   => "雨",
            WeatherCondition::Snow   => "雪",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WeatherCondition::Sunny  => "☀️",
            WeatherCondition::Cloudy => "☁️",
            WeatherCondition::Rain   => "🌧️",
            WeatherCondition::Snow   => "❄️",
        }
    }
}

/// Current conditions for one prefecture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub prefecture:    String,
    pub condition:     WeatherCondition,
    /// °C.
    pub temperature:   f64,
    /// Percent.
    pub humidity:      f64,
    /// mm/h.
    pub precipitation: f64,
    /// m/s.
    pub wind_speed:    f64,
}

const CONDITION_WEIGHTS: &[(WeatherCondition, f64)] = &[
    (WeatherCondition::Sunny,  0.45),
    (WeatherCondition::Cloudy, 0.30),
    (WeatherCondition::Rain,   0.20),
    (WeatherCondition::Snow,   0.05),
];

pub fn generate_weather(prefecture: &str, rng: &mut GenRng) -> WeatherSnapshot {
    let condition = rng.weighted(CONDITION_WEIGHTS).unwrap_or(WeatherCondition::Cloudy);

    let (temperature, precipitation): (f64, f64) = match condition {
        WeatherCondition::Sunny  => (rng.gen_range(8.0..=32.0), 0.0),
        WeatherCondition::Cloudy => (rng.gen_range(5.0..=28.0), 0.0),
        WeatherCondition::Rain   => (rng.gen_range(5.0..=26.0), rng.gen_range(1.0..=30.0)),
        WeatherCondition::Snow   => (rng.gen_range(-3.0..=2.0), rng.gen_range(1.0..=10.0)),
    };
    let humidity: f64 = match condition {
        WeatherCondition::Rain | WeatherCondition::Snow => rng.gen_range(75.0..=98.0),
        _ => rng.gen_range(40.0..=80.0),
    };

    WeatherSnapshot {
        prefecture: prefecture.to_owned(),
        condition,
        temperature: (temperature * 10.0).round() / 10.0,
        humidity: humidity.round(),
        precipitation: (precipitation * 10.0).round() / 10.0,
        wind_speed: (rng.gen_range(0.0..=12.0_f64) * 10.0).round() / 10.0,
    }
}

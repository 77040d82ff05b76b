//! Engine configuration.
//!
//! Loaded from environment variables by the application, or from a JSON
//! document (e.g. a deployment config file).  Every field has a default so
//! an empty JSON object is a valid configuration.

use std::io::Read;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{UeError, UeResult};

/// Environment variable holding the map-provider access token.
pub const ENV_MAP_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";
pub const ENV_API_URL: &str = "UESUGI_API_URL";
pub const ENV_SEED: &str = "UESUGI_SEED";
pub const ENV_FETCH_TIMEOUT: &str = "UESUGI_FETCH_TIMEOUT_SECS";
pub const ENV_PREFECTURE: &str = "UESUGI_PREFECTURE";

/// Accepted range for the backend fetch timeout.
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 90;

/// Top-level configuration for one dashboard session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Master RNG seed.  `None` draws from entropy, so every session differs.
    pub seed: Option<u64>,

    /// Base URL of the optional backend (`http://host:port`).  `None` means
    /// local generation only.
    pub api_base_url: Option<String>,

    /// Timeout for each backend call.  Clamped to [1, 90] s on use.
    pub fetch_timeout_secs: u64,

    /// Flow-animation phase advance per frame.
    pub phase_step: f64,

    /// Target frame interval for the wall-clock frame scheduler.
    pub frame_interval_ms: u64,

    /// Map-provider access token.  Without it the map cannot start.
    pub map_token: Option<String>,

    /// Prefecture shown on first load.
    pub default_prefecture: String,

    /// Calendar year synthetic events are dated in.
    pub event_year: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:               None,
            api_base_url:       None,
            fetch_timeout_secs: 30,
            phase_step:         0.002,
            frame_interval_ms:  16,
            map_token:          None,
            default_prefecture: "広島県".to_owned(),
            event_year:         2025,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> UeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but with an injectable lookup, so
    /// tests don't have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> UeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = EngineConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        cfg.map_token = non_empty(ENV_MAP_TOKEN);
        cfg.api_base_url = non_empty(ENV_API_URL);
        if let Some(seed) = non_empty(ENV_SEED) {
            cfg.seed = Some(parse_env(ENV_SEED, &seed)?);
        }
        if let Some(secs) = non_empty(ENV_FETCH_TIMEOUT) {
            cfg.fetch_timeout_secs = parse_env(ENV_FETCH_TIMEOUT, &secs)?;
        }
        if let Some(pref) = non_empty(ENV_PREFECTURE) {
            cfg.default_prefecture = pref;
        }
        Ok(cfg)
    }

    /// Load from a JSON document; absent fields keep their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> UeResult<Self> {
        let cfg: EngineConfig = serde_json::from_reader(reader)?;
        if !(cfg.phase_step.is_finite() && cfg.phase_step > 0.0 && cfg.phase_step < 1.0) {
            return Err(UeError::Config(format!(
                "phase_step must be in (0, 1), got {}",
                cfg.phase_step
            )));
        }
        Ok(cfg)
    }

    /// The backend timeout, clamped to the accepted range.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(
            self.fetch_timeout_secs
                .clamp(MIN_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS),
        )
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> UeResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| UeError::Config(format!("{key}={value:?} is not a valid number")))
}

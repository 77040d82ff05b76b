//! Timeout-guarded fetches and the fallback policy.

use std::time::Duration;

use futures_util::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use ue_geojson::{to_valid_geojson, FeatureCollection, JsonValue};

use crate::{DataSource, Endpoint};

/// Which path produced a layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataOrigin {
    Backend,
    Generated,
}

/// A loaded layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerLoad {
    pub name:       String,
    pub collection: FeatureCollection,
    pub origin:     DataOrigin,
}

/// One layer to load: where to ask, and what to generate when that fails.
pub struct LayerRequest<'a> {
    pub name:     String,
    pub endpoint: Endpoint,
    pub fallback: Box<dyn FnOnce() -> FeatureCollection + Send + 'a>,
}

impl<'a> LayerRequest<'a> {
    pub fn new(
        name: impl Into<String>,
        endpoint: Endpoint,
        fallback: impl FnOnce() -> FeatureCollection + Send + 'a,
    ) -> Self {
        Self { name: name.into(), endpoint, fallback: Box::new(fallback) }
    }
}

/// Single attempt at `endpoint`, abandoned after `timeout`.
///
/// Never fails: every error and the timeout itself come back as `None`.
pub async fn fetch_with_timeout(
    source: &dyn DataSource,
    endpoint: &Endpoint,
    timeout: Duration,
) -> Option<JsonValue> {
    match tokio::time::timeout(timeout, source.fetch(endpoint)).await {
        Ok(Ok(body)) => Some(body),
        Ok(Err(e)) => {
            warn!(endpoint = %endpoint, error = %e, "backend fetch failed, using local data");
            None
        }
        Err(_) => {
            warn!(endpoint = %endpoint, timeout_secs = timeout.as_secs_f64(), "backend fetch timed out, using local data");
            None
        }
    }
}

/// [`fetch_with_timeout`] followed by deserialisation into `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    source: &dyn DataSource,
    endpoint: &Endpoint,
    timeout: Duration,
) -> Option<T> {
    let body = fetch_with_timeout(source, endpoint, timeout).await?;
    // Some backend routes wrap the payload under `data`.
    let body = match body {
        JsonValue::Object(mut obj) if obj.contains_key("data") => obj.remove("data").unwrap_or_default(),
        other => other,
    };
    match serde_json::from_value(body) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(endpoint = %endpoint, error = %e, "malformed backend payload, using local data");
            None
        }
    }
}

/// Load one layer, from the backend when one is configured and it answers
/// with at least one valid feature, otherwise from `request.fallback`.
pub async fn load_layer(
    source: Option<&dyn DataSource>,
    request: LayerRequest<'_>,
    timeout: Duration,
) -> LayerLoad {
    let LayerRequest { name, endpoint, fallback } = request;

    if let Some(source) = source {
        if let Some(body) = fetch_with_timeout(source, &endpoint, timeout).await {
            let collection = to_valid_geojson(&body, endpoint.geometry(), endpoint.required_properties());
            if !collection.features.is_empty() {
                debug!(layer = %name, features = collection.features.len(), "layer loaded from backend");
                return LayerLoad { name, collection, origin: DataOrigin::Backend };
            }
            debug!(layer = %name, "backend payload had no valid features");
        }
    }

    let collection = fallback();
    debug!(layer = %name, features = collection.features.len(), "layer generated locally");
    LayerLoad { name, collection, origin: DataOrigin::Generated }
}

/// Load every request concurrently; results come back in request order.
pub async fn load_all(
    source: Option<&dyn DataSource>,
    requests: Vec<LayerRequest<'_>>,
    timeout: Duration,
) -> Vec<LayerLoad> {
    let loads = join_all(requests.into_iter().map(|r| load_layer(source, r, timeout))).await;
    let from_backend = loads.iter().filter(|l| l.origin == DataOrigin::Backend).count();
    info!(layers = loads.len(), from_backend, "layers loaded");
    loads
}

//! Where backend payloads come from.

use std::collections::HashMap;

use futures_util::future::{self, BoxFuture, FutureExt};
use ue_geojson::JsonValue;

use crate::{Endpoint, FeedError, FeedResult};

/// A backend that answers an [`Endpoint`] with a JSON body.
///
/// Implementations report failures as errors; the fallback policy lives in
/// [`crate::fetch`].
pub trait DataSource: Send + Sync {
    fn fetch<'a>(&'a self, endpoint: &'a Endpoint) -> BoxFuture<'a, FeedResult<JsonValue>>;
}

// ── HTTP ──────────────────────────────────────────────────────────────────────

/// The real backend over HTTP.
pub struct HttpSource {
    client:   reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl DataSource for HttpSource {
    fn fetch<'a>(&'a self, endpoint: &'a Endpoint) -> BoxFuture<'a, FeedResult<JsonValue>> {
        async move {
            let url = self.url(endpoint);
            let resp = self.client.get(&url).send().await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FeedError::Status { status: status.as_u16(), url });
            }

            let body: JsonValue = resp.json().await?;
            Ok(body)
        }
        .boxed()
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Canned responses keyed by endpoint.
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: HashMap<Endpoint, Result<JsonValue, u16>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: Endpoint, body: JsonValue) -> Self {
        self.responses.insert(endpoint, Ok(body));
        self
    }

    /// Answer `endpoint` with a non-2xx `status`.
    pub fn failing(mut self, endpoint: Endpoint, status: u16) -> Self {
        self.responses.insert(endpoint, Err(status));
        self
    }
}

impl DataSource for MemorySource {
    fn fetch<'a>(&'a self, endpoint: &'a Endpoint) -> BoxFuture<'a, FeedResult<JsonValue>> {
        let result = match self.responses.get(endpoint) {
            Some(Ok(body))    => Ok(body.clone()),
            Some(Err(status)) => Err(FeedError::Status { status: *status, url: endpoint.path() }),
            None              => Err(FeedError::Missing(endpoint.path())),
        };
        future::ready(result).boxed()
    }
}

/// A backend that never answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingSource;

impl DataSource for PendingSource {
    fn fetch<'a>(&'a self, _endpoint: &'a Endpoint) -> BoxFuture<'a, FeedResult<JsonValue>> {
        future::pending().boxed()
    }
}

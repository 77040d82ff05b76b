//! The application controller.

use std::time::Duration;

use futures_util::future::join;
use tracing::{info, warn};
use ue_catalog::Prefecture;
use ue_core::{EngineConfig, GenRng};
use ue_feed::{fetch_json, load_all, DataOrigin, DataSource, Endpoint, HttpSource, LayerRequest};
use ue_flow::{AnimatorBuilder, FlowAnimator};
use ue_generate::{generate_prefecture, WeatherSnapshot};
use ue_map::{DesiredState, MapHandle, Reconciler};

use crate::{
    desired_state, DashboardSummary, EngineError, EngineResult, LayerId, LayerToggles,
    PrefectureCache, PrefectureView,
};

/// Shown next to the error panel when the map cannot start.
pub const RELOAD_HINT: &str = "Set MAPBOX_ACCESS_TOKEN and reload the page.";

/// Whether the map can be mounted at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapStatus {
    Ready,
    /// The single user-visible failure: a message plus a manual-reload hint.
    Unavailable { reason: String, hint: &'static str },
}

impl MapStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapStatus::Ready)
    }
}

/// Owns the session: configuration, RNG, backend, cached prefecture view,
/// toggles and the map reconciler.
pub struct Engine {
    config:     EngineConfig,
    rng:        GenRng,
    source:     Option<Box<dyn DataSource>>,
    cache:      PrefectureCache<PrefectureView>,
    toggles:    LayerToggles,
    reconciler: Reconciler,
}

impl Engine {
    /// A backend is attached when `api_base_url` is configured.
    pub fn new(config: EngineConfig) -> Self {
        let source = config
            .api_base_url
            .as_deref()
            .map(|url| Box::new(HttpSource::new(url)) as Box<dyn DataSource>);
        Self {
            rng: GenRng::from_optional_seed(config.seed),
            config,
            source,
            cache: PrefectureCache::new(),
            toggles: LayerToggles::default(),
            reconciler: Reconciler::new(),
        }
    }

    pub fn with_source(mut self, source: impl DataSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn without_backend(mut self) -> Self {
        self.source = None;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &PrefectureCache<PrefectureView> {
        &self.cache
    }

    // ── Startup ───────────────────────────────────────────────────────────────

    /// Check the map can start.  Never panics; a missing token is reported
    /// as [`MapStatus::Unavailable`].
    pub fn startup(&self) -> MapStatus {
        match self.config.map_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => {
                info!(prefecture = %self.config.default_prefecture, backend = self.source.is_some(), "map ready");
                MapStatus::Ready
            }
            _ => {
                warn!("map access token missing, map cannot start");
                MapStatus::Unavailable {
                    reason: "Map access token is not configured.".into(),
                    hint:   RELOAD_HINT,
                }
            }
        }
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    /// Select `name` using local generation only.  Regenerates only when
    /// the prefecture changes.
    pub fn select_local(&mut self, name: &str) -> &PrefectureView {
        let key = cache_key(name);
        let (year, rng) = (self.config.event_year, &mut self.rng);
        self.cache.get_or_insert_with(&key, || generate_view(name, year, rng))
    }

    /// Select `name`, overlaying whatever the backend serves in time.
    /// Regenerates only when the prefecture changes.
    pub async fn select(&mut self, name: &str) -> &PrefectureView {
        let key = cache_key(name);
        let cached = self.cache.get(&key).is_some();
        let fresh = if cached { None } else { Some(self.load_view(name).await) };
        let (year, rng) = (self.config.event_year, &mut self.rng);
        self.cache
            .get_or_insert_with(&key, || fresh.unwrap_or_else(|| generate_view(name, year, rng)))
    }

    async fn load_view(&mut self, name: &str) -> PrefectureView {
        let mut view = generate_view(name, self.config.event_year, &mut self.rng);
        if let (Some(source), Some(catalog)) = (self.source.as_deref(), ue_catalog::by_name(name)) {
            overlay_backend(&mut view, source, catalog, self.config.fetch_timeout()).await;
        }
        view
    }

    pub fn current(&self) -> Option<&PrefectureView> {
        self.cache.current()
    }

    /// Forget the cached view so the next selection regenerates.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    // ── Toggles and map ───────────────────────────────────────────────────────

    pub fn toggles(&self) -> &LayerToggles {
        &self.toggles
    }

    pub fn set_layer(&mut self, layer: LayerId, on: bool) {
        self.toggles.set(layer, on);
    }

    pub fn toggle(&mut self, layer: LayerId) -> bool {
        self.toggles.toggle(layer)
    }

    pub fn desired_state(&self) -> EngineResult<DesiredState> {
        let view = self.current().ok_or(EngineError::NothingSelected)?;
        Ok(desired_state(view, &self.toggles))
    }

    /// Bring `map` in line with the current view and toggles.
    pub fn render<M: MapHandle + ?Sized>(&mut self, map: &mut M) -> EngineResult<usize> {
        let desired = self.desired_state()?;
        Ok(self.reconciler.apply(map, &desired)?)
    }

    /// Forget what was drawn, e.g. after the map reloaded its style.
    pub fn reset_map(&mut self) {
        self.reconciler.reset();
    }

    /// A fresh animator over the current flows and hubs.
    pub fn animator(&self) -> EngineResult<FlowAnimator> {
        let view = self.current().ok_or(EngineError::NothingSelected)?;
        let animator = AnimatorBuilder::new(&view.flows.flows)
            .hubs(&view.hubs)
            .phase_step(self.config.phase_step)
            .build()?;
        Ok(animator)
    }

    pub fn summary(&self) -> EngineResult<DashboardSummary> {
        let view = self.current().ok_or(EngineError::NothingSelected)?;
        Ok(DashboardSummary::from_view(view))
    }
}

/// Catalog name when known, so `hiroshima` and `広島県` share an entry.
fn cache_key(name: &str) -> String {
    ue_catalog::by_name(name).map_or_else(|| name.trim().to_owned(), |p| p.name.clone())
}

fn generate_view(name: &str, event_year: u16, rng: &mut GenRng) -> PrefectureView {
    match ue_catalog::by_name(name) {
        Some(catalog) => {
            let data = generate_prefecture(catalog, event_year, rng);
            info!(prefecture = %catalog.name, records = data.record_count(), "prefecture generated");
            PrefectureView::from_data(&data, rng)
        }
        None => {
            warn!(prefecture = name, "unknown prefecture, showing empty layers");
            PrefectureView::empty(name, rng)
        }
    }
}

/// Replace generated layers with backend layers that arrive in time.
/// Layers and weather are requested together, so a silent backend costs
/// one timeout.
async fn overlay_backend(
    view: &mut PrefectureView,
    source: &dyn DataSource,
    catalog: &Prefecture,
    timeout: Duration,
) {
    let requests: Vec<LayerRequest<'_>> = LayerId::ALL
        .into_iter()
        .filter_map(|layer| {
            let endpoint = layer.endpoint(catalog)?;
            let generated = view.collection(layer).clone();
            Some(LayerRequest::new(layer.label(), endpoint, move || generated))
        })
        .collect();

    let (loads, weather) = join(
        load_all(Some(source), requests, timeout),
        fetch_json::<WeatherSnapshot>(source, &Endpoint::Weather, timeout),
    )
    .await;

    for load in loads {
        let Some(layer) = LayerId::from_label(&load.name) else { continue };
        if load.origin == DataOrigin::Backend {
            *view.collection_mut(layer) = load.collection;
            if let Some(slot) = view.origins.iter_mut().find(|(l, _)| *l == layer) {
                slot.1 = DataOrigin::Backend;
            }
            if layer == LayerId::Mobility {
                view.reseed_flows();
            }
        }
    }

    if let Some(weather) = weather {
        view.weather = weather;
    }
}

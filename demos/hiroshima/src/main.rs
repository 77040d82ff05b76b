//! hiroshima — end-to-end run of the Uesugi Engine without a browser.
//!
//! Selects a prefecture (default 広島県), renders every layer into an
//! in-memory map, runs the flow animation for a fixed number of frames,
//! and writes the layers, a layer summary and the recorded particle
//! positions under `output/hiroshima/`.
//!
//! Environment: `MAPBOX_ACCESS_TOKEN`, `UESUGI_API_URL`, `UESUGI_SEED`,
//! `UESUGI_FETCH_TIMEOUT_SECS`, `UESUGI_PREFECTURE`, `RUST_LOG`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ue_core::{EngineConfig, GenRng};
use ue_engine::{Engine, LayerId, MapStatus};
use ue_flow::{FlowFrame, FlowLoop, FrameSink, IntervalClock, Visibility};
use ue_generate::generate_all;
use ue_map::{InMemoryMap, MapSourceSink};
use ue_mobility::inter_prefecture_layers;
use ue_output::{CsvFrameWriter, FrameRecorder, GeoJsonWriter, LayerSummaryCsv};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64   = 42;
const FRAMES:       usize = 120;
const RECORD_EVERY: u64   = 10;
const OUTPUT_DIR:   &str  = "output/hiroshima";

// ── Frame sink ────────────────────────────────────────────────────────────────

/// Publishes to the map, records every `RECORD_EVERY`-th frame and hides
/// the flow layer after `FRAMES` frames, which stops the loop.
struct DemoSink<'m> {
    map:      MapSourceSink<'m, InMemoryMap>,
    recorder: FrameRecorder<CsvFrameWriter>,
    vis:      Visibility,
    seen:     usize,
}

impl FrameSink for DemoSink<'_> {
    fn on_frame(&mut self, frame: &FlowFrame) {
        self.map.on_frame(frame);
        self.recorder.on_frame(frame);
        self.seen += 1;
        if self.seen == FRAMES {
            self.vis.hide();
        }
    }

    fn on_stop(&mut self, frames: u64) {
        self.map.on_stop(frames);
        self.recorder.on_stop(frames);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = EngineConfig::from_env()?;
    config.seed.get_or_insert(SEED);
    let prefecture = config.default_prefecture.clone();
    let seed = config.seed.unwrap_or(SEED);

    println!("=== hiroshima — Uesugi Engine ===");
    println!(
        "Prefecture: {prefecture}  |  Seed: {seed}  |  Backend: {}",
        config.api_base_url.as_deref().unwrap_or("none")
    );
    println!();

    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;

    // 1. Startup.
    let mut engine = Engine::new(config);
    match engine.startup() {
        MapStatus::Ready => println!("Map: ready"),
        MapStatus::Unavailable { reason, hint } => {
            println!("Map: unavailable — {reason} {hint}");
            println!("(continuing headless)");
        }
    }

    // 2. Select and render.
    let t0 = Instant::now();
    let view = engine.select(&prefecture).await.clone();
    println!("Layers loaded in {:.3} s", t0.elapsed().as_secs_f64());

    let mut map = InMemoryMap::new();
    let ops = engine.render(&mut map)?;
    println!("Map: {ops} ops, {} layers", map.layer_order().len());

    engine.toggle(LayerId::Consumption);
    println!("Toggle consumption on: {} ops", engine.render(&mut map)?);
    println!();

    // 3. Write layers.
    let mut geo = GeoJsonWriter::new(out);
    for (layer, _) in view.feature_counts() {
        geo.write_layer(layer.label(), view.collection(layer))?;
    }
    geo.write_layer("hubs", &view.hubs)?;
    let intercity = inter_prefecture_layers(&mut GenRng::new(seed));
    geo.write_layer("inter_prefecture", &intercity.flows)?;
    LayerSummaryCsv::new(out)?.write_all(geo.summary())?;

    println!("{:<18} {:>9} {:<10}", "Layer", "Features", "Origin");
    println!("{}", "-".repeat(40));
    for (layer, count) in view.feature_counts() {
        let origin = format!("{:?}", view.origin(layer));
        println!("{:<18} {:>9} {:<10}", layer.label(), count, origin);
    }
    println!();

    // 4. Animate.
    let animator = engine.animator()?;
    let vis = Visibility::new(true);
    let mut clock = IntervalClock::new(engine.config().frame_interval());
    let mut sink = DemoSink {
        map:      MapSourceSink::new(&mut map),
        recorder: FrameRecorder::new(CsvFrameWriter::new(out)?).every(RECORD_EVERY),
        vis:      vis.clone(),
        seen:     0,
    };

    let t0 = Instant::now();
    let frames = FlowLoop::new(animator, &mut clock, vis).run(&mut sink);
    if let Some(e) = sink.recorder.take_error() {
        warn!(error = %e, "frame recording failed");
    }
    let recorded = sink.recorder.recorded();
    let map_errors = sink.map.errors();
    drop(sink);

    println!(
        "Animation: {frames} frames in {:.3} s, {recorded} recorded, {map_errors} map errors, {} pending",
        t0.elapsed().as_secs_f64(),
        clock.outstanding()
    );
    println!("  flow-particles updates: {}", map.source_updates("flow-particles"));
    println!();

    // 5. Summary.
    let s = engine.summary()?;
    println!("Accommodation : {} facilities, capacity {:.0}, occupancy {:.1}%",
        s.accommodation_count, s.total_capacity, s.mean_occupancy * 100.0);
    println!("Consumption   : {} points, ¥{:.0} total, {:.0}% tourist",
        s.consumption_count, s.consumption_total, s.tourist_share * 100.0);
    println!("Events        : {} events, {:.0} expected visitors", s.event_count, s.expected_attendance);
    println!("Sentiment     : {:.2} mean over {} posts", s.mean_sentiment, s.heatmap_count);
    println!("Mobility      : {} routes, {} hubs, congestion {:.2}", s.route_count, s.hub_count, s.mean_congestion);
    println!("Weather       : {} {:.1}°C", s.weather.condition.icon(), s.weather.temperature);
    println!();

    // 6. All prefectures, for comparison.
    let t0 = Instant::now();
    let all = generate_all(ue_catalog::all(), seed, engine.config().event_year);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "batch generation");
    println!("{:<10} {:>9}", "Prefecture", "Records");
    println!("{}", "-".repeat(20));
    for data in &all {
        println!("{:<10} {:>9}", data.prefecture, data.record_count());
    }

    Ok(())
}

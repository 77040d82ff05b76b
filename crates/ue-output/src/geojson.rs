//! One `.geojson` file per layer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use ue_geojson::FeatureCollection;

use crate::{LayerSummaryRow, OutputError, OutputResult};

/// Writes feature collections into a directory as `<layer>.geojson`.
pub struct GeoJsonWriter {
    dir:     PathBuf,
    written: Vec<LayerSummaryRow>,
}

impl GeoJsonWriter {
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf(), written: Vec::new() }
    }

    /// Write `layer` and return the file path.
    ///
    /// Layer names become file names, so path separators and empty names
    /// are rejected.
    pub fn write_layer(&mut self, layer: &str, fc: &FeatureCollection) -> OutputResult<PathBuf> {
        if layer.is_empty() || layer.contains(['/', '\\']) || layer.starts_with('.') {
            return Err(OutputError::LayerName(layer.to_owned()));
        }
        let path = self.dir.join(format!("{layer}.geojson"));
        let mut out = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut out, fc)?;
        out.flush()?;

        debug!(layer, features = fc.features.len(), path = %path.display(), "layer written");
        self.written.push(LayerSummaryRow { layer: layer.to_owned(), feature_count: fc.features.len() });
        Ok(path)
    }

    /// One row per layer written so far, in write order.
    pub fn summary(&self) -> &[LayerSummaryRow] {
        &self.written
    }
}

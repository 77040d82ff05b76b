//! CSV output backends.
//!
//! - `flow_frames.csv` — one row per particle per recorded frame
//! - `layer_summary.csv` — one row per layer

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::FrameWriter;
use crate::{LayerSummaryRow, OutputResult, ParticleRow};

pub const FRAMES_FILE: &str = "flow_frames.csv";
pub const SUMMARY_FILE: &str = "layer_summary.csv";

/// Writes recorded particle rows to `flow_frames.csv`.
pub struct CsvFrameWriter {
    frames:   Writer<File>,
    finished: bool,
}

impl CsvFrameWriter {
    /// Open (or create) `flow_frames.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join(FRAMES_FILE))?;
        frames.write_record(["frame", "arc_id", "particle", "lng", "lat", "core_color"])?;
        Ok(Self { frames, finished: false })
    }
}

impl FrameWriter for CsvFrameWriter {
    fn write_particles(&mut self, rows: &[ParticleRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.frame.to_string(),
                row.arc_id.clone(),
                row.particle.to_string(),
                format!("{:.6}", row.lng),
                format!("{:.6}", row.lat),
                row.core_color.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        Ok(())
    }
}

/// Writes `layer,feature_count` rows to `layer_summary.csv`.
pub struct LayerSummaryCsv {
    summary: Writer<File>,
}

impl LayerSummaryCsv {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summary = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summary.write_record(["layer", "feature_count"])?;
        Ok(Self { summary })
    }

    pub fn write_row(&mut self, row: &LayerSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[row.layer.clone(), row.feature_count.to_string()])?;
        Ok(())
    }

    /// Write every row and flush.
    pub fn write_all(mut self, rows: &[LayerSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.write_row(row)?;
        }
        self.summary.flush()?;
        Ok(())
    }
}

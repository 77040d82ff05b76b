//! `ue-output` — writing engine output to disk.
//!
//! | Writer              | Files created                                         |
//! |---------------------|-------------------------------------------------------|
//! | [`GeoJsonWriter`]   | `<layer>.geojson`, one per layer                      |
//! | [`LayerSummaryCsv`] | `layer_summary.csv` (`layer,feature_count`)           |
//! | [`CsvFrameWriter`]  | `flow_frames.csv` (`frame,arc_id,particle,lng,lat,core_color`) |
//!
//! Frame rows are produced by [`FrameRecorder`], a `ue_flow::FrameSink`
//! that feeds any [`FrameWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ue_output::{CsvFrameWriter, FrameRecorder};
//!
//! let mut rec = FrameRecorder::new(CsvFrameWriter::new(Path::new("./out"))?);
//! flow_loop.run(&mut rec);
//! if let Some(e) = rec.take_error() { warn!(error = %e, "frame recording failed"); }
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::{CsvFrameWriter, LayerSummaryCsv};
pub use error::{OutputError, OutputResult};
pub use crate::geojson::GeoJsonWriter;
pub use recorder::{particle_rows, FrameRecorder};
pub use row::{LayerSummaryRow, ParticleRow};
pub use writer::FrameWriter;

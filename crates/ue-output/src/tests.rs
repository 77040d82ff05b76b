//! Tests for ue-output.

use ue_core::LngLat;
use ue_flow::{FlowAnimator, FlowArc, Hub};
use ue_mobility::FlowDirection;

fn animator() -> FlowAnimator {
    let arc = |id: &str, particle_count| FlowArc {
        id: id.into(),
        points: vec![LngLat::new(132.45, 34.39), LngLat::new(132.55, 34.42)],
        particle_count,
        speed: 1.0,
        congestion: 0.7,
        direction: FlowDirection::Forward,
        distance_km: 10.0,
    };
    let hub = Hub {
        name:        "広島駅周辺".into(),
        coordinates: LngLat::new(132.4757, 34.3972),
        level:       0.8,
        radius:      800.0,
    };
    FlowAnimator::new(vec![arc("r1", 3), arc("r2", 2)], vec![hub], 0.01)
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvFrameWriter, LayerSummaryCsv, FRAMES_FILE, SUMMARY_FILE};
    use crate::row::{LayerSummaryRow, ParticleRow};
    use crate::writer::FrameWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn frame_headers_correct() {
        let dir = tmp();
        let mut w = CsvFrameWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(FRAMES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["frame", "arc_id", "particle", "lng", "lat", "core_color"]);
    }

    #[test]
    fn particle_rows_written() {
        let dir = tmp();
        let mut w = CsvFrameWriter::new(dir.path()).unwrap();
        let row = ParticleRow {
            frame:      4,
            arc_id:     "rail-0".into(),
            particle:   1,
            lng:        132.4757,
            lat:        34.3972,
            core_color: "#FF0000".into(),
        };
        w.write_particles(&[row.clone(), ParticleRow { particle: 2, ..row }]).unwrap();
        w.finish().unwrap();
        // Second finish is a no-op.
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(FRAMES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "rail-0");
        assert_eq!(&rows[1][2], "2");
        assert_eq!(&rows[0][3], "132.475700");
        assert_eq!(&rows[0][5], "#FF0000");
    }

    #[test]
    fn layer_summary() {
        let dir = tmp();
        let rows = [
            LayerSummaryRow { layer: "accommodation".into(), feature_count: 42 },
            LayerSummaryRow { layer: "events".into(), feature_count: 0 },
        ];
        LayerSummaryCsv::new(dir.path()).unwrap().write_all(&rows).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["layer", "feature_count"]);
        let read: Vec<(String, usize)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_owned(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(read, [("accommodation".to_owned(), 42), ("events".to_owned(), 0)]);
    }
}

#[cfg(test)]
mod geojson_tests {
    use ue_geojson::{collection, empty_collection, point_feature, FeatureCollection, JsonObject};

    use super::*;
    use crate::{GeoJsonWriter, OutputError};

    #[test]
    fn layer_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let fc = collection(vec![point_feature(LngLat::new(132.45, 34.39), JsonObject::new())]);
        let mut w = GeoJsonWriter::new(dir.path());
        let path = w.write_layer("landmarks", &fc).unwrap();
        w.write_layer("events", &empty_collection()).unwrap();

        assert_eq!(path, dir.path().join("landmarks.geojson"));
        let text = std::fs::read_to_string(&path).unwrap();
        let back: FeatureCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(back.features.len(), 1);

        let summary: Vec<(&str, usize)> = w.summary().iter().map(|r| (r.layer.as_str(), r.feature_count)).collect();
        assert_eq!(summary, [("landmarks", 1), ("events", 0)]);
    }

    #[test]
    fn rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = GeoJsonWriter::new(dir.path());
        for name in ["", "../x", "a/b", ".hidden"] {
            assert!(matches!(w.write_layer(name, &empty_collection()), Err(OutputError::LayerName(_))), "{name}");
        }
        assert!(w.summary().is_empty());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = GeoJsonWriter::new(&dir.path().join("nope"));
        assert!(matches!(w.write_layer("events", &empty_collection()), Err(OutputError::Io(_))));
    }
}

#[cfg(test)]
mod recorder_tests {
    use ue_flow::{FlowLoop, ManualClock, Visibility};

    use super::*;
    use crate::row::ParticleRow;
    use crate::writer::FrameWriter;
    use crate::{particle_rows, CsvFrameWriter, FrameRecorder, OutputError, OutputResult};

    /// Keeps rows in memory; optionally fails on the n-th write.
    #[derive(Default)]
    struct MemWriter {
        rows:     Vec<ParticleRow>,
        writes:   usize,
        fail_at:  Option<usize>,
        finished: usize,
    }

    impl FrameWriter for MemWriter {
        fn write_particles(&mut self, rows: &[ParticleRow]) -> OutputResult<()> {
            self.writes += 1;
            if Some(self.writes) == self.fail_at {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.rows.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_are_numbered_per_arc() {
        let mut a = animator();
        a.advance();
        let rows = particle_rows(&a.frame());
        let r1: Vec<u32> = rows.iter().filter(|r| r.arc_id == "r1").map(|r| r.particle).collect();
        let r2: Vec<u32> = rows.iter().filter(|r| r.arc_id == "r2").map(|r| r.particle).collect();
        assert_eq!(r1, [0, 1, 2]);
        assert_eq!(r2, [0, 1]);
        assert!(rows.iter().all(|r| r.frame == 1 && !r.core_color.is_empty()));
    }

    #[test]
    fn records_every_nth_frame_and_finishes() {
        let mut rec = FrameRecorder::new(MemWriter::default()).every(2);
        let mut clock = ManualClock::with_budget(6);
        FlowLoop::new(animator(), &mut clock, Visibility::new(true)).run(&mut rec);

        assert_eq!(rec.recorded(), 3);
        assert!(rec.take_error().is_none());
        let w = rec.into_writer();
        assert_eq!(w.rows.len(), 3 * 5);
        assert_eq!(w.finished, 1);
        let frames: Vec<u64> = w.rows.iter().map(|r| r.frame).step_by(5).collect();
        assert_eq!(frames, [2, 4, 6]);
    }

    #[test]
    fn first_error_is_kept_and_loop_continues() {
        let writer = MemWriter { fail_at: Some(2), ..MemWriter::default() };
        let mut rec = FrameRecorder::new(writer);
        let mut clock = ManualClock::with_budget(4);
        let n = FlowLoop::new(animator(), &mut clock, Visibility::new(true)).run(&mut rec);

        assert_eq!(n, 4);
        assert!(matches!(rec.take_error(), Some(OutputError::Io(_))));
        assert!(rec.take_error().is_none());
        assert_eq!(rec.into_writer().rows.len(), 3 * 5);
    }

    #[test]
    fn csv_recording_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = FrameRecorder::new(CsvFrameWriter::new(dir.path()).unwrap());
        let mut clock = ManualClock::with_budget(3);
        FlowLoop::new(animator(), &mut clock, Visibility::new(true)).run(&mut rec);
        assert!(rec.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(crate::csv::FRAMES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 3 * 5);
    }
}

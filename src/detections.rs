//! Per-frame detection CSV export.

use std::path::{Path, PathBuf};

use crate::error::{ArtifactError, Result};

const DETECTIONS_HEADER: [&str; 3] = ["Frame", "Detection", "Relative Time"];

/// Location of the detections artifact for a given video within a run's
/// output directory.
pub fn detections_csv_path(output_dir: &Path, video_base_name: &str) -> PathBuf {
    output_dir.join(format!("{video_base_name}_detections.csv"))
}

/// Writes one row per frame: index, detection label, and relative time in
/// seconds. Creates or overwrites `{video_base_name}_detections.csv` inside
/// `output_dir`, which must already exist.
///
/// The two input slices are index-aligned; a length mismatch fails before
/// the file is touched.
pub fn write_frame_data_to_csv<S: AsRef<str>>(
    detections: &[S],
    relative_times: &[f64],
    video_base_name: &str,
    output_dir: &Path,
) -> Result<()> {
    if detections.len() != relative_times.len() {
        return Err(ArtifactError::FrameCountMismatch {
            detections: detections.len(),
            times: relative_times.len(),
        });
    }

    let path = detections_csv_path(output_dir, video_base_name);
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(DETECTIONS_HEADER)?;

    for (frame, (detection, &secs)) in detections.iter().zip(relative_times).enumerate() {
        let frame_field = frame.to_string();
        let time_field = format_relative_time(secs);
        writer.write_record([frame_field.as_str(), detection.as_ref(), time_field.as_str()])?;
    }

    writer.flush()?;
    tracing::debug!("Wrote {} detection rows to {:?}", detections.len(), path);

    Ok(())
}

// Whole-second offsets keep a trailing ".0" so the column stays float-typed
// for downstream tabular tools.
fn format_relative_time(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{secs:.1}")
    } else {
        secs.to_string()
    }
}

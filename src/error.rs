//! Error types surfaced by the artifact helpers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtifactError>;

#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Filename does not follow `<id>_<YYYY>-<MM>-<DD>_<HH>-<MM>-<SS>.<ext>`.
    #[error("Filename format doesn't match expected pattern")]
    FilenamePattern,

    /// Filename is structurally fine but encodes an impossible date or time.
    #[error("Invalid date or time format in filename")]
    FilenameTimestamp,

    /// Parallel per-frame inputs disagree on the number of frames.
    #[error("frame data length mismatch: {detections} detections vs {times} relative times")]
    FrameCountMismatch { detections: usize, times: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

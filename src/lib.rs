//! Metadata utilities for the video frame-classification pipeline.
//!
//! Everything here operates on values derived from a recording rather than
//! the recording itself: start times encoded in camera filenames, per-frame
//! detection labels and their offsets, and output artifact names. Decoding
//! and annotating the video is handled elsewhere.

pub mod detections;
pub mod discovery;
pub mod error;
pub mod filename;
pub mod naming;
pub mod timestamps;

pub use detections::{detections_csv_path, write_frame_data_to_csv};
pub use discovery::{is_video_file, list_video_files, scan_recordings, VideoRecording};
pub use error::{ArtifactError, Result};
pub use filename::extract_datetime_from_filename;
pub use naming::get_annotated_video_name;
pub use timestamps::{create_timestamps, create_timestamps_with_format, DEFAULT_TIMESTAMP_FORMAT};

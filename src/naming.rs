//! Output names for annotated videos.

use std::path::Path;

/// Suffix appended to the input's base name for the annotated output video.
pub const ANNOTATED_SUFFIX: &str = "_annotated";

/// Derives the annotated-video base name from an input path: final path
/// segment, minus its extension, plus [`ANNOTATED_SUFFIX`]. Never fails;
/// an empty path yields just the suffix.
pub fn get_annotated_video_name(video_path: &str) -> String {
    let stem = Path::new(video_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    format!("{stem}{ANNOTATED_SUFFIX}")
}

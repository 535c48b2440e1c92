//! Discovery of input recordings on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::filename::extract_datetime_from_filename;

/// Extensions recognized as video input when scanning a recording root.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "avi"];

/// An input recording paired with the start time parsed from its filename.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoRecording {
    pub path: PathBuf,
    pub started_at: NaiveDateTime,
}

/// Returns true if the path's extension (case-insensitive) is a recognized
/// video extension.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| VIDEO_EXTENSIONS.contains(&s.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Recursively lists video files under `video_root`, sorted by path. A
/// missing or empty root yields an empty list.
pub fn list_video_files(video_root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(video_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_video_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}

/// Lists video files under `video_root` and parses each filename's start
/// time. Files whose names don't carry a parseable timestamp are skipped.
pub fn scan_recordings(video_root: &Path) -> Vec<VideoRecording> {
    list_video_files(video_root)
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            match extract_datetime_from_filename(name) {
                Ok(started_at) => Some(VideoRecording { path, started_at }),
                Err(err) => {
                    tracing::warn!("Skipping {:?}: {}", path, err);
                    None
                }
            }
        })
        .collect()
}

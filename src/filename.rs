//! Recording start times encoded in camera filenames.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ArtifactError, Result};

lazy_static! {
    /// Structural shape of a camera filename:
    /// `<id>_<YYYY>-<MM>-<DD>_<HH>-<MM>-<SS>.<ext>`.
    static ref FILENAME_RE: Regex =
        Regex::new(r"^.+_(\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2})\.[^.]+$").unwrap();
}

const FILENAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Parses the recording start time out of a filename such as
/// `1234_2023-10-05_14-30-00.mp4`.
///
/// Structural mismatches and calendar-invalid timestamps are reported as
/// distinct error kinds so callers can tell a misnamed file from a corrupt
/// one.
pub fn extract_datetime_from_filename(filename: &str) -> Result<NaiveDateTime> {
    let caps = FILENAME_RE
        .captures(filename)
        .ok_or(ArtifactError::FilenamePattern)?;

    NaiveDateTime::parse_from_str(&caps[1], FILENAME_TIMESTAMP_FORMAT)
        .map_err(|_| ArtifactError::FilenameTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_extract_datetime_valid() {
        let result = extract_datetime_from_filename("1234_2023-10-05_14-30-00.mp4").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 10, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_extract_datetime_has_no_subsecond_part() {
        use chrono::Timelike;

        let result = extract_datetime_from_filename("cam7_2024-01-31_23-59-59.mkv").unwrap();
        assert_eq!(result.nanosecond(), 0);
    }

    #[test]
    fn test_extract_datetime_unstructured_name() {
        let err = extract_datetime_from_filename("invalid_filename.mp4").unwrap_err();
        assert!(matches!(err, ArtifactError::FilenamePattern));
        assert_eq!(
            err.to_string(),
            "Filename format doesn't match expected pattern"
        );
    }

    #[test]
    fn test_extract_datetime_invalid_month() {
        let err = extract_datetime_from_filename("1234_2023-13-05_14-30-00.mp4").unwrap_err();
        assert!(matches!(err, ArtifactError::FilenameTimestamp));
        assert_eq!(err.to_string(), "Invalid date or time format in filename");
    }

    #[test]
    fn test_extract_datetime_invalid_hour() {
        let err = extract_datetime_from_filename("1234_2023-10-05_25-30-00.mp4").unwrap_err();
        assert!(matches!(err, ArtifactError::FilenameTimestamp));
    }

    #[test]
    fn test_extract_datetime_nonexistent_day() {
        // February 30th matches the pattern but is not a real date
        let err = extract_datetime_from_filename("1234_2023-02-30_10-00-00.mp4").unwrap_err();
        assert!(matches!(err, ArtifactError::FilenameTimestamp));
    }
}

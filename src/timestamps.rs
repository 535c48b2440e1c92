//! Absolute timestamp strings for relative frame offsets.

use chrono::{Duration, NaiveDateTime};

/// Default render format, with six-digit zero-padded microseconds.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders `reference + offset` for every offset, using the default
/// microsecond-precision format.
pub fn create_timestamps(relative_times: &[f64], reference: NaiveDateTime) -> Vec<String> {
    create_timestamps_with_format(relative_times, reference, DEFAULT_TIMESTAMP_FORMAT)
}

/// Renders `reference + offset` for every offset with a caller-supplied
/// `chrono` format string. Offsets are seconds, may be fractional, and are
/// each applied independently to the same reference. Output order and length
/// match the input.
pub fn create_timestamps_with_format(
    relative_times: &[f64],
    reference: NaiveDateTime,
    format: &str,
) -> Vec<String> {
    relative_times
        .iter()
        .map(|&secs| {
            // Offsets are rounded to whole microseconds, the precision of the
            // default render format.
            let offset = Duration::microseconds((secs * 1_000_000.0).round() as i64);
            (reference + offset).format(format).to_string()
        })
        .collect()
}

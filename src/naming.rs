//! Output file naming.
//!
//! The merged document is named after the wall-clock time of the invocation,
//! `YYYY-MM-DD_HH-MM-SS.pdf` with zero-padded two-digit fields. The clock is
//! an ambient dependency in disguise, so callers pass the timestamp in; only
//! the binary reaches for [`chrono::Local::now`]. Two invocations within the
//! same second produce the same name and the second write overwrites the
//! first. That collision is accepted, not handled.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// File extension of the merged output document.
pub const OUTPUT_EXTENSION: &str = "pdf";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Derive the output file name for the given timestamp.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use scanweave::naming::timestamped_file_name;
///
/// let now = Local.with_ymd_and_hms(2017, 9, 18, 9, 32, 52).unwrap();
/// assert_eq!(timestamped_file_name(now), "2017-09-18_09-32-52.pdf");
/// ```
pub fn timestamped_file_name(now: DateTime<Local>) -> String {
    format!("{}.{}", now.format(TIMESTAMP_FORMAT), OUTPUT_EXTENSION)
}

/// Full output path: the timestamp-derived name joined onto `result_dir`.
pub fn output_path(result_dir: &Path, now: DateTime<Local>) -> PathBuf {
    result_dir.join(timestamped_file_name(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fields_are_zero_padded() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 8, 5, 9).unwrap();
        assert_eq!(timestamped_file_name(now), "2024-03-07_08-05-09.pdf");
    }

    #[test]
    fn test_double_digit_fields() {
        let now = Local.with_ymd_and_hms(2017, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(timestamped_file_name(now), "2017-12-31_23-59-58.pdf");
    }

    #[test]
    fn test_output_path_joins_result_dir() {
        let now = Local.with_ymd_and_hms(2017, 9, 18, 9, 32, 52).unwrap();
        let path = output_path(Path::new("merged"), now);
        assert_eq!(path, PathBuf::from("merged/2017-09-18_09-32-52.pdf"));
    }

    #[test]
    fn test_same_second_yields_same_name() {
        let a = Local.with_ymd_and_hms(2017, 9, 18, 9, 32, 52).unwrap();
        let b = Local.with_ymd_and_hms(2017, 9, 18, 9, 32, 52).unwrap();
        assert_eq!(timestamped_file_name(a), timestamped_file_name(b));
    }
}

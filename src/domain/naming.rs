//! Artifact filename generation

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build `{base}_{suffix}_{YYYYMMDD_HHMMSS}.{extension}` from the current
/// wall-clock time.
///
/// Timestamping is second-granular: two calls within the same second for the
/// same base/suffix/extension produce the same name. Accepted limitation.
pub fn output_filename(base_name: &str, suffix: &str, extension: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    format!("{}_{}_{}.{}", base_name, suffix, timestamp, extension)
}

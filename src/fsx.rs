//! Cross-platform path helpers.
//!
//! Entry names and the default output name are computed the same way on every
//! host: both `\` and `/` count as separators on input, and only `/` is ever
//! written into the archive.

use crate::common::ARCHIVE_EXTENSION;
use std::path::PathBuf;

/// Converts a source path as given on the command line into an entry name.
///
/// Every backslash becomes a forward slash. Nothing else is touched: no
/// trimming, no collapsing of repeated separators, no stripping of `./`.
pub fn to_archive_name(path: &str) -> String {
    path.replace('\\', "/")
}

/// Returns the last path component of `path`.
///
/// Trailing separators are ignored. When there is no usable final component
/// (empty input, `.`, `..` or a bare root) the normalized input is returned.
pub fn base_name(path: &str) -> String {
    let normalized = to_archive_name(path);
    let trimmed = normalized.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or("");
    match last {
        "" | "." | ".." => normalized,
        name => name.to_string(),
    }
}

/// Output path used when none is given: `<base name of first input>.zip`.
pub fn default_output_path(first_input: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", base_name(first_input), ARCHIVE_EXTENSION))
}

//! Newline-delimited manifest of input files.
//!
//! One path per line. Lines are returned verbatim apart from the line
//! terminator (`\n` or `\r\n`); empty lines are kept as empty strings.

use crate::ArchiverError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Reads `path` and returns one string per line, in file order.
pub fn load_manifest(path: &Path) -> Result<Vec<String>, ArchiverError> {
    let manifest_err = |source| ArchiverError::ManifestRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(manifest_err)?;
    let lines = read_lines(file).map_err(manifest_err)?;
    tracing::debug!("loaded {} manifest lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Splits `reader` into lines. `BufRead::lines` already strips `\n` and
/// a preceding `\r`.
pub fn read_lines<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}

//! # ZIP Archive Writer
//!
//! This module owns the destination file and the `zip` writer on top of it.
//! Every entry it writes carries the same metadata: Deflate compression, the
//! Unix mode `0o100777` (regular file, `rwxrwxrwx`) in the high half of the
//! external attributes, a Unix "version made by" host byte and a fixed
//! DOS-epoch timestamp.

use crate::common::{ArchiveEntry, ENTRY_COMPRESSION, UNIX_EXECUTABLE_MODE};
use crate::ArchiverError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{DateTime, ZipWriter};

/// A writer responsible for constructing one ZIP archive.
///
/// The archive is only readable once [`ArchiveWriter::finalize`] has written
/// the central directory.
pub struct ArchiveWriter {
    path: PathBuf,
    writer: ZipWriter<File>,
    entries_written: usize,
    bytes_written: u64,
}

impl ArchiveWriter {
    /// Creates (or truncates) the file at `path` and starts an empty archive.
    pub fn create(path: &Path) -> Result<Self, ArchiverError> {
        let file = File::create(path).map_err(|e| ArchiverError::ArchiveCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("created archive file {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            writer: ZipWriter::new(file),
            entries_written: 0,
            bytes_written: 0,
        })
    }

    /// Options applied to every entry.
    fn entry_options(entry: &ArchiveEntry) -> FileOptions {
        FileOptions::default()
            .compression_method(ENTRY_COMPRESSION)
            .unix_permissions(UNIX_EXECUTABLE_MODE)
            .last_modified_time(DateTime::default())
            .large_file(entry.needs_zip64())
    }

    /// Appends one entry to the archive.
    pub fn add_entry(&mut self, entry: &ArchiveEntry) -> Result<(), ArchiverError> {
        let write_err = |source: ZipError| ArchiverError::ArchiveWrite {
            name: entry.name.clone(),
            source,
        };

        self.writer
            .start_file(entry.name.as_str(), Self::entry_options(entry))
            .map_err(write_err)?;
        self.writer
            .write_all(&entry.data)
            .map_err(|e| write_err(ZipError::from(e)))?;

        self.entries_written += 1;
        self.bytes_written += entry.size();
        tracing::debug!(
            name = %entry.name,
            size = entry.size(),
            external_attrs = entry.external_attributes(),
            "wrote entry"
        );
        Ok(())
    }

    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Writes the central directory and releases the destination file.
    ///
    /// A failure while syncing the finished file to disk is logged only; the
    /// archive bytes have already been handed to the OS at that point.
    pub fn finalize(mut self) -> Result<(), ArchiverError> {
        let file = self.writer.finish().map_err(|e| ArchiverError::ArchiveWrite {
            name: self.path.display().to_string(),
            source: e,
        })?;
        if let Err(e) = file.sync_all() {
            tracing::warn!("Failed to close zip file {}: {}", self.path.display(), e);
        }
        Ok(())
    }
}

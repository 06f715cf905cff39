//! # Archive Pipeline
//!
//! Turns an ordered list of source paths into one finished ZIP archive.
//!
//! For each path, in order: read the whole file, normalize the path into an
//! entry name, report progress, write the entry. The first failure aborts the
//! run; the partially written destination is then removed so no finalized
//! archive with missing entries is left behind.

use crate::archive::ArchiveWriter;
use crate::common::ArchiveEntry;
use crate::fsx;
use crate::progress::{self, EntryProgress};
use crate::ArchiverError;

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Where the archive was written.
    pub output: PathBuf,
    /// Number of entries, equal to the number of input files.
    pub entries: usize,
    /// Sum of uncompressed entry sizes.
    pub total_bytes: u64,
}

/// Resolves the destination path.
///
/// An explicit, non-empty `output` wins; otherwise the name is derived from
/// the first input file.
pub fn resolve_output_path(output: Option<&Path>, files: &[String]) -> Result<PathBuf, ArchiverError> {
    match output {
        Some(path) if !path.as_os_str().is_empty() => Ok(path.to_path_buf()),
        _ => files
            .first()
            .map(|first| fsx::default_output_path(first))
            .ok_or(ArchiverError::NoInput),
    }
}

/// Reads one source file into an entry with its normalized name.
pub fn read_entry(source: &str) -> Result<ArchiveEntry, ArchiverError> {
    let data = fs::read(source).map_err(|e| ArchiverError::FileRead {
        path: PathBuf::from(source),
        source: e,
    })?;
    Ok(ArchiveEntry::new(fsx::to_archive_name(source), data))
}

/// Builds the archive, printing each entry name to stdout as it is written.
pub fn build_archive(output: Option<&Path>, files: &[String]) -> Result<BuildSummary, ArchiverError> {
    build_archive_with_progress(output, files, progress::stdout_progress())
}

/// Builds the archive, calling `on_entry` once per entry before it is written.
///
/// Fails with [`ArchiverError::NoInput`] before touching the filesystem when
/// `files` is empty.
pub fn build_archive_with_progress<F>(
    output: Option<&Path>,
    files: &[String],
    mut on_entry: F,
) -> Result<BuildSummary, ArchiverError>
where
    F: FnMut(&EntryProgress<'_>),
{
    if files.is_empty() {
        return Err(ArchiverError::NoInput);
    }
    let output = resolve_output_path(output, files)?;

    let mut writer = ArchiveWriter::create(&output)?;
    let written = write_entries(&mut writer, files, &mut on_entry);

    let result = match written {
        Ok(()) => {
            let summary = BuildSummary {
                output: output.clone(),
                entries: writer.entries_written(),
                total_bytes: writer.bytes_written(),
            };
            writer.finalize().map(|()| summary)
        }
        Err(e) => {
            // Dropping the zip writer still finalizes it, so the file is removed afterwards.
            drop(writer);
            Err(e)
        }
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "created {} with {} entries ({} bytes uncompressed)",
                summary.output.display(),
                summary.entries,
                summary.total_bytes
            );
            Ok(summary)
        }
        Err(e) => {
            discard_partial_archive(&output);
            Err(e)
        }
    }
}

fn write_entries<F>(writer: &mut ArchiveWriter, files: &[String], on_entry: &mut F) -> Result<(), ArchiverError>
where
    F: FnMut(&EntryProgress<'_>),
{
    let total_files = files.len();
    for (i, source) in files.iter().enumerate() {
        let entry = read_entry(source)?;
        on_entry(&EntryProgress {
            name: &entry.name,
            index: i + 1,
            total_files,
            size: entry.size(),
        });
        writer.add_entry(&entry)?;
    }
    Ok(())
}

fn discard_partial_archive(output: &Path) {
    match fs::remove_file(output) {
        Ok(()) => tracing::debug!("removed incomplete archive {}", output.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove incomplete archive {}: {}", output.display(), e),
    }
}

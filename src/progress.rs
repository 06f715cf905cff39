//! Per-entry progress reporting for archive creation.
//!
//! The pipeline calls back once per entry, before the entry is written. The
//! command-line front end turns each call into one line on stdout holding the
//! normalized entry name; callers of the binary parse that stream for logging.

use std::io::{self, Write};

/// State passed to the progress callback for each entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProgress<'a> {
    /// Normalized name of the entry about to be written.
    pub name: &'a str,
    /// 1-based position of this entry in the input list.
    pub index: usize,
    pub total_files: usize,
    /// Uncompressed size of this entry.
    pub size: u64,
}

/// Writes the entry name followed by a newline to `out`.
pub fn write_entry_line<W: Write>(out: &mut W, progress: &EntryProgress<'_>) -> io::Result<()> {
    writeln!(out, "{}", progress.name)?;
    out.flush()
}

/// Progress callback that prints entry names to stdout.
///
/// A closed or broken stdout does not abort the run; the failure is logged.
pub fn stdout_progress() -> impl FnMut(&EntryProgress<'_>) {
    move |progress: &EntryProgress<'_>| {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = write_entry_line(&mut lock, progress) {
            tracing::warn!("could not report progress for {}: {}", progress.name, e);
        }
    }
}

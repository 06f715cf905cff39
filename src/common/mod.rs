//! Common types and constants shared by the archive writer and the pipeline.

use zip::CompressionMethod;

/// Permission bits forced onto every entry (`-rwxrwxrwx`).
pub const UNIX_EXECUTABLE_MODE: u32 = 0o777;

/// `S_IFREG`; the zip writer marks every file entry as a regular file.
pub const UNIX_REGULAR_FILE: u32 = 0o100000;

/// Full Unix mode stored in the high half of the external attributes.
pub const STORED_UNIX_MODE: u32 = UNIX_REGULAR_FILE | UNIX_EXECUTABLE_MODE;

/// Host-system value stored in the high byte of "version made by" for Unix.
pub const CREATOR_UNIX: u8 = 3;

/// Compression applied to every entry.
pub const ENTRY_COMPRESSION: CompressionMethod = CompressionMethod::Deflated;

/// Extension appended to the derived default output name.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// A single file to be placed into the archive.
///
/// Entries are immutable once built: the name is already normalized and the
/// content is the full raw byte payload of the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name inside the archive, always `/`-separated.
    pub name: String,
    /// Raw, uncompressed file content.
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self { name: name.into(), data }
    }

    /// Unix mode stored for this entry: regular file, `rwxrwxrwx`.
    pub fn unix_mode(&self) -> u32 {
        STORED_UNIX_MODE
    }

    /// Value of the 32-bit external attributes field for this entry.
    pub fn external_attributes(&self) -> u32 {
        self.unix_mode() << 16
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Payloads at or above 4 GiB need ZIP64 extra fields.
    pub fn needs_zip64(&self) -> bool {
        self.size() >= u32::MAX as u64
    }
}

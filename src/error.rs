use std::path::PathBuf;

/// The primary error type for all operations in the `build_lambda_zip` crate.
///
/// Every variant is fatal to the run that produced it. The `Display` form is
/// `<description>: <underlying cause>` and is what the binary prints on stderr.
#[derive(thiserror::Error, Debug)]
pub enum ArchiverError {
    /// No input files were resolved from positional arguments or the manifest.
    #[error("No input files provided")]
    NoInput,

    /// A source file could not be opened or read.
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file could not be opened or scanned.
    #[error("Failed to load files to zip from '{}': {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination archive could not be created for writing.
    #[error("Failed to create archive '{}': {source}", .path.display())]
    ArchiveCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an entry, or finalizing the central directory, failed.
    /// `name` is the entry being written, or the archive path on finalize.
    #[error("Failed to write archive entry '{name}': {source}")]
    ArchiveWrite {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },
}

//! # build-lambda-zip
//!
//! Packages a list of files into a ZIP archive whose entries always carry Unix
//! executable permissions (`0777`, with a Unix "version made by" host byte)
//! and `/`-separated names, regardless of the host operating system. The
//! archive can be unpacked on a Unix system and the contained binary run
//! without a separate `chmod`.
//!
//! ## Key Modules
//!
//! - [`compress`]: The pipeline from an ordered file list to a finished archive.
//! - [`archive`]: The ZIP writer that applies the fixed entry metadata.
//! - [`manifest`]: Loading newline-delimited lists of input files.
//! - [`fsx`]: Entry-name normalization and default output naming.
//!
//! ## Examples
//!
//! ```no_run
//! use build_lambda_zip::compress::build_archive;
//! use std::path::Path;
//!
//! let files = vec!["bootstrap".to_string(), "lib/libfoo.so".to_string()];
//! let summary = build_archive(Some(Path::new("function.zip")), &files)?;
//! assert_eq!(summary.entries, 2);
//! # Ok::<(), build_lambda_zip::ArchiverError>(())
//! ```

pub mod archive;
pub mod cli;
pub mod cli_runner;
pub mod common;
pub mod compress;
pub mod error;
pub use error::ArchiverError;

pub mod logging;
pub mod manifest;
pub mod progress;

// Cross-platform path helpers
pub mod fsx;

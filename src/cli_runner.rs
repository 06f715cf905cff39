//! Glue between parsed command-line arguments and the archive pipeline.

use crate::cli::Args;
use crate::compress::{self, BuildSummary};
use crate::manifest;
use crate::ArchiverError;
use std::path::Path;

/// Assembles the ordered input list: positional files first, then the
/// manifest lines (if `--input` was given).
pub fn collect_inputs(args: &Args) -> Result<Vec<String>, ArchiverError> {
    let mut files = args.files.clone();
    if let Some(manifest_path) = &args.input {
        files.extend(manifest::load_manifest(manifest_path)?);
    }
    if files.is_empty() {
        return Err(ArchiverError::NoInput);
    }
    Ok(files)
}

/// Runs one invocation: resolves inputs and output, then builds the archive.
pub fn run_cli_app(args: &Args) -> Result<BuildSummary, ArchiverError> {
    let files = collect_inputs(args)?;
    tracing::debug!("{} input files", files.len());
    compress::build_archive(args.output.as_deref().map(Path::new), &files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(files: &[&str], input: Option<PathBuf>) -> Args {
        Args {
            files: files.iter().map(|f| f.to_string()).collect(),
            output: None,
            input,
        }
    }

    #[test]
    fn positional_then_manifest() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let manifest = dir.path().join("files.txt");
        fs::write(&manifest, "a.txt\nb.txt\n")?;

        let files = collect_inputs(&args(&["main.bin"], Some(manifest)))?;
        assert_eq!(files, vec!["main.bin", "a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn manifest_only() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let manifest = dir.path().join("files.txt");
        fs::write(&manifest, "bootstrap\r\n")?;

        assert_eq!(collect_inputs(&args(&[], Some(manifest)))?, vec!["bootstrap"]);
        Ok(())
    }

    #[test]
    fn nothing_to_do() {
        assert!(matches!(collect_inputs(&args(&[], None)), Err(ArchiverError::NoInput)));
    }

    #[test]
    fn empty_manifest_without_positionals() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("empty.txt");
        fs::write(&manifest, "").unwrap();
        assert!(matches!(collect_inputs(&args(&[], Some(manifest))), Err(ArchiverError::NoInput)));
    }

    #[test]
    fn unreadable_manifest() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("missing.txt");
        let err = collect_inputs(&args(&["main"], Some(manifest.clone()))).unwrap_err();
        assert!(matches!(err, ArchiverError::ManifestRead { ref path, .. } if path == &manifest));
    }
}

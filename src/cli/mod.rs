use clap::Parser;
use std::path::PathBuf;

/// Put files into a zip file that works with AWS Lambda.
///
/// Every entry is stored with `-rwxrwxrwx` Unix permissions and `/`
/// separators, whatever the host platform.
#[derive(Parser, Debug, Clone)]
#[command(name = "build-lambda-zip", author, version, about, long_about = None)]
pub struct Args {
    /// Files to add to the archive, in order. Manifest entries are appended after these.
    pub files: Vec<String>,

    /// Output file path for the zip. Defaults to the first input file name plus `.zip`.
    /// An empty value also selects the default.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Input file path for the list of files to zip, one path per line.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Parses command-line arguments using `clap`.
///
/// Fails with the `clap` error (which already knows how to render itself) on
/// bad usage, `--help` or `--version`.
pub fn run() -> Result<Args, clap::Error> {
    Args::try_parse()
}

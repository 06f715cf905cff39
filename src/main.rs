//! Main entry point for the build-lambda-zip CLI app

use build_lambda_zip::{cli, cli_runner, logging};

fn main() -> std::process::ExitCode {
    let args = match cli::run() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    logging::init();

    if let Err(e) = cli_runner::run_cli_app(&args) {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

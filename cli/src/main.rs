//! FCS CLI - interactive CRC-32 / Frame Check Sequence calculator.
//!
//! Reads menu answers from stdin and prints reports to stdout.
//! Logs are written to stderr.

use fcs_cli::{Config, Shell};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();
    log_startup_info(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Shell terminated");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with environment-based log levels.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fcs_cli=warn")))
        .init();
}

fn log_startup_info(config: &Config) {
    info!(
        version = fcs_core::VERSION,
        strategy = ?config.strategy,
        output_format = ?config.output_format,
        max_input_bytes = config.max_input_bytes,
        "Starting FCS calculator"
    );
}

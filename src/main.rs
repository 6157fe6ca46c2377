mod cli;

use clap::Parser;
use stagebook::commands::common::format_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::dispatch::dispatch;
use cli::types::Cli;

/// Environment variable holding the log filter (e.g. `stagebook=debug`).
const LOG_ENV: &str = "STAGEBOOK_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

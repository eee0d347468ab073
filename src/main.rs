use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use people_book::prelude::{command::Cli, run_app};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warnings only unless --verbose
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("people_book={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

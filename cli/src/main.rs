//! CLI entrypoint for concord

use clap::Parser;
use concord_cli::commands;
use concord_cli::{Cli, Settings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Concord conflict detection");

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Could not load settings, using defaults: {}", e);
        Settings::default()
    });

    match commands::execute_detect(&cli, &settings) {
        Ok(outcome) => std::process::exit(if outcome.gate_failed { 1 } else { 0 }),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

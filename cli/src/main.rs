mod args;
mod report;

use args::Cli;
use clap::Parser;
use std::error::Error;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    debug!(input_len = input.len(), "read private key from stdin");

    let private_key = logic::PrivateKey::from_hex(&input)?;
    debug!("private key validated");

    let keys = logic::derive_bitcoin_keys(&private_key)?;
    debug!(address = %keys.address, "derived public key, wif and address");

    // Single write so a failure never leaves partial output behind
    let mut stdout = io::stdout().lock();
    stdout.write_all(report::format_report(&keys).as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "key derivation failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

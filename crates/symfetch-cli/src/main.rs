//! symfetch — fetch and manage BingX USDT-M perpetual symbols.
//!
//! Fetches the active contract catalog from the exchange, writes the
//! normalized symbol list to `symbols.json` and a hand-editable
//! `coins.txt`, and with `--update-top` recomputes the `top_symbols`
//! field of the bot configuration.

mod cli;
mod error;
mod fetch;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use crate::cli::Cli;
use crate::error::CliError;
use crate::fetch::RunSummary;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            error!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let RunSummary {
        fetched,
        top_symbols,
        ..
    } = fetch::run(&cli).await?;

    match top_symbols {
        Some(count) => info!("Run complete: {fetched} symbols fetched, {count} top_symbols"),
        None => info!("Run complete: {fetched} symbols fetched"),
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

//! Single-run orchestration: fetch, trim, persist, update config.
//!
//! The sequence mirrors the operator contract: arguments are validated
//! before any network activity, the fetch completes before any file is
//! touched, and the two symbol files are written before the optional
//! config update. A fetch failure therefore aborts with the filesystem
//! untouched, while a config failure leaves the freshly written symbol
//! files in place.

use std::sync::Arc;

use log::info;

use symfetch_core::{
    update_top_symbols, write_coins, write_symbols, BingxSource, ReqwestHttpClient, SymbolSource,
    WriteOutcome,
};

use crate::cli::Cli;
use crate::error::CliError;

/// What a run did, for the final summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Symbols retained after `--limit`.
    pub fetched: usize,
    pub symbols_outcome: WriteOutcome,
    pub coins_outcome: WriteOutcome,
    /// Size of the persisted `top_symbols` list, when `--update-top` ran.
    pub top_symbols: Option<usize>,
}

pub async fn run(cli: &Cli) -> Result<RunSummary, CliError> {
    let source = BingxSource::new(Arc::new(ReqwestHttpClient::new()))
        .with_base_url(&cli.base_url)
        .with_timeout_ms(cli.timeout_ms);
    run_with_source(cli, &source).await
}

/// Split out from [`run`] so tests can substitute a fixture-backed source.
pub async fn run_with_source(
    cli: &Cli,
    source: &dyn SymbolSource,
) -> Result<RunSummary, CliError> {
    if cli.limit == Some(0) {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let mut symbols = source.fetch_symbols().await?;

    if let Some(limit) = cli.limit {
        if symbols.len() > limit {
            symbols.truncate(limit);
            info!("Keeping the first {} fetched symbols", symbols.len());
        }
    }

    let symbols_outcome = write_symbols(&cli.symbols_file, &symbols, cli.force)?;
    let coins_outcome = write_coins(&cli.coins_file, &symbols, cli.force)?;

    let top_symbols = if cli.update_top {
        Some(update_top_symbols(&cli.config_file, &symbols)?)
    } else {
        None
    };

    Ok(RunSummary {
        fetched: symbols.len(),
        symbols_outcome,
        coins_outcome,
        top_symbols,
    })
}

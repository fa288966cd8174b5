//! CLI argument definitions for symfetch.
//!
//! # Flags
//!
//! | Flag | Default | Description |
//! |------|---------|-------------|
//! | `--force` | off | Overwrite `symbols.json`/`coins.txt` unconditionally |
//! | `--limit N` | none | Keep only the first N fetched symbols |
//! | `--update-top` | off | Recompute `top_symbols` in the config |
//! | `--symbols-file` | `symbols.json` | Symbol list location |
//! | `--coins-file` | `coins.txt` | Coin list location |
//! | `--config-file` | `config.json` | Bot configuration location |
//! | `--base-url` | BingX production | API origin override |
//! | `--timeout-ms` | `10000` | Request timeout budget in ms |
//!
//! # Examples
//!
//! ```bash
//! # First fetch; refuses to replace an existing symbols.json
//! symfetch
//!
//! # Replace everything and refresh top_symbols in config.json
//! symfetch --force --update-top
//!
//! # Small catalog for a test bot
//! symfetch --force --limit 50
//! ```

use std::path::PathBuf;

use clap::Parser;

use symfetch_core::DEFAULT_BASE_URL;

/// Fetch and manage BingX USDT-M perpetual symbols.
///
/// Fetches the active contract catalog, writes the normalized symbol list
/// to `symbols.json` and a hand-editable `coins.txt`, and optionally
/// recomputes the `top_symbols` field of the bot configuration.
#[derive(Debug, Parser)]
#[command(
    name = "symfetch",
    author,
    version,
    about = "Fetch and manage BingX USDT-M perpetual symbols"
)]
pub struct Cli {
    /// Overwrite symbols.json and coins.txt unconditionally.
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Keep only the first N fetched symbols.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Recompute top_symbols in the config from the fetched list.
    #[arg(long, default_value_t = false)]
    pub update_top: bool,

    /// Output path for the symbol list.
    #[arg(long, default_value = "symbols.json")]
    pub symbols_file: PathBuf,

    /// Output path for the hand-editable coin list.
    #[arg(long, default_value = "coins.txt")]
    pub coins_file: PathBuf,

    /// Bot configuration read and updated by --update-top.
    #[arg(long, default_value = "config.json")]
    pub config_file: PathBuf,

    /// API origin; override to point at a test server.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}

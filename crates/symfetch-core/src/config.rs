//! Bot configuration access for the `top_symbols` update.
//!
//! The document is loaded as raw JSON, exactly one field is rewritten, and
//! the result is persisted atomically. Key order is preserved, so every
//! field other than `top_symbols` round-trips untouched.

use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::store::{replace_file, StoreError};
use crate::Symbol;

/// Errors raised while reading or updating the bot configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} not found")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("config root must be a JSON object")]
    NotAnObject,
    #[error("config field 'add_symbols' is missing")]
    MissingAddSymbols,
    #[error("config field 'add_symbols' must be a count or a list of symbols")]
    InvalidAddSymbols,
    #[error(transparent)]
    Write(#[from] StoreError),
}

/// Selection policy for `top_symbols`, read from the `add_symbols` field.
///
/// The field doubles as the policy switch: a number keeps the first N
/// fetched symbols, a list keeps the fetched symbols that appear in it.
/// Both forms preserve fetch order in the result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TopSelection {
    /// Keep the first N symbols in fetch order.
    Count(usize),
    /// Keep fetched symbols that are members of this list.
    Members(Vec<String>),
}

impl TopSelection {
    /// Apply the policy to the fetched list, preserving fetch order.
    ///
    /// Member entries are normalized the same way catalog symbols are, so
    /// `btc-usdt` in the config matches the fetched `BTCUSDT`.
    pub fn select<'a>(&self, symbols: &'a [Symbol]) -> Vec<&'a Symbol> {
        match self {
            Self::Count(count) => symbols.iter().take(*count).collect(),
            Self::Members(members) => {
                let wanted: Vec<Symbol> = members
                    .iter()
                    .filter_map(|member| Symbol::parse(member).ok())
                    .collect();
                symbols
                    .iter()
                    .filter(|symbol| wanted.contains(*symbol))
                    .collect()
            }
        }
    }
}

/// Recompute `top_symbols` from the fetched list and persist the config.
///
/// Returns the number of symbols written to `top_symbols`.
pub fn update_top_symbols(path: &Path, symbols: &[Symbol]) -> Result<usize, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut document: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    let root = document
        .as_object_mut()
        .ok_or(ConfigError::NotAnObject)?;

    let selection = root
        .get("add_symbols")
        .ok_or(ConfigError::MissingAddSymbols)?;
    let selection: TopSelection =
        serde_json::from_value(selection.clone()).map_err(|_| ConfigError::InvalidAddSymbols)?;

    let selected = selection.select(symbols);
    let count = selected.len();
    let top = serde_json::Value::Array(
        selected
            .iter()
            .map(|symbol| serde_json::Value::String(symbol.as_str().to_owned()))
            .collect(),
    );
    root.insert(String::from("top_symbols"), top);

    let mut body = serde_json::to_string_pretty(&document).map_err(StoreError::from)?;
    body.push('\n');
    replace_file(path, body.as_bytes())?;

    info!(
        "Updated {} with {} top_symbols",
        path.display(),
        count
    );
    Ok(count)
}

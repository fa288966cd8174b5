//! Symbol and coin file persistence.
//!
//! Both outputs are guarded against accidental replacement: an existing
//! file is left untouched unless `force` is set. Writes go to a temp file
//! in the destination directory and are renamed into place, so no partial
//! file survives a failed run.

use std::io::Write;
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::Symbol;

/// Persistence errors for the symbol/coin stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode symbol list: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Outcome of a guarded file write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or fully replaced.
    Written,
    /// The file already existed and `force` was not given.
    SkippedExisting,
}

const COINS_HEADER: &str = "# List of coins (alphabetical, without USDT)\n\
# You can add/remove/edit coins manually; comments allowed with '#'\n\
# Example: keep only coins you want to prioritize\n\n";

/// Persist the fetched symbol list as a JSON array.
pub fn write_symbols(
    path: &Path,
    symbols: &[Symbol],
    force: bool,
) -> Result<WriteOutcome, StoreError> {
    if path.exists() && !force {
        warn!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
        return Ok(WriteOutcome::SkippedExisting);
    }

    let mut body = serde_json::to_string_pretty(symbols)?;
    body.push('\n');
    replace_file(path, body.as_bytes())?;

    info!("Saved {} symbols to {}", symbols.len(), path.display());
    Ok(WriteOutcome::Written)
}

/// Persist the hand-editable coin list: one base asset per line,
/// alphabetical, `USDT` suffix stripped, behind the documented header.
pub fn write_coins(
    path: &Path,
    symbols: &[Symbol],
    force: bool,
) -> Result<WriteOutcome, StoreError> {
    if path.exists() && !force {
        warn!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
        return Ok(WriteOutcome::SkippedExisting);
    }

    let mut coins: Vec<&str> = symbols.iter().map(Symbol::coin).collect();
    coins.sort_unstable();

    let mut body = String::from(COINS_HEADER);
    for coin in &coins {
        body.push_str(coin);
        body.push('\n');
    }
    replace_file(path, body.as_bytes())?;

    info!("Saved {} coins to {}", coins.len(), path.display());
    Ok(WriteOutcome::Written)
}

/// Atomic replace: write next to the target, then rename over it.
pub(crate) fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |source: std::io::Error| StoreError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_error)?;
    tmp.write_all(bytes).map_err(io_error)?;
    tmp.persist(path).map_err(|error| io_error(error.error))?;
    Ok(())
}

use thiserror::Error;

use symfetch_core::{ConfigError, SourceError, StoreError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Fetch(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Command(_) => 2,
            Self::Fetch(_) => 3,
            Self::Config(_) => 4,
            Self::Store(_) => 10,
        }
    }
}

//! Core contracts for symfetch.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The HTTP transport seam used by source adapters
//! - The BingX contract-catalog adapter
//! - Symbol/coin file stores and bot-config mutation

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod source;
pub mod store;

pub use adapters::{BingxSource, DEFAULT_BASE_URL};
pub use config::{update_top_symbols, ConfigError, TopSelection};
pub use domain::{Contract, Symbol};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};
pub use source::{SourceError, SourceErrorKind, SymbolSource};
pub use store::{write_coins, write_symbols, StoreError, WriteOutcome};

//! BingX USDT-M futures contract catalog adapter.
//!
//! One asynchronous GET against the public contracts endpoint returns the
//! whole catalog wrapped in the exchange envelope
//! `{"code": 0, "msg": "", "data": [...]}`. Entries are decoded one by one
//! so a single malformed listing is skipped with a warning instead of
//! failing the run.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{info, warn};
use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest};
use crate::source::{SourceError, SymbolSource};
use crate::{Contract, Symbol};

/// Production API origin for the USDT-M futures catalog.
pub const DEFAULT_BASE_URL: &str = "https://open-api.bingx.com";

const CONTRACTS_PATH: &str = "/openApi/swap/v2/quote/contracts";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Response envelope wrapping every BingX REST payload.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    msg: String,
    data: Option<Vec<serde_json::Value>>,
}

/// Contract catalog source backed by the BingX REST API.
pub struct BingxSource {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl BingxSource {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Point the adapter at a different API origin (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Per-request timeout budget in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn fetch(&self) -> Result<Vec<Symbol>, SourceError> {
        let url = format!("{}{}", self.base_url, CONTRACTS_PATH);
        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);

        let response = self.http.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("failed to fetch contracts: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::rejected(format!(
                "contracts endpoint returned HTTP {}",
                response.status
            )));
        }

        let envelope: ApiEnvelope = serde_json::from_str(&response.body)
            .map_err(|error| SourceError::decode(format!("unexpected contracts response: {error}")))?;

        if envelope.code != 0 {
            return Err(SourceError::rejected(format!(
                "exchange rejected the request: code={} msg={}",
                envelope.code, envelope.msg
            )));
        }

        let entries = envelope
            .data
            .ok_or_else(|| SourceError::decode("contracts response is missing 'data'"))?;

        info!("Fetched {} contracts from BingX", entries.len());

        let mut symbols = Vec::with_capacity(entries.len());
        for entry in entries {
            let contract: Contract = match serde_json::from_value(entry) {
                Ok(contract) => contract,
                Err(error) => {
                    warn!("Skipping malformed contract entry: {error}");
                    continue;
                }
            };

            if !contract.is_active_usdtm() {
                continue;
            }

            match Symbol::parse(&contract.symbol) {
                Ok(symbol) => symbols.push(symbol),
                Err(error) => warn!("Skipping contract '{}': {error}", contract.symbol),
            }
        }

        if symbols.is_empty() {
            return Err(SourceError::empty(
                "no active USDT-M symbols in the contract catalog",
            ));
        }

        info!("Filtered {} USDT-M perpetual symbols", symbols.len());
        Ok(symbols)
    }
}

impl SymbolSource for BingxSource {
    fn fetch_symbols<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Symbol>, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch())
    }
}

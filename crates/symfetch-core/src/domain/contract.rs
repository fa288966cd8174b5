use serde::Deserialize;

/// Raw catalog entry as served by the exchange contracts endpoint.
///
/// Only the fields the fetcher inspects are modeled; the payload carries
/// many more (precision, leverage caps, fee tiers) that are ignored.
/// `currency` and `status` default when absent so an entry simply fails
/// the keep-filter instead of failing the whole decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    /// Exchange spelling of the pair, e.g. `BTC-USDT`.
    pub symbol: String,
    /// Settlement/quote currency for the contract.
    #[serde(default)]
    pub currency: String,
    /// Listing status; `1` means actively trading.
    #[serde(default)]
    pub status: i64,
}

impl Contract {
    /// Whether this entry is an active USDT-margined contract.
    pub fn is_active_usdtm(&self) -> bool {
        self.currency == "USDT" && self.status == 1
    }
}

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 32;

/// Normalized USDT-M perpetual symbol.
///
/// The exchange spells pairs with a dash (`BTC-USDT`); downstream tooling
/// expects the joined form (`BTCUSDT`), so parsing removes dashes and
/// uppercases. Listings such as `1INCH-USDT` or `1000PEPE-USDT` start with
/// digits, so any ASCII alphanumeric character is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol: trim, drop dashes, uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|ch| *ch != '-')
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        if normalized.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            if !ch.is_ascii_alphanumeric() {
                return Err(ValidationError::SymbolInvalidChar { ch, index });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base asset name used in the coin list (`BTCUSDT` -> `BTC`).
    pub fn coin(&self) -> &str {
        self.0.strip_suffix("USDT").unwrap_or(&self.0)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

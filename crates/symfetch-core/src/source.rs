use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::Symbol;

/// Fetch error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure: the exchange could not be reached in time.
    Unavailable,
    /// The exchange answered but refused the request (HTTP or API code).
    Rejected,
    /// The response body did not match the documented envelope.
    Decode,
    /// The catalog contained no usable symbols.
    Empty,
}

/// Structured fetch error surfaced to the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Rejected,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Decode,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Empty,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Rejected => "source.rejected",
            SourceErrorKind::Decode => "source.decode",
            SourceErrorKind::Empty => "source.empty",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Ordered symbol catalog provider.
///
/// The remote exchange sits behind this trait so a fixture-backed double
/// can stand in for it under test. Implementations return the catalog in
/// the order the source serves it; callers rely on that ordering for
/// `--limit` and the `top_symbols` count policy.
pub trait SymbolSource: Send + Sync {
    fn fetch_symbols<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Symbol>, SourceError>> + Send + 'a>>;
}

//! Provider trait definitions.
//!
//! The HTTP handlers only see these traits, so tests can swap in providers
//! pointed at mock upstreams.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ChartInfo, QuoteTypeInfo, SecurityCode};

/// Source of listing metadata and current prices.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch descriptive metadata (display name) for a security.
    ///
    /// An empty result list is returned as `Ok`; only transport and status
    /// failures are errors.
    async fn lookup_quote_type(&self, code: &SecurityCode)
        -> Result<QuoteTypeInfo, MarketDataError>;

    /// Fetch chart metadata (current regular-market price) for a security.
    ///
    /// Classified independently of [`lookup_quote_type`](Self::lookup_quote_type).
    async fn lookup_chart(&self, code: &SecurityCode) -> Result<ChartInfo, MarketDataError>;
}

/// Source of dividend-per-share figures.
#[async_trait]
pub trait DividendProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch the most relevant dividend per share for a security.
    ///
    /// Returns [`MarketDataError::NoDividendData`] when the disclosure has no
    /// usable row.
    async fn lookup_dividend(&self, code: &SecurityCode) -> Result<f64, MarketDataError>;
}

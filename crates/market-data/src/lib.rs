//! Kabuapi Market Data Crate
//!
//! Upstream clients for the data a Tokyo Stock Exchange listing lookup needs:
//! - Yahoo Finance quote-type metadata (display name)
//! - Yahoo Finance chart metadata (current price)
//! - IR BANK dividend disclosures (dividend per share)
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  SecurityCode    |  (validated numeric code, raw form kept for URLs)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  QuoteProvider   |     | DividendProvider |  (traits, one call per upstream)
//! +------------------+     +------------------+
//!          |                        |
//!          v                        v
//! +------------------+     +------------------+
//! |  YahooProvider   |     |  IrBankProvider  |
//! +------------------+     +------------------+
//!          |                        |
//!          +-----------+------------+
//!                      v
//!             +------------------+
//!             | MarketDataError  |  --> ErrorKind (NotFound / ServiceUnavailable / UpstreamFailure)
//!             +------------------+
//! ```
//!
//! Every provider call is stateless: one HTTP request, one classified result,
//! no caching and no retries.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{ErrorKind, MarketDataError};
pub use models::{
    ChartInfo, ChartMeta, ParseSecurityCodeError, QuoteTypeInfo, QuoteTypeSummary, SecurityCode,
};
pub use provider::irbank::{fiscal_year, select_dividend, IrBankProvider};
pub use provider::yahoo::YahooProvider;
pub use provider::{build_http_client, DividendProvider, QuoteProvider};

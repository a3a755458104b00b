//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all upstream operations
//! - [`ErrorKind`]: The three-way classification the HTTP layer maps to a status

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while talking to an upstream provider.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method, so callers never need to match on individual variants to decide
/// what the client should see.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered 404 for this symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The dividend disclosure had neither a forecast row nor a row for the
    /// current fiscal year.
    #[error("No dividend figure in disclosure")]
    NoDividendData,

    /// The provider signalled a transient outage (503, or a 302 busy redirect).
    #[error("Service unavailable: {provider} (HTTP {status})")]
    ServiceUnavailable {
        /// The provider that is unavailable
        provider: String,
        /// The HTTP status it answered with
        status: u16,
    },

    /// The provider answered with a status outside the ones we classify.
    #[error("Unexpected status: {provider} (HTTP {status})")]
    UnexpectedStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status it answered with
        status: u16,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode {provider} response: {message}")]
    Decode {
        /// The provider whose body failed to decode
        provider: String,
        /// The decoder's message
        message: String,
    },

    /// A row selected from a CSV disclosure was malformed.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of what was wrong with the row
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the client-facing classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kabuapi_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::SymbolNotFound("7203.T".to_string());
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    ///
    /// let error = MarketDataError::ServiceUnavailable { provider: "YAHOO".to_string(), status: 503 };
    /// assert_eq!(error.kind(), ErrorKind::ServiceUnavailable);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SymbolNotFound(_) | Self::NoDividendData => ErrorKind::NotFound,

            Self::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,

            Self::UnexpectedStatus { .. }
            | Self::Timeout { .. }
            | Self::Decode { .. }
            | Self::InvalidFormat { .. }
            | Self::Network(_) => ErrorKind::UpstreamFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_not_found_is_not_found() {
        let error = MarketDataError::SymbolNotFound("9999.T".to_string());
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_dividend_is_not_found() {
        assert_eq!(MarketDataError::NoDividendData.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_service_unavailable_is_service_unavailable() {
        let error = MarketDataError::ServiceUnavailable {
            provider: "IRBANK".to_string(),
            status: 302,
        };
        assert_eq!(error.kind(), ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_unexpected_status_is_upstream_failure() {
        let error = MarketDataError::UnexpectedStatus {
            provider: "YAHOO".to_string(),
            status: 500,
        };
        assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
    }

    #[test]
    fn test_timeout_is_upstream_failure() {
        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
    }

    #[test]
    fn test_invalid_format_is_upstream_failure() {
        let error = MarketDataError::InvalidFormat {
            message: "missing dividend column".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("7203.T".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: 7203.T");

        let error = MarketDataError::ServiceUnavailable {
            provider: "YAHOO".to_string(),
            status: 503,
        };
        assert_eq!(format!("{}", error), "Service unavailable: YAHOO (HTTP 503)");

        let error = MarketDataError::Decode {
            provider: "YAHOO".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to decode YAHOO response: expected value"
        );
    }
}

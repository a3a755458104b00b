//! Shared HTTP plumbing for the upstream providers.

use std::time::Duration;

use reqwest::{redirect, Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::errors::MarketDataError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the client shared by all providers.
///
/// Redirects are not followed: the disclosure site answers 302 when it is
/// busy, and that has to reach [`classify_status`] rather than be chased.
pub fn build_http_client(timeout: Duration) -> Result<Client, MarketDataError> {
    Ok(Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .user_agent(USER_AGENT)
        .build()?)
}

/// Send a GET request and classify the response status.
///
/// Only a 200 response is returned; everything else becomes a
/// [`MarketDataError`].
pub(crate) async fn get(
    client: &Client,
    provider: &'static str,
    symbol: &str,
    url: &str,
) -> Result<Response, MarketDataError> {
    debug!("{} request: {}", provider, url);

    let response = client.get(url).send().await.map_err(|e| {
        warn!("{} request for {} failed: {}", provider, symbol, e);
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    })?;

    classify_status(provider, symbol, response.status())?;
    Ok(response)
}

/// Three-way status classification shared by every upstream call.
pub(crate) fn classify_status(
    provider: &'static str,
    symbol: &str,
    status: StatusCode,
) -> Result<(), MarketDataError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        StatusCode::FOUND | StatusCode::SERVICE_UNAVAILABLE => {
            warn!("{} unavailable for {} (HTTP {})", provider, symbol, status);
            Err(MarketDataError::ServiceUnavailable {
                provider: provider.to_string(),
                status: status.as_u16(),
            })
        }
        _ => {
            warn!("{} answered HTTP {} for {}", provider, status, symbol);
            Err(MarketDataError::UnexpectedStatus {
                provider: provider.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

/// Read a 200 response body, mapping a broken stream to a transport error.
pub(crate) async fn read_text(
    provider: &'static str,
    response: Response,
) -> Result<String, MarketDataError> {
    response.text().await.map_err(|e| {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    })
}

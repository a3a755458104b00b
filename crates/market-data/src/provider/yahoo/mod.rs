//! Yahoo Finance market data provider.
//!
//! Two endpoints are used, each for a single field:
//! - v1 quoteType, for the listing's display name
//! - v8 chart, for the current regular-market price
//!
//! Tokyo listings are addressed as `{code}.T`.

mod models;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::{ChartInfo, QuoteTypeInfo, SecurityCode};
use crate::provider::http;
use crate::provider::QuoteProvider;

use models::{YahooChartResponse, YahooQuoteTypeResponse};

pub const DEFAULT_QUOTE_TYPE_URL: &str = "https://query2.finance.yahoo.com/v1/finance/quoteType";
pub const DEFAULT_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance quote-type and chart client.
pub struct YahooProvider {
    client: Client,
    quote_type_url: String,
    chart_url: String,
}

impl YahooProvider {
    /// Create a provider against the public Yahoo Finance endpoints.
    pub fn new(client: Client) -> Self {
        Self::with_base_urls(client, DEFAULT_QUOTE_TYPE_URL, DEFAULT_CHART_URL)
    }

    /// Create a provider against custom endpoints (mirrors, mock servers).
    pub fn with_base_urls(client: Client, quote_type_url: &str, chart_url: &str) -> Self {
        Self {
            client,
            quote_type_url: quote_type_url.trim_end_matches('/').to_string(),
            chart_url: chart_url.trim_end_matches('/').to_string(),
        }
    }

    fn quote_type_endpoint(&self, symbol: &str) -> String {
        format!(
            "{}/?symbol={}&lang=ja-JP&region=JP",
            self.quote_type_url, symbol
        )
    }

    fn chart_endpoint(&self, symbol: &str) -> String {
        format!("{}/{}?interval=1d", self.chart_url, symbol)
    }

    /// GET a Yahoo endpoint and decode its JSON body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        symbol: &str,
        url: &str,
    ) -> Result<T, MarketDataError> {
        let response = http::get(&self.client, PROVIDER_ID, symbol, url).await?;
        let body = http::read_text(PROVIDER_ID, response).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode Yahoo response for {}: {}", symbol, e);
            MarketDataError::Decode {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup_quote_type(
        &self,
        code: &SecurityCode,
    ) -> Result<QuoteTypeInfo, MarketDataError> {
        let symbol = code.yahoo_symbol();
        let url = self.quote_type_endpoint(&symbol);
        let response: YahooQuoteTypeResponse = self.fetch_json(&symbol, &url).await?;
        Ok(response.into())
    }

    async fn lookup_chart(&self, code: &SecurityCode) -> Result<ChartInfo, MarketDataError> {
        let symbol = code.yahoo_symbol();
        let url = self.chart_endpoint(&symbol);
        let response: YahooChartResponse = self.fetch_json(&symbol, &url).await?;
        Ok(response.into())
    }
}

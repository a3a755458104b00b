//! Yahoo Finance API response models.
//!
//! Only the fields the service reads are declared; serde ignores the rest.
//! Yahoo sends `"result": null` alongside an `error` object on some failures,
//! so result lists are optional on the wire.

use serde::Deserialize;

use crate::models::{ChartInfo, ChartMeta, QuoteTypeInfo, QuoteTypeSummary};

/// Response wrapper for the v1 quoteType API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteTypeResponse {
    pub quote_type: YahooQuoteTypeEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteTypeEnvelope {
    pub result: Option<Vec<YahooQuoteTypeResult>>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteTypeResult {
    pub long_name: Option<String>,
}

/// Response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartEnvelope {
    pub result: Option<Vec<YahooChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: YahooChartMeta,
    // Note: timestamp and indicators exist but only the meta block is used
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub regular_market_price: Option<f64>,
}

impl From<YahooQuoteTypeResponse> for QuoteTypeInfo {
    fn from(response: YahooQuoteTypeResponse) -> Self {
        let results = response
            .quote_type
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|r| QuoteTypeSummary {
                long_name: r.long_name,
            })
            .collect();
        QuoteTypeInfo { results }
    }
}

impl From<YahooChartResponse> for ChartInfo {
    fn from(response: YahooChartResponse) -> Self {
        let results = response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|r| ChartMeta {
                regular_market_price: r.meta.regular_market_price,
            })
            .collect();
        ChartInfo { results }
    }
}

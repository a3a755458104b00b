//! IR BANK dividend disclosure provider.
//!
//! Fetches `{base}/{code}/fy-stock-dividend.csv` and selects a single
//! dividend-per-share figure from it. See [`select_dividend`] for the rules.

mod dividend;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Tokyo;
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::SecurityCode;
use crate::provider::http;
use crate::provider::DividendProvider;

pub use dividend::{fiscal_year, select_dividend, FORECAST_MARKER};

pub const DEFAULT_BASE_URL: &str = "https://f.irbank.net/files";
const PROVIDER_ID: &str = "IRBANK";

/// IR BANK dividend CSV client.
pub struct IrBankProvider {
    client: Client,
    base_url: String,
}

impl IrBankProvider {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn csv_endpoint(&self, code: &SecurityCode) -> String {
        format!("{}/{}/fy-stock-dividend.csv", self.base_url, code)
    }

    /// Today in Tokyo, where the fiscal calendar is kept.
    fn today() -> NaiveDate {
        Utc::now().with_timezone(&Tokyo).date_naive()
    }
}

#[async_trait]
impl DividendProvider for IrBankProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn lookup_dividend(&self, code: &SecurityCode) -> Result<f64, MarketDataError> {
        let url = self.csv_endpoint(code);
        let response = http::get(&self.client, PROVIDER_ID, code.as_str(), &url).await?;
        let body = http::read_text(PROVIDER_ID, response).await?;

        let year = fiscal_year(Self::today());
        let dividend = select_dividend(&body, year)?;
        debug!("IR BANK dividend for {} (FY{}): {}", code, year, dividend);
        Ok(dividend)
    }
}

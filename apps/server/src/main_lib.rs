use std::sync::Arc;

use crate::config::Config;
use kabuapi_market_data::{
    build_http_client, DividendProvider, IrBankProvider, QuoteProvider, YahooProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_provider: Arc<dyn QuoteProvider>,
    pub dividend_provider: Arc<dyn DividendProvider>,
}

pub fn init_tracing() {
    let log_format = std::env::var("KABU_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // One pooled client shared by both providers
    let client = build_http_client(config.upstream_timeout)?;

    let quote_provider = Arc::new(YahooProvider::with_base_urls(
        client.clone(),
        &config.yahoo_quote_type_url,
        &config.yahoo_chart_url,
    ));
    let dividend_provider = Arc::new(IrBankProvider::with_base_url(client, &config.irbank_url));

    tracing::info!(
        "Upstreams: quoteType={} chart={} dividend={}",
        config.yahoo_quote_type_url,
        config.yahoo_chart_url,
        config.irbank_url
    );

    Ok(Arc::new(AppState {
        quote_provider,
        dividend_provider,
    }))
}

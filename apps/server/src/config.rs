use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use kabuapi_market_data::provider::{irbank, yahoo};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub upstream_timeout: Duration,
    pub yahoo_quote_type_url: String,
    pub yahoo_chart_url: String,
    pub irbank_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 1323)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            upstream_timeout: Duration::from_millis(5_000),
            yahoo_quote_type_url: yahoo::DEFAULT_QUOTE_TYPE_URL.to_string(),
            yahoo_chart_url: yahoo::DEFAULT_CHART_URL.to_string(),
            irbank_url: irbank::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("KABU_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid KABU_LISTEN_ADDR: {}", raw))?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("KABU_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: duration_ms("KABU_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            upstream_timeout: duration_ms("KABU_UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout),
            yahoo_quote_type_url: std::env::var("KABU_YAHOO_QUOTE_TYPE_URL")
                .unwrap_or(defaults.yahoo_quote_type_url),
            yahoo_chart_url: std::env::var("KABU_YAHOO_CHART_URL")
                .unwrap_or(defaults.yahoo_chart_url),
            irbank_url: std::env::var("KABU_IRBANK_URL").unwrap_or(defaults.irbank_url),
        })
    }
}

fn duration_ms(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

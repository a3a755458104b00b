use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use kabuapi_market_data::{
    build_http_client, fiscal_year, DividendProvider, ErrorKind, IrBankProvider, MarketDataError,
    QuoteProvider, SecurityCode, YahooProvider,
};

fn code(raw: &str) -> SecurityCode {
    raw.parse().unwrap()
}

fn yahoo(server: &MockServer) -> YahooProvider {
    let client = build_http_client(Duration::from_secs(5)).unwrap();
    YahooProvider::with_base_urls(
        client,
        &server.url("/v1/finance/quoteType"),
        &server.url("/v8/finance/chart"),
    )
}

fn irbank(server: &MockServer, timeout: Duration) -> IrBankProvider {
    let client = build_http_client(timeout).unwrap();
    IrBankProvider::with_base_url(client, &server.url("/files"))
}

#[tokio::test]
async fn quote_type_reads_long_name() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/finance/quoteType/")
            .query_param("symbol", "7203.T")
            .query_param("lang", "ja-JP")
            .query_param("region", "JP");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteType":{"result":[{"symbol":"7203.T","longName":"Toyota Motor"}],"error":null}}"#);
    });

    let info = yahoo(&server).lookup_quote_type(&code("7203")).await.unwrap();

    mock.assert();
    assert_eq!(info.long_name(), Some("Toyota Motor"));
}

#[tokio::test]
async fn quote_type_empty_result_is_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/finance/quoteType/");
        then.status(200)
            .body(r#"{"quoteType":{"result":[],"error":null}}"#);
    });

    let info = yahoo(&server).lookup_quote_type(&code("1")).await.unwrap();
    assert!(info.is_empty());
}

#[tokio::test]
async fn chart_reads_regular_market_price() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/7203.T")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":[{"meta":{"symbol":"7203.T","regularMarketPrice":2500.0}}],"error":null}}"#);
    });

    let info = yahoo(&server).lookup_chart(&code("7203")).await.unwrap();

    mock.assert();
    assert_eq!(info.regular_market_price(), Some(2500.0));
}

#[tokio::test]
async fn yahoo_statuses_are_classified() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/9999.T");
        then.status(404)
            .body(r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/8888.T");
        then.status(503);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/7777.T");
        then.status(500);
    });

    let provider = yahoo(&server);
    let kind = |e: MarketDataError| e.kind();

    assert_eq!(
        provider.lookup_chart(&code("9999")).await.map_err(kind).unwrap_err(),
        ErrorKind::NotFound
    );
    assert_eq!(
        provider.lookup_chart(&code("8888")).await.map_err(kind).unwrap_err(),
        ErrorKind::ServiceUnavailable
    );
    assert_eq!(
        provider.lookup_chart(&code("7777")).await.map_err(kind).unwrap_err(),
        ErrorKind::UpstreamFailure
    );
}

#[tokio::test]
async fn yahoo_garbage_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/finance/quoteType/");
        then.status(200).body("<html>consent</html>");
    });

    let err = yahoo(&server)
        .lookup_quote_type(&code("7203"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Decode { .. }));
    assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
}

#[tokio::test]
async fn irbank_forecast_row() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/files/7203/fy-stock-dividend.csv");
        then.status(200).body(
            "年度,一株配当,剰余金の配当\n2024/04,100,13000\n2025/04（予想）,120.5,-\n",
        );
    });

    let dividend = irbank(&server, Duration::from_secs(5))
        .lookup_dividend(&code("7203"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(dividend, 120.5);
}

#[tokio::test]
async fn irbank_current_fiscal_year_row() {
    let year = fiscal_year(chrono::Utc::now().with_timezone(&chrono_tz::Asia::Tokyo).date_naive());
    let body = format!("年度,一株配当\n{}/04,80,1\n", year);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/files/6758/fy-stock-dividend.csv");
        then.status(200).body(body);
    });

    let dividend = irbank(&server, Duration::from_secs(5))
        .lookup_dividend(&code("6758"))
        .await
        .unwrap();
    assert_eq!(dividend, 80.0);
}

#[tokio::test]
async fn irbank_no_usable_row_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/files/1301/fy-stock-dividend.csv");
        then.status(200).body("年度,一株配当\n1999/04,5,1\n");
    });

    let err = irbank(&server, Duration::from_secs(5))
        .lookup_dividend(&code("1301"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::NoDividendData));
}

#[tokio::test]
async fn irbank_busy_redirect_is_not_followed() {
    let server = MockServer::start();
    let busy = server.mock(|when, then| {
        when.method(GET).path("/files/7203/fy-stock-dividend.csv");
        then.status(302).header("location", "/busy");
    });
    let target = server.mock(|when, then| {
        when.method(GET).path("/busy");
        then.status(200).body("2025/04（予想）,1,-\n");
    });

    let err = irbank(&server, Duration::from_secs(5))
        .lookup_dividend(&code("7203"))
        .await
        .unwrap_err();

    busy.assert();
    target.assert_calls(0);
    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
}

#[tokio::test]
async fn irbank_timeout_is_upstream_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/files/7203/fy-stock-dividend.csv");
        then.status(200)
            .delay(Duration::from_secs(2))
            .body("2025/04（予想）,1,-\n");
    });

    let err = irbank(&server, Duration::from_millis(100))
        .lookup_dividend(&code("7203"))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Timeout { .. }));
    assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
}

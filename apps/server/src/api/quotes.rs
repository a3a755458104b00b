use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use kabuapi_market_data::SecurityCode;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{PriceResponse, SearchResponse},
};

/// Name and price of a listing, always fetched together.
struct Listing {
    name: String,
    price: f64,
}

fn parse_code(id: &str) -> ApiResult<SecurityCode> {
    id.parse()
        .map_err(|_| ApiError::InvalidIdentifier(id.to_string()))
}

/// Identifier from the `{id}` segment.
///
/// A segment that does not decode to UTF-8 is still an invalid identifier,
/// reported with its raw, percent-encoded form.
fn code_from_path(
    id: Result<Path<String>, PathRejection>,
    uri: &Uri,
) -> ApiResult<SecurityCode> {
    match id {
        Ok(Path(id)) => parse_code(&id),
        Err(rejection) => {
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            tracing::debug!("Rejected path {}: {}", uri.path(), rejection);
            Err(ApiError::InvalidIdentifier(raw.to_string()))
        }
    }
}

/// Quote-type then chart, strictly in order.
///
/// Empty result rows from either call mean the provider knows the query but
/// has nothing for this code, which is reported as not found.
async fn lookup_listing(state: &AppState, code: &SecurityCode) -> ApiResult<Listing> {
    let quote_type = state
        .quote_provider
        .lookup_quote_type(code)
        .await
        .map_err(|e| ApiError::upstream(code, e))?;
    let chart = state
        .quote_provider
        .lookup_chart(code)
        .await
        .map_err(|e| ApiError::upstream(code, e))?;

    if quote_type.is_empty() || chart.is_empty() {
        tracing::debug!(
            "{} returned no rows for {} (quoteType={}, chart={})",
            state.quote_provider.id(),
            code,
            quote_type.results.len(),
            chart.results.len()
        );
        return Err(ApiError::NotFound(code.clone()));
    }

    Ok(Listing {
        name: quote_type.long_name().unwrap_or_default().to_string(),
        price: chart.regular_market_price().unwrap_or_default(),
    })
}

async fn search(
    id: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SearchResponse>> {
    let code = code_from_path(id, &uri)?;
    let listing = lookup_listing(&state, &code).await?;
    let dividend = state
        .dividend_provider
        .lookup_dividend(&code)
        .await
        .map_err(|e| ApiError::upstream(&code, e))?;
    tracing::debug!(
        "{} dividend for {}: {}",
        state.dividend_provider.id(),
        code,
        dividend
    );

    Ok(Json(SearchResponse {
        number: code.number(),
        name: listing.name,
        price: listing.price,
        dividend,
        error: String::new(),
    }))
}

async fn price(
    id: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceResponse>> {
    let code = code_from_path(id, &uri)?;
    let listing = lookup_listing(&state, &code).await?;

    Ok(Json(PriceResponse {
        number: code.number(),
        name: listing.name,
        price: listing.price,
        error: String::new(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search/{id}", get(search))
        .route("/price/{id}", get(price))
}

use serde::Serialize;

/// Body of a successful `GET /search/{id}`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub number: u64,
    pub name: String,
    pub price: f64,
    pub dividend: f64,
    pub error: String,
}

/// Body of a successful `GET /price/{id}`.
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub number: u64,
    pub name: String,
    pub price: f64,
    pub error: String,
}

/// Body of any failed quote request.
///
/// `number` is omitted when the identifier itself could not be parsed.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    pub error: String,
}

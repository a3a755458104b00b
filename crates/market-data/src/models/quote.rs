/// Descriptive metadata returned by a quote-type lookup.
///
/// An empty `results` list is a valid answer: the provider understood the
/// query but has nothing for the symbol. Callers decide what that means.
#[derive(Clone, Debug, Default)]
pub struct QuoteTypeInfo {
    pub results: Vec<QuoteTypeSummary>,
}

/// One row of a quote-type lookup.
#[derive(Clone, Debug, Default)]
pub struct QuoteTypeSummary {
    pub long_name: Option<String>,
}

impl QuoteTypeInfo {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Display name from the first row.
    pub fn long_name(&self) -> Option<&str> {
        self.results.first().and_then(|r| r.long_name.as_deref())
    }
}

/// Price metadata returned by a chart lookup.
#[derive(Clone, Debug, Default)]
pub struct ChartInfo {
    pub results: Vec<ChartMeta>,
}

/// The `meta` block of one chart row.
#[derive(Clone, Debug, Default)]
pub struct ChartMeta {
    pub regular_market_price: Option<f64>,
}

impl ChartInfo {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Current regular-market price from the first row.
    pub fn regular_market_price(&self) -> Option<f64> {
        self.results.first().and_then(|m| m.regular_market_price)
    }
}

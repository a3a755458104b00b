//! Dividend selection from IR BANK's `fy-stock-dividend.csv`.
//!
//! The file is one row per fiscal period, dividend per share in the second
//! column. Forecast rows carry a `（予想）` tag after the period.

use chrono::{Datelike, NaiveDate};

use crate::errors::MarketDataError;

/// Marker IR BANK appends to forecast rows.
pub const FORECAST_MARKER: &str = "（予想）";

/// Fiscal year for a date, with years starting in April.
///
/// January to March belong to the previous year's fiscal period.
pub fn fiscal_year(date: NaiveDate) -> i32 {
    if date.month() >= 4 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Pick the dividend per share out of a disclosure CSV.
///
/// The latest forecast row wins. Without one, the latest row for the April
/// period of `fiscal_year` is used. The first matching row decides the
/// outcome: if it is malformed the whole lookup fails, no other row is tried.
pub fn select_dividend(body: &str, fiscal_year: i32) -> Result<f64, MarketDataError> {
    if let Some(line) = body.lines().rev().find(|l| l.contains(FORECAST_MARKER)) {
        return parse_dividend(line);
    }

    // Only April year-ends are recognised.
    let period = format!("{}/04", fiscal_year);
    if let Some(line) = body.lines().rev().find(|l| l.contains(&period)) {
        return parse_dividend(line);
    }

    Err(MarketDataError::NoDividendData)
}

fn parse_dividend(line: &str) -> Result<f64, MarketDataError> {
    let field = line
        .split(',')
        .nth(1)
        .ok_or_else(|| MarketDataError::InvalidFormat {
            message: format!("missing dividend column in row {:?}", line),
        })?;

    let dividend = field
        .trim()
        .parse::<f64>()
        .map_err(|e| MarketDataError::InvalidFormat {
            message: format!("dividend {:?} is not a number: {}", field, e),
        })?;
    if !dividend.is_finite() {
        return Err(MarketDataError::InvalidFormat {
            message: format!("dividend {:?} is not finite", field),
        });
    }
    Ok(dividend)
}

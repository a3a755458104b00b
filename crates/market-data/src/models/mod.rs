//! Market data models
//!
//! This module contains the core data types for listing lookups:
//! - `security_code` - Validated Tokyo Stock Exchange security code (SecurityCode)
//! - `quote` - Provider-agnostic quote-type and chart summaries (QuoteTypeInfo, ChartInfo)

mod quote;
mod security_code;

pub use quote::{ChartInfo, ChartMeta, QuoteTypeInfo, QuoteTypeSummary};
pub use security_code::{ParseSecurityCodeError, SecurityCode};

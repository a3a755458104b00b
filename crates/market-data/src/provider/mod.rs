//! Upstream provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` and `DividendProvider` traits the HTTP layer depends on
//! - A shared HTTP client builder and status classification
//! - Concrete provider implementations (Yahoo Finance, IR BANK)
//!
//! Providers receive an already validated `SecurityCode`. Every call is a single
//! request with no retry; the caller decides what to do with the classified error.

mod http;
mod traits;

pub mod irbank;
pub mod yahoo;

pub use http::build_http_client;
pub use traits::{DividendProvider, QuoteProvider};

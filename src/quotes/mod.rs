//! Stock quote lookup
//!
//! Turns a ticker and a [`QuotePeriod`] into a daily OHLCV series plus issuer
//! metadata, using the Yahoo Finance chart API. There is no caching or retry;
//! a failed lookup is reported to the caller as-is.

pub mod client;
pub mod period;
pub mod series;
pub mod yahoo;

pub use client::{normalize_ticker, QuoteClient};
pub use period::QuotePeriod;
pub use series::{IssuerInfo, PriceBar, QuoteSeries};

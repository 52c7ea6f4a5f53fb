//! Yahoo Finance response shapes
//!
//! Only the fields the ledger uses are modeled. Everything is optional
//! because the upstream omits fields freely and pads arrays with nulls.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};

use super::period::QuotePeriod;
use super::series::{IssuerInfo, PriceBar, QuoteSeries};

/// Currency assumed when the upstream doesn't report one
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub currency: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub asset_profile: Option<AssetProfile>,
}

#[derive(Debug, Deserialize)]
pub struct AssetProfile {
    pub sector: Option<String>,
}

impl QuoteSummaryResponse {
    /// Sector of the first result, if reported and non-empty
    pub fn sector(self) -> Option<String> {
        self.quote_summary
            .result?
            .into_iter()
            .next()?
            .asset_profile?
            .sector
            .filter(|s| !s.trim().is_empty())
    }
}

impl ChartResponse {
    /// Convert a chart response into a normalized series
    ///
    /// Bars with any missing OHLC value are dropped. A response with no
    /// usable bars is reported as an unknown ticker.
    pub fn into_series(self, ticker: &str, period: QuotePeriod) -> LedgerResult<QuoteSeries> {
        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| LedgerError::ticker_not_found(ticker))?;

        let bars = collect_bars(&result);
        if bars.is_empty() {
            return Err(LedgerError::ticker_not_found(ticker));
        }

        let meta = result.meta;
        let company_name = meta
            .long_name
            .or(meta.short_name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ticker.to_string());
        let latest_price = meta
            .regular_market_price
            .or_else(|| bars.last().map(|b| b.close));

        Ok(QuoteSeries {
            ticker: ticker.to_string(),
            period,
            info: IssuerInfo {
                company_name,
                sector: None,
                currency: meta
                    .currency
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                latest_price,
            },
            bars,
        })
    }

    /// Upstream error text, if the response carries one
    pub fn error_message(&self) -> Option<String> {
        self.chart
            .error
            .as_ref()
            .map(|e| format!("{}: {}", e.code, e.description))
    }
}

fn collect_bars(result: &ChartResult) -> Vec<PriceBar> {
    let Some(columns) = result.indicators.quote.first() else {
        return Vec::new();
    };

    let mut bars: Vec<PriceBar> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            Some(PriceBar {
                date: exchange_date(ts, result.meta.gmtoffset)?,
                open: value_at(&columns.open, i)?,
                high: value_at(&columns.high, i)?,
                low: value_at(&columns.low, i)?,
                close: value_at(&columns.close, i)?,
                volume: value_at(&columns.volume, i).unwrap_or(0),
            })
        })
        .collect();

    bars.sort_by_key(|b| b.date);
    bars
}

fn value_at<T: Copy>(column: &[Option<T>], index: usize) -> Option<T> {
    column.get(index).copied().flatten()
}

/// Trading date of a bar in the exchange's own time zone
fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp.checked_add(gmtoffset)?, 0).map(|dt| dt.date_naive())
}

//! Normalized price series and issuer metadata

use chrono::NaiveDate;
use serde::Serialize;

use super::period::QuotePeriod;

/// One trading day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Descriptive data about the issuer of a ticker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuerInfo {
    pub company_name: String,
    pub sector: Option<String>,
    pub currency: String,
    pub latest_price: Option<f64>,
}

/// Result of a quote lookup; `bars` are in ascending date order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSeries {
    pub ticker: String,
    pub period: QuotePeriod,
    pub bars: Vec<PriceBar>,
    pub info: IssuerInfo,
}

impl QuoteSeries {
    pub fn first_close(&self) -> Option<f64> {
        self.bars.first().map(|b| b.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Percent change from the first to the last close
    ///
    /// `None` with fewer than two bars or a zero starting close.
    pub fn change_percent(&self) -> Option<f64> {
        if self.bars.len() < 2 {
            return None;
        }
        let first = self.first_close()?;
        let last = self.last_close()?;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

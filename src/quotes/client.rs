//! Blocking HTTP client for the quote source

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::settings::QuoteSettings;
use crate::error::{LedgerError, LedgerResult};

use super::period::QuotePeriod;
use super::series::QuoteSeries;
use super::yahoo::{ChartResponse, QuoteSummaryResponse};

/// Fetches price series from the configured market-data endpoint
pub struct QuoteClient {
    http: Client,
    endpoint: Url,
}

impl QuoteClient {
    /// Build a client from quote settings
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Config`] if the endpoint is not a usable base URL.
    pub fn new(settings: &QuoteSettings) -> LedgerResult<Self> {
        let endpoint = Url::parse(&settings.endpoint).map_err(|e| {
            LedgerError::Config(format!("Invalid quote endpoint '{}': {}", settings.endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(LedgerError::Config(format!(
                "Invalid quote endpoint '{}': not a base URL",
                settings.endpoint
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| LedgerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, endpoint })
    }

    /// Fetch the daily price series and issuer info for `ticker`
    ///
    /// The ticker is trimmed and upper-cased before the lookup.
    pub fn fetch(&self, ticker: &str, period: QuotePeriod) -> LedgerResult<QuoteSeries> {
        let ticker = normalize_ticker(ticker)?;

        let url = self.url(&["v8", "finance", "chart", ticker.as_str()], &[
            ("range", period.as_str()),
            ("interval", "1d"),
        ]);
        debug!(%url, "requesting price series");

        let response = self.http.get(url).send()?;
        let response = check_status(response, &ticker)?;
        let chart: ChartResponse = response.json()?;

        let mut series = chart.into_series(&ticker, period)?;
        series.info.sector = self.fetch_sector(&ticker);

        debug!(ticker = %series.ticker, bars = series.bars.len(), "received price series");
        Ok(series)
    }

    /// Best-effort sector lookup; any failure yields `None`
    fn fetch_sector(&self, ticker: &str) -> Option<String> {
        let url = self.url(
            &["v10", "finance", "quoteSummary", ticker],
            &[("modules", "assetProfile")],
        );

        let result = self
            .http
            .get(url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(|r| r.json::<QuoteSummaryResponse>());

        match result {
            Ok(summary) => summary.sector(),
            Err(e) => {
                debug!(ticker, error = %e, "sector lookup failed");
                None
            }
        }
    }

    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().extend_pairs(query);
        url
    }
}

/// Trim and upper-case a ticker, rejecting empty input
pub fn normalize_ticker(ticker: &str) -> LedgerResult<String> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(LedgerError::Validation("Ticker must not be empty".into()));
    }
    Ok(ticker)
}

fn check_status(response: Response, ticker: &str) -> LedgerResult<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => {
            if let Some(message) = response
                .json::<ChartResponse>()
                .ok()
                .and_then(|chart| chart.error_message())
            {
                debug!(ticker, %message, "quote source reported no data");
            }
            Err(LedgerError::ticker_not_found(ticker))
        }
        status => Err(LedgerError::Network(format!(
            "Quote request for {} failed with HTTP {}",
            ticker, status
        ))),
    }
}

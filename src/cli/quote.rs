//! Quote CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_quote_series;
use crate::error::LedgerResult;
use crate::quotes::{QuoteClient, QuotePeriod};

/// Arguments for `ledger quote`
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Ticker symbol, e.g. AAPL or 005930.KS
    pub ticker: String,
    /// Lookback period: 1d, 5d, 1mo, 3mo, 6mo or 1y
    #[arg(short, long, default_value = "1mo")]
    pub period: String,
}

/// Fetch and print a price series
pub fn handle_quote(settings: &Settings, args: &QuoteArgs) -> LedgerResult<()> {
    let period: QuotePeriod = args.period.parse()?;
    let client = QuoteClient::new(&settings.quote)?;

    let series = client.fetch(&args.ticker, period)?;
    print!("{}", format_quote_series(&series));
    Ok(())
}

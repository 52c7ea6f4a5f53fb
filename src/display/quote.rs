//! Quote series display formatting

use crate::quotes::QuoteSeries;

/// Format issuer info followed by one OHLCV row per trading day
pub fn format_quote_series(series: &QuoteSeries) -> String {
    let info = &series.info;
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", info.company_name, series.ticker));
    output.push_str(&format!(
        "Sector:   {}\n",
        info.sector.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!("Currency: {}\n", info.currency));
    match info.latest_price {
        Some(price) => output.push_str(&format!("Price:    {:.2}\n", price)),
        None => output.push_str("Price:    N/A\n"),
    }
    if let Some(change) = series.change_percent() {
        output.push_str(&format!("Change:   {:+.2}% over {}\n", change, series.period));
    }
    output.push('\n');

    output.push_str(&format!(
        "{:10} {:>12} {:>12} {:>12} {:>12} {:>14}\n",
        "Date", "Open", "High", "Low", "Close", "Volume"
    ));
    output.push_str(&"-".repeat(77));
    output.push('\n');

    for bar in &series.bars {
        output.push_str(&format!(
            "{:10} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14}\n",
            bar.date.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        ));
    }

    output
}

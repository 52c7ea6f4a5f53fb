//! Report CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthPeriod;
use crate::reports::MonthlySummary;
use crate::storage::{LedgerStore, Storage};

/// Arguments for `ledger stats`
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Also write the summary as CSV to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Build the monthly summary selected by `args`
pub fn build_summary(storage: &Storage, args: &StatsArgs) -> LedgerResult<MonthlySummary> {
    let period = match &args.month {
        Some(month) => MonthPeriod::parse(month)?,
        None => MonthPeriod::current(),
    };

    let records = storage.ledger.find_all()?;
    Ok(MonthlySummary::for_period(&records, period))
}

/// Print the monthly summary and optionally export it
pub fn handle_stats(storage: &Storage, settings: &Settings, args: &StatsArgs) -> LedgerResult<()> {
    let summary = build_summary(storage, args)?;
    print!("{}", summary.format_terminal(&settings.currency_symbol));

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        summary.export_csv(&mut writer)?;

        info!(path = %path.display(), period = %summary.period, "exported monthly summary");
        println!("\nExported to {}", path.display());
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mini_ledger::cli::{
    handle_add, handle_list, handle_quote, handle_stats, AddArgs, ListArgs, QuoteArgs, StatsArgs,
};
use mini_ledger::config::{paths::LedgerPaths, settings::Settings};
use mini_ledger::display::format_category_tree;
use mini_ledger::storage::{initialize_storage, needs_initialization, Storage};

/// Environment variable holding the log filter (falls back to `RUST_LOG`)
const LOG_ENV: &str = "MINI_LEDGER_LOG";

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger with stock quotes",
    long_about = "Mini Ledger records income and expense transactions in a local CSV \
                  file, summarizes them by month and category, and looks up daily \
                  stock price series."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense transaction
    Add(AddArgs),

    /// List transactions with income/expense totals
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the monthly summary by category
    Stats(StatsArgs),

    /// List the allowed categories for each transaction type
    Categories,

    /// Look up a daily price series for a stock ticker
    Quote(QuoteArgs),

    /// Initialize settings and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Add(args)) => {
            let storage = Storage::new(paths)?;
            handle_add(&storage, &settings, &args)?;
        }
        Some(Commands::List(args)) => {
            let storage = Storage::new(paths)?;
            handle_list(&storage, &settings, &args)?;
        }
        Some(Commands::Stats(args)) => {
            let storage = Storage::new(paths)?;
            handle_stats(&storage, &settings, &args)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_tree());
        }
        Some(Commands::Quote(args)) => {
            handle_quote(&settings, &args)?;
        }
        Some(Commands::Init) => {
            if !needs_initialization(&paths) {
                println!("Mini Ledger is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing Mini Ledger at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings: {}", paths.settings_file().display());
            println!("Ledger:   {}", paths.ledger_file().display());
            println!();
            println!("Run 'ledger add expense food 12000' to record your first transaction.");
        }
        Some(Commands::Config) => {
            println!("Mini Ledger Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Quote endpoint:  {}", settings.quote.endpoint);
            println!("  Quote timeout:   {}s", settings.quote.timeout_secs);
        }
        None => {
            println!("Mini Ledger - personal income and expense tracking");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}

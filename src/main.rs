use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tally::cli::{run_ledger, run_savings, LedgerSession, Prompter, SavingsSession};
use tally::config::{Settings, TallyPaths};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based income, expense and savings tracker",
    long_about = "Tally records income and expenses in short-term and long-term \
                  buckets, and projects how a savings balance grows with interest."
)]
struct Cli {
    /// Directory holding the ledger files and settings
    #[arg(long, global = true, env = "TALLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income/expense ledger with short-term and long-term buckets (default)
    Ledger,

    /// Savings budget with interest projections
    Savings,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = match cli.data_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved data directory");
    let settings = Settings::load(&paths)?;

    match cli.command.unwrap_or(Commands::Ledger) {
        Commands::Ledger => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            let (mut session, diagnostics) = LedgerSession::open(Storage::new(&paths), settings);
            for diagnostic in diagnostics {
                prompter.say(diagnostic)?;
            }
            run_ledger(&mut session, &mut prompter)?;
        }
        Commands::Savings => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            let mut session = SavingsSession::new(settings);
            run_savings(&mut session, &mut prompter)?;
        }
        Commands::Config => {
            println!("Tally Configuration");
            println!("===================");
            println!("Data directory:       {}", paths.base_dir().display());
            println!("Short-term ledger:    {}", paths.short_term_file().display());
            println!("Long-term ledger:     {}", paths.long_term_file().display());
            println!("Settings file:        {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Savings interest rate: {}", settings.savings_interest_rate);
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Summary bar width:     {}", settings.summary_bar_width);
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

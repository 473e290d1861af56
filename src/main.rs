//! Preset registry inspection tool
//!
//! This binary provides three subcommands:
//! - list: Enumerate every registered preset
//! - show: Print one preset in full
//! - check: Validate a preset file against the family schemas

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "strategy-presets")]
#[command(about = "Parameter presets and preset registry for a multi-strategy FX trading robot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered presets
    List {
        /// Preset file merged over the built-in table
        #[arg(short, long)]
        file: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one preset in full
    Show {
        /// Strategy family (CCI, CCI_Arrows, CCIA)
        #[arg(short, long)]
        strategy: String,

        /// Instrument symbol
        #[arg(short = 'S', long, default_value = "EURUSD")]
        symbol: String,

        /// Timeframe (M1, M5, M15, M30, H1, H4, D1, W1, MN1)
        #[arg(short, long)]
        timeframe: String,

        /// Preset file merged over the built-in table
        #[arg(short, long)]
        file: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a preset file against the family schemas
    Check {
        /// Path to the preset file
        file: String,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::List { file, json } => commands::list::run(file, json),

        Commands::Show {
            strategy,
            symbol,
            timeframe,
            file,
            json,
        } => commands::show::run(strategy, symbol, timeframe, file, json),

        Commands::Check { file } => commands::check::run(file),
    }
}

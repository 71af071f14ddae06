mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::duration::DurationArgs;
use commands::interest::InterestArgs;
use commands::profit::ProfitArgs;

/// Lending-record duration and interest calculations
#[derive(Parser)]
#[command(
    name = "lbk",
    version,
    about = "Duration and interest accrual for lending records",
    long_about = "A CLI for the lendbook calculation engine. Reports elapsed \
                  duration under the anniversary-day rule and interest accrued \
                  under the daily/weekly/monthly/quarterly/yearly payment \
                  frequencies, with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Elapsed months and days under the anniversary-day rule
    Duration(DurationArgs),
    /// Period interest, per-day amount, and interest accrued to date
    Interest(InterestArgs),
    /// Profit on a chit payout against the expected monthly amount
    Profit(ProfitArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Duration(args) => commands::duration::run_duration(args),
        Commands::Interest(args) => commands::interest::run_interest(args),
        Commands::Profit(args) => commands::profit::run_profit(args),
        Commands::Version => {
            println!("lbk {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

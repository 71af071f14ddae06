use chrono::Local;
use clap::Args;
use serde_json::Value;

use lendbook_core::duration::{self, DurationInput};

/// Arguments for the duration calculation
#[derive(Args)]
pub struct DurationArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub reference: Option<String>,
}

pub fn run_duration(args: DurationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start_date = duration::parse_date(&args.start)?;
    let reference_date = match args.reference {
        Some(ref raw) => duration::parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let result = duration::compute_duration(&DurationInput {
        start_date,
        reference_date,
    })?;
    Ok(serde_json::to_value(result)?)
}

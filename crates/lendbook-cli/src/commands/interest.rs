use chrono::Local;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use lendbook_core::duration;
use lendbook_core::interest::{self, InterestAccrualInput, InterestTerms};
use lendbook_core::numfmt;
use lendbook_core::types::PaymentFrequency;

use crate::input;

/// Arguments for the interest accrual calculation
#[derive(Args)]
pub struct InterestArgs {
    /// Outstanding principal; Indian digit grouping accepted (1,20,000)
    #[arg(long)]
    pub principal: Option<String>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Payment frequency (daily, weekly, monthly, quarterly, yearly)
    #[arg(long, default_value = "monthly")]
    pub frequency: PaymentFrequency,

    /// Days elapsed in the current period; overrides --start/--reference
    #[arg(long)]
    pub days: Option<u32>,

    /// Start date (YYYY-MM-DD), used to derive the day count
    #[arg(long)]
    pub start: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to today when --start is given
    #[arg(long)]
    pub reference: Option<String>,

    /// Path to a JSON input file with a full accrual input
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_interest(args: InterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        let accrual_input: InterestAccrualInput = input::file::read_json(path)?;
        let result = interest::compute_interest_accrual(&accrual_input)?;
        return Ok(serde_json::to_value(result)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        let accrual_input: InterestAccrualInput = serde_json::from_value(data)?;
        let result = interest::compute_interest_accrual(&accrual_input)?;
        return Ok(serde_json::to_value(result)?);
    }

    let (Some(principal_raw), Some(rate)) = (args.principal.as_deref(), args.rate) else {
        return Err("--principal and --rate (or --input / stdin JSON) are required".into());
    };
    let principal = numfmt::parse_amount(principal_raw)?;

    let result = if let Some(days) = args.days {
        interest::compute_interest_accrual(&InterestAccrualInput {
            principal,
            annual_rate_percent: rate,
            payment_frequency: args.frequency.clone(),
            days_elapsed_this_period: days,
        })?
    } else if let Some(ref start) = args.start {
        let start_date = duration::parse_date(start)?;
        let reference_date = match args.reference {
            Some(ref raw) => duration::parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        let terms = InterestTerms {
            principal,
            annual_rate_percent: rate,
            payment_frequency: args.frequency.clone(),
        };
        interest::accrue_between(&terms, start_date, reference_date)?
    } else {
        return Err("either --days or --start is required to prorate the current period".into());
    };

    Ok(serde_json::to_value(result)?)
}

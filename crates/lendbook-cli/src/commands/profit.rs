use clap::Args;
use serde_json::Value;

use lendbook_core::chit::{self, PayoutProfitInput};
use lendbook_core::numfmt;

/// Arguments for the chit payout profit calculation
#[derive(Args)]
pub struct ProfitArgs {
    /// Expected monthly chit amount; Indian digit grouping accepted
    #[arg(long)]
    pub expected: String,

    /// Amount actually paid out
    #[arg(long)]
    pub paid: String,
}

pub fn run_profit(args: ProfitArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let expected_amount = numfmt::parse_amount(&args.expected)?;
    let paid_amount = numfmt::parse_amount(&args.paid)?;

    let result = chit::compute_payout_profit(&PayoutProfitInput {
        expected_amount,
        paid_amount,
    })?;
    Ok(serde_json::to_value(result)?)
}

//! Chit payout profit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LendbookError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LendbookResult;

/// A payout recorded against the expected monthly chit amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutProfitInput {
    /// The chit's expected monthly amount
    pub expected_amount: Money,
    /// The amount actually paid out this month
    pub paid_amount: Money,
}

/// Profit on a payout relative to the expected amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutProfit {
    /// `expected_amount - paid_amount`; negative when the payout overran
    pub profit: Money,
    /// Profit as a percentage of the expected amount
    pub profit_percent: Rate,
}

/// Profit earned on a chit payout: the gap between the expected monthly
/// amount and what was actually paid, absolute and as a percentage.
pub fn compute_payout_profit(
    input: &PayoutProfitInput,
) -> LendbookResult<ComputationOutput<PayoutProfit>> {
    let started = Instant::now();

    if input.expected_amount <= Decimal::ZERO {
        return Err(LendbookError::InvalidInput {
            field: "expected_amount".into(),
            reason: "Expected amount must be positive".into(),
        });
    }
    if input.paid_amount < Decimal::ZERO {
        return Err(LendbookError::InvalidInput {
            field: "paid_amount".into(),
            reason: "Paid amount cannot be negative".into(),
        });
    }

    let profit = input.expected_amount - input.paid_amount;
    let profit_percent = profit / input.expected_amount * dec!(100);

    let elapsed = started.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Chit payout profit — gap to the expected monthly amount",
        input,
        Vec::new(),
        elapsed,
        PayoutProfit {
            profit,
            profit_percent,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payout_under_expected() {
        let out = compute_payout_profit(&PayoutProfitInput {
            expected_amount: dec!(5000),
            paid_amount: dec!(4500),
        })
        .unwrap();

        assert_eq!(out.result.profit, dec!(500));
        assert_eq!(out.result.profit_percent, dec!(10));
    }

    #[test]
    fn test_payout_over_expected_is_a_loss() {
        let out = compute_payout_profit(&PayoutProfitInput {
            expected_amount: dec!(5000),
            paid_amount: dec!(5250),
        })
        .unwrap();

        assert_eq!(out.result.profit, dec!(-250));
        assert_eq!(out.result.profit_percent, dec!(-5));
    }

    #[test]
    fn test_zero_expected_rejected() {
        let result = compute_payout_profit(&PayoutProfitInput {
            expected_amount: dec!(0),
            paid_amount: dec!(100),
        });
        match result.unwrap_err() {
            LendbookError::InvalidInput { field, .. } => assert_eq!(field, "expected_amount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}

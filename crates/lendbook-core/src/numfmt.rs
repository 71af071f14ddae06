//! Amount parsing and Indian digit grouping.
//!
//! Amounts on the records are entered and displayed with Indian-format
//! comma grouping (1,23,456.78): the last three digits form one group and
//! every group above it has two. Parsing strips the grouping; formatting
//! reinstates it for display.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::LendbookError;
use crate::types::Money;
use crate::LendbookResult;

/// Parse an amount string, accepting comma digit grouping.
///
/// Junk is a hard error, never zero: a record showing an amount of 0 on a
/// typo would be misleading.
pub fn parse_amount(input: &str) -> LendbookResult<Money> {
    let cleaned = input.replace(',', "");
    let trimmed = cleaned.trim();

    if trimmed.is_empty() {
        return Err(LendbookError::InvalidInput {
            field: "amount".into(),
            reason: "Amount is empty".into(),
        });
    }

    Decimal::from_str(trimmed).map_err(|e| LendbookError::InvalidInput {
        field: "amount".into(),
        reason: format!("'{input}' is not a number: {e}"),
    })
}

/// Format an amount with Indian digit grouping, at most two fraction
/// digits, trailing zeros trimmed.
pub fn format_indian(amount: Money) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Group an unsigned digit run: last three digits, then twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(parse_amount("120000").unwrap(), dec!(120000));
        assert_eq!(parse_amount("1,23,456.78").unwrap(), dec!(123456.78));
        assert_eq!(parse_amount("12,00,000").unwrap(), dec!(1200000));
        assert_eq!(parse_amount(" 4500 ").unwrap(), dec!(4500));
    }

    #[test]
    fn test_parse_rejects_junk() {
        for bad in ["", "  ", "abc", "12.3.4", "₹500"] {
            match parse_amount(bad) {
                Err(LendbookError::InvalidInput { field, .. }) => assert_eq!(field, "amount"),
                other => panic!("Expected InvalidInput for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_indian(dec!(123456.78)), "1,23,456.78");
        assert_eq!(format_indian(dec!(1200)), "1,200");
        assert_eq!(format_indian(dec!(100000)), "1,00,000");
        assert_eq!(format_indian(dec!(10000000)), "1,00,00,000");
        assert_eq!(format_indian(dec!(999)), "999");
        assert_eq!(format_indian(dec!(0)), "0");
    }

    #[test]
    fn test_format_rounds_to_two_places_and_trims() {
        // 10000/365 displays as 27.4
        assert_eq!(format_indian(dec!(27.397260273972)), "27.4");
        assert_eq!(format_indian(dec!(1200.00)), "1,200");
        assert_eq!(format_indian(dec!(0.5)), "0.5");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_indian(dec!(-123456.5)), "-1,23,456.5");
    }

    #[test]
    fn test_round_trip() {
        let amount = dec!(1234567.25);
        assert_eq!(parse_amount(&format_indian(amount)).unwrap(), amount);
    }
}

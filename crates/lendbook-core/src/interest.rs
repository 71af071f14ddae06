//! Interest accrual under the payment-frequency regimes.
//!
//! A record's annual percentage rate is turned into one full payment
//! period's interest, a nominal per-day amount within that period, and a
//! prorated "interest so far" figure for the days elapsed since the last
//! anniversary. The per-day divisors are nominal period lengths (a month is
//! always 30 days, a quarter 90, a year 365) regardless of the calendar;
//! downstream figures across the system are defined against this
//! convention, so it is preserved exactly.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::duration::duration_between;
use crate::error::LendbookError;
use crate::types::{with_metadata, ComputationOutput, Money, PaymentFrequency, Rate};
use crate::LendbookResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Interest terms carried on a loan, lease, or outside-interest record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestTerms {
    /// Outstanding principal
    pub principal: Money,
    /// Annual interest rate in percent (12 = 12% p.a.)
    pub annual_rate_percent: Rate,
    /// Payment cadence
    pub payment_frequency: PaymentFrequency,
}

/// Input for an accrual computation with the day count already in hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestAccrualInput {
    /// Outstanding principal
    pub principal: Money,
    /// Annual interest rate in percent
    pub annual_rate_percent: Rate,
    /// Payment cadence
    pub payment_frequency: PaymentFrequency,
    /// Days elapsed since the last period anniversary (the `days` field of
    /// the anniversary duration, not a raw day count)
    pub days_elapsed_this_period: u32,
}

/// One period's interest together with the prorated running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestAccrual {
    /// Interest for one full payment period, rounded to the whole rupee
    pub period_interest_amount: Money,
    /// Nominal per-day amount within the period, unrounded
    pub per_day_amount: Money,
    /// Days elapsed since the last period anniversary
    pub days_elapsed_this_period: u32,
    /// `per_day_amount * days_elapsed_this_period`, unrounded
    pub interest_to_date: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute one full period's interest, the per-day amount, and the interest
/// accrued over the supplied day count.
pub fn compute_interest_accrual(
    input: &InterestAccrualInput,
) -> LendbookResult<ComputationOutput<InterestAccrual>> {
    let started = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(input.principal, input.annual_rate_percent)?;
    warn_on_fallback(&input.payment_frequency, &mut warnings);

    let accrual = accrue(
        input.principal,
        input.annual_rate_percent,
        &input.payment_frequency,
        input.days_elapsed_this_period,
    );

    let elapsed = started.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Frequency-based interest accrual — fixed nominal period divisors",
        input,
        warnings,
        elapsed,
        accrual,
    ))
}

/// Accrual measured between two dates: the day remainder of the anniversary
/// duration feeds the proration. This is the shape of every record view,
/// with the reference being today for open records, the closure date for
/// closed ones, or a previewed payment date.
pub fn accrue_between(
    terms: &InterestTerms,
    start_date: NaiveDate,
    reference_date: NaiveDate,
) -> LendbookResult<ComputationOutput<InterestAccrual>> {
    let started = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(terms.principal, terms.annual_rate_percent)?;
    warn_on_fallback(&terms.payment_frequency, &mut warnings);

    if reference_date < start_date {
        warnings.push(format!(
            "Reference date {reference_date} precedes start date {start_date}; accrual clamped to zero days"
        ));
    }

    let days = duration_between(start_date, reference_date).days;
    let accrual = accrue(
        terms.principal,
        terms.annual_rate_percent,
        &terms.payment_frequency,
        days,
    );

    let elapsed = started.elapsed().as_micros() as u64;

    let assumptions = serde_json::json!({
        "terms": terms,
        "start_date": start_date,
        "reference_date": reference_date,
    });

    Ok(with_metadata(
        "Frequency-based interest accrual — anniversary day remainder prorated",
        &assumptions,
        warnings,
        elapsed,
        accrual,
    ))
}

/// Annual percentage rate restated per month, as shown beside every rate
/// field on the entry forms.
pub fn monthly_rate_percent(annual_rate_percent: Rate) -> Rate {
    annual_rate_percent / dec!(12)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn validate_terms(principal: Money, annual_rate_percent: Rate) -> LendbookResult<()> {
    if principal < Decimal::ZERO {
        return Err(LendbookError::InvalidInput {
            field: "principal".into(),
            reason: "Principal cannot be negative".into(),
        });
    }
    if annual_rate_percent < Decimal::ZERO || annual_rate_percent > dec!(100) {
        return Err(LendbookError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Annual rate must be between 0 and 100 percent".into(),
        });
    }
    Ok(())
}

fn warn_on_fallback(frequency: &PaymentFrequency, warnings: &mut Vec<String>) {
    if let PaymentFrequency::Other(raw) = frequency {
        warnings.push(format!(
            "Unrecognized payment frequency '{raw}'; applying the monthly convention"
        ));
    }
}

fn accrue(
    principal: Money,
    annual_rate_percent: Rate,
    frequency: &PaymentFrequency,
    days_elapsed_this_period: u32,
) -> InterestAccrual {
    let period_interest_amount = period_interest(principal, annual_rate_percent, frequency);
    let per_day_amount = per_day(period_interest_amount, frequency);
    let interest_to_date = per_day_amount * Decimal::from(days_elapsed_this_period);

    InterestAccrual {
        period_interest_amount,
        per_day_amount,
        days_elapsed_this_period,
        interest_to_date,
    }
}

/// Interest for one full payment period, rounded to the whole rupee
/// (half away from zero).
fn period_interest(principal: Money, annual_rate_percent: Rate, frequency: &PaymentFrequency) -> Money {
    let annual = principal * annual_rate_percent / dec!(100);

    let amount = match frequency {
        PaymentFrequency::Daily => annual / dec!(365),
        PaymentFrequency::Weekly => annual / dec!(52),
        PaymentFrequency::Monthly => annual / dec!(12),
        PaymentFrequency::Quarterly => annual / dec!(4),
        PaymentFrequency::Yearly => annual,
        // Unrecognized cadences have always fallen back to monthly.
        PaymentFrequency::Other(_) => annual / dec!(12),
    };

    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Nominal per-day amount within one payment period. The divisors are the
/// fixed 7/30/90/365 period lengths, never actual days in the month.
fn per_day(period_interest_amount: Money, frequency: &PaymentFrequency) -> Money {
    match frequency {
        PaymentFrequency::Daily => period_interest_amount,
        PaymentFrequency::Weekly => period_interest_amount / dec!(7),
        PaymentFrequency::Monthly => period_interest_amount / dec!(30),
        PaymentFrequency::Quarterly => period_interest_amount / dec!(90),
        PaymentFrequency::Yearly => period_interest_amount / dec!(365),
        PaymentFrequency::Other(_) => period_interest_amount / dec!(30),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Anniversary-day duration calculations.
//!
//! Elapsed time on a lending record is reported as whole months plus a day
//! remainder, measured against the day-of-month the record started on (its
//! anniversary day) rather than against fixed 30-day months. The same
//! breakdown drives both the displayed duration and the proration of
//! interest within the current payment period.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LendbookError;
use crate::types::{with_metadata, ComputationOutput};
use crate::LendbookResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a duration computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DurationInput {
    /// Date the record started (lending date, lease start, chit start)
    pub start_date: NaiveDate,
    /// Date to measure against: today for open records, the closure date for
    /// closed ones, or a previewed payment date. The caller chooses; the
    /// engine never reads the clock.
    pub reference_date: NaiveDate,
}

/// Elapsed duration as whole anniversary months plus a day remainder.
///
/// `days` is what is left after subtracting the whole months, not a raw day
/// count between the two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub months: u32,
    pub days: u32,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a calendar date in strict ISO 8601 `YYYY-MM-DD` form.
///
/// The only way date strings enter the engine. Anything else is a hard
/// error; a bad date must never read as "now" or as a zero duration.
pub fn parse_date(input: &str) -> LendbookResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| LendbookError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Elapsed whole months and remainder days between two dates under the
/// anniversary rule.
///
/// A reference on the start date is zero elapsed; a reference before the
/// start clamps to zero rather than going negative.
pub fn duration_between(start: NaiveDate, reference: NaiveDate) -> DurationBreakdown {
    if reference < start {
        return DurationBreakdown { months: 0, days: 0 };
    }

    let raw_months = (reference.year() - start.year()) * 12
        + (reference.month() as i32 - start.month() as i32);

    let (months, days) = if reference.day() < start.day() {
        // The reference sits before this month's anniversary, so the last
        // full month ended at the anniversary in the month before the
        // reference month. Count the remainder days from there.
        let prev = previous_anniversary(reference, start.day());
        (raw_months - 1, (reference - prev).num_days())
    } else {
        (raw_months, i64::from(reference.day() - start.day()))
    };

    DurationBreakdown {
        months: months.max(0) as u32,
        days: days.max(0) as u32,
    }
}

/// Envelope-wrapped duration computation.
pub fn compute_duration(
    input: &DurationInput,
) -> LendbookResult<ComputationOutput<DurationBreakdown>> {
    let started = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.reference_date < input.start_date {
        warnings.push(format!(
            "Reference date {} precedes start date {}; duration clamped to zero",
            input.reference_date, input.start_date
        ));
    }

    let breakdown = duration_between(input.start_date, input.reference_date);

    let elapsed = started.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Anniversary-day duration — whole months plus day remainder",
        input,
        warnings,
        elapsed,
        breakdown,
    ))
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

/// The start day's anniversary in the month immediately before `reference`'s
/// month. A day past the end of that month rolls forward into the following
/// one (day 31 against a 30-day month lands on the 1st); the records have
/// always been measured that way, so the overflow is kept, not clamped.
fn previous_anniversary(reference: NaiveDate, anniversary_day: u32) -> NaiveDate {
    let total_months = reference.year() * 12 + reference.month() as i32 - 2;
    let year = total_months.div_euclid(12);
    let month = (total_months.rem_euclid(12) + 1) as u32;

    // The first of the month is always constructible; the day offset then
    // carries any overflow into the next month.
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(reference);
    first + Duration::days(i64::from(anniversary_day) - 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -----------------------------------------------------------------------
    // 1. Same day => zero elapsed
    // -----------------------------------------------------------------------
    #[test]
    fn test_same_day_is_zero() {
        let d = date(2024, 1, 17);
        assert_eq!(
            duration_between(d, d),
            DurationBreakdown { months: 0, days: 0 }
        );
    }

    // -----------------------------------------------------------------------
    // 2. Exact month anniversary => whole months, zero days
    // -----------------------------------------------------------------------
    #[test]
    fn test_exact_anniversary() {
        assert_eq!(
            duration_between(date(2024, 1, 17), date(2024, 2, 17)),
            DurationBreakdown { months: 1, days: 0 }
        );
    }

    // -----------------------------------------------------------------------
    // 3. Reference before this month's anniversary
    // -----------------------------------------------------------------------
    #[test]
    fn test_reference_before_anniversary_day() {
        // Lent on the 17th; by Feb 5 only 19 days have passed since the
        // Jan 17 anniversary, and no full month yet in February.
        assert_eq!(
            duration_between(date(2024, 1, 17), date(2024, 2, 5)),
            DurationBreakdown { months: 0, days: 19 }
        );
    }

    // -----------------------------------------------------------------------
    // 4. Cross-year span
    // -----------------------------------------------------------------------
    #[test]
    fn test_cross_year() {
        // Nov 20 -> Jan 5: one full month at Dec 20, then 16 days.
        assert_eq!(
            duration_between(date(2023, 11, 20), date(2024, 1, 5)),
            DurationBreakdown { months: 1, days: 16 }
        );
    }

    // -----------------------------------------------------------------------
    // 5. Multi-year span
    // -----------------------------------------------------------------------
    #[test]
    fn test_multi_year() {
        assert_eq!(
            duration_between(date(2021, 3, 10), date(2024, 7, 25)),
            DurationBreakdown {
                months: 40,
                days: 15
            }
        );
    }

    // -----------------------------------------------------------------------
    // 6. Reference before start clamps to zero
    // -----------------------------------------------------------------------
    #[test]
    fn test_reference_before_start_clamps() {
        assert_eq!(
            duration_between(date(2024, 5, 17), date(2024, 5, 5)),
            DurationBreakdown { months: 0, days: 0 }
        );
        assert_eq!(
            duration_between(date(2024, 5, 17), date(2023, 1, 1)),
            DurationBreakdown { months: 0, days: 0 }
        );
    }

    // -----------------------------------------------------------------------
    // 7. Day-31 anniversary rolls forward over a short month
    // -----------------------------------------------------------------------
    #[test]
    fn test_day_31_rolls_forward_leap_february() {
        // The Jan-31 anniversary in February 2024 rolls to Mar 2 (29 + 2),
        // leaving 3 remainder days by Mar 5.
        assert_eq!(
            duration_between(date(2024, 1, 31), date(2024, 3, 5)),
            DurationBreakdown { months: 1, days: 3 }
        );
    }

    #[test]
    fn test_day_31_rolls_forward_plain_february() {
        // Non-leap February: the rolled anniversary is Mar 3 (28 + 3).
        assert_eq!(
            duration_between(date(2023, 1, 31), date(2023, 3, 5)),
            DurationBreakdown { months: 1, days: 2 }
        );
    }

    // -----------------------------------------------------------------------
    // 8. Rolled anniversary past the reference clamps the day remainder
    // -----------------------------------------------------------------------
    #[test]
    fn test_rolled_anniversary_past_reference() {
        // Dec-31 anniversary in February 2024 rolls to Mar 2, one day past
        // the Mar 1 reference; the remainder clamps to zero.
        assert_eq!(
            duration_between(date(2023, 12, 31), date(2024, 3, 1)),
            DurationBreakdown { months: 2, days: 0 }
        );
    }

    // -----------------------------------------------------------------------
    // 9. Day 31 start against a 30-day month
    // -----------------------------------------------------------------------
    #[test]
    fn test_day_31_against_thirty_day_month() {
        // May-31 anniversary; June 30 is still one day short of it.
        assert_eq!(
            duration_between(date(2024, 5, 31), date(2024, 6, 30)),
            DurationBreakdown { months: 0, days: 30 }
        );
    }

    // -----------------------------------------------------------------------
    // 10. Determinism: identical inputs, identical outputs
    // -----------------------------------------------------------------------
    #[test]
    fn test_pure_function_repeatable() {
        let start = date(2022, 8, 9);
        let reference = date(2024, 2, 1);
        assert_eq!(
            duration_between(start, reference),
            duration_between(start, reference)
        );
    }

    // -----------------------------------------------------------------------
    // 11. Envelope: warnings and metadata
    // -----------------------------------------------------------------------
    #[test]
    fn test_compute_duration_envelope() {
        let input = DurationInput {
            start_date: date(2024, 1, 17),
            reference_date: date(2024, 2, 17),
        };
        let output = compute_duration(&input).unwrap();

        assert_eq!(
            output.result,
            DurationBreakdown { months: 1, days: 0 }
        );
        assert!(output.warnings.is_empty());
        assert!(output.methodology.contains("Anniversary-day"));
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_compute_duration_clamp_warning() {
        let input = DurationInput {
            start_date: date(2024, 5, 17),
            reference_date: date(2024, 5, 5),
        };
        let output = compute_duration(&input).unwrap();

        assert_eq!(
            output.result,
            DurationBreakdown { months: 0, days: 0 }
        );
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("clamped"));
    }

    // -----------------------------------------------------------------------
    // 12. Date parsing: strict ISO 8601 only
    // -----------------------------------------------------------------------
    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for bad in ["17/01/2024", "2024-13-01", "2023-02-29", "yesterday", ""] {
            match parse_date(bad) {
                Err(LendbookError::InvalidDate { input, .. }) => assert_eq!(input, bad),
                other => panic!("Expected InvalidDate for {bad:?}, got {other:?}"),
            }
        }
    }
}

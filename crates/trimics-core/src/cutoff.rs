//! Retention cutoff arithmetic.

use chrono::{Local, Months, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Returns `today` minus `months` calendar months.
///
/// The day of month is clamped to the last day of the target month, so
/// 2026-03-31 minus one month is 2026-02-28.
///
/// ## Errors
/// Returns [`CoreError::InvalidInput`] if the result falls outside the
/// representable date range.
pub fn cutoff_from(today: NaiveDate, months: u32) -> CoreResult<NaiveDate> {
    today.checked_sub_months(Months::new(months)).ok_or_else(|| {
        CoreError::InvalidInput(format!("cannot go back {months} months from {today}"))
    })
}

/// ## Summary
/// Returns the cutoff date relative to the local calendar date.
///
/// ## Errors
/// See [`cutoff_from`].
pub fn cutoff_from_now(months: u32) -> CoreResult<NaiveDate> {
    cutoff_from(Local::now().date_naive(), months)
}

//! Recency filter: keeps events that end on or after a cutoff date, or that
//! recur past it.

use chrono::NaiveDate;

use crate::calendar::EventRecord;
use crate::error::{ServiceError, ServiceResult};

/// An event the filter could not evaluate.
#[derive(Debug)]
pub struct Exclusion {
    /// Position of the event in the input sequence.
    pub index: usize,
    pub uid: Option<String>,
    pub error: ServiceError,
}

/// Result of filtering a sequence of events.
#[derive(Debug, Default)]
pub struct FilterOutcome<'a> {
    /// Surviving events, in input order.
    pub kept: Vec<&'a EventRecord>,
    /// Events dropped because they could not be evaluated.
    pub excluded: Vec<Exclusion>,
}

/// ## Summary
/// Decides whether `event` is still current relative to `cutoff`.
///
/// An event is current when its DTEND date is on or after the cutoff, or when
/// its RRULE has no UNTIL, or an UNTIL date on or after the cutoff. Dates are
/// compared without time of day or zone.
///
/// ## Errors
/// [`ServiceError::MissingField`] or [`ServiceError::InvalidField`] when DTEND
/// is absent or not a date.
pub fn is_current(event: &EventRecord, cutoff: NaiveDate) -> ServiceResult<bool> {
    let end = event.end_date()?;
    let recurring = match event.recurrence_until() {
        None => false,
        Some(None) => true,
        Some(Some(until)) => until >= cutoff,
    };
    Ok(end >= cutoff || recurring)
}

/// Applies [`is_current`] to every event, keeping survivors in order.
///
/// A failing event never aborts the batch: it is logged and reported in
/// [`FilterOutcome::excluded`].
#[tracing::instrument(skip(events), fields(events = events.len()))]
pub fn filter_current(events: &[EventRecord], cutoff: NaiveDate) -> FilterOutcome<'_> {
    tracing::debug!("Finding all events that end after {cutoff}");

    let mut outcome = FilterOutcome::default();
    for (index, event) in events.iter().enumerate() {
        match is_current(event, cutoff) {
            Ok(true) => {
                tracing::debug!(summary = event.summary().unwrap_or_default(), "Keeping event");
                outcome.kept.push(event);
            }
            Ok(false) => {
                tracing::trace!(index, uid = event.uid(), "Dropping past event");
            }
            Err(error) => {
                tracing::warn!(index, uid = event.uid(), %error, "Excluding event");
                outcome.excluded.push(Exclusion {
                    index,
                    uid: event.uid().map(str::to_string),
                    error,
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

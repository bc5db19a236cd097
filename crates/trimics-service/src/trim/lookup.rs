//! Positional and summary lookups over an ordered event sequence.

use icu::casemap::CaseMapper;

use crate::calendar::EventRecord;

/// Returns the event at `index`, or `None` when out of range.
#[must_use]
pub fn event_at(events: &[EventRecord], index: usize) -> Option<&EventRecord> {
    let event = events.get(index);
    if event.is_none() {
        tracing::debug!(index, len = events.len(), "Event index out of range");
    }
    event
}

/// ## Summary
/// Finds the first event at or after `start` whose SUMMARY contains `needle`.
///
/// Matching uses Unicode case folding. Events without a SUMMARY never match.
/// Returns the match's index and record, or `(start, None)` when nothing
/// matches (including when `start` is past the end).
#[must_use]
pub fn find_by_summary<'a>(
    events: &'a [EventRecord],
    needle: &str,
    start: usize,
) -> (usize, Option<&'a EventRecord>) {
    let case_mapper = CaseMapper::new();
    let needle = case_mapper.fold_string(needle);

    let found = events
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, event)| {
            event
                .summary()
                .is_some_and(|summary| case_mapper.fold_string(summary).contains(&*needle))
        });

    match found {
        Some((index, event)) => (index, Some(event)),
        None => {
            tracing::debug!(needle = %needle, start, "No event with matching summary");
            (start, None)
        }
    }
}

//! Trimming a loaded calendar down to its current events.

pub mod filter;
pub mod lookup;
pub mod strip;

use chrono::NaiveDate;
use trimics_core::config::TrimConfig;

use crate::calendar::Calendar;
pub use filter::{Exclusion, FilterOutcome, filter_current, is_current};
pub use strip::strip;

/// What a trim run did.
#[derive(Debug)]
pub struct TrimReport {
    /// Events in the input calendar.
    pub read: usize,
    /// Events written to the output calendar.
    pub written: usize,
    /// Time zone definitions carried over.
    pub timezones: usize,
    /// Events dropped because they could not be evaluated.
    pub excluded: Vec<Exclusion>,
}

/// ## Summary
/// Builds a fresh calendar holding the events of `input` that are current
/// relative to `cutoff`, in their original order.
///
/// The output is initialized before filtering, so it is a valid calendar even
/// when no event survives. Survivors are stripped of `X-` fields when
/// `options.strip_extensions` is set. With `options.keep_timezones`, the
/// VTIMEZONEs the survivors reference are copied ahead of them.
#[tracing::instrument(skip(input, options), fields(events = input.event_count()))]
pub fn trim_calendar(
    input: &Calendar,
    cutoff: NaiveDate,
    options: &TrimConfig,
) -> (Calendar, TrimReport) {
    let mut output = Calendar::with_prodid(options.prodid.as_str());
    output.initialize_empty();

    let FilterOutcome { kept, excluded } = filter_current(input.events(), cutoff);

    let mut timezones = 0;
    if options.keep_timezones {
        for tz in input.timezones_for(kept.iter().copied()) {
            output.add_component(tz.clone());
            timezones += 1;
        }
    }

    for event in kept {
        let event = if options.strip_extensions {
            strip(event)
        } else {
            event.clone()
        };
        output.add_event(event);
    }

    let report = TrimReport {
        read: input.event_count(),
        written: output.event_count(),
        timezones,
        excluded,
    };
    tracing::debug!(
        written = report.written,
        excluded = report.excluded.len(),
        timezones,
        "Trimmed calendar"
    );
    (output, report)
}

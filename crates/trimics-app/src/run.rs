//! One trimming run, from input file to output file.

use chrono::NaiveDate;
use trimics_core::config::Settings;
use trimics_core::cutoff::{cutoff_from, cutoff_from_now};
use trimics_rfc::rfc::ical::decode;
use trimics_service::calendar::Calendar;
use trimics_service::trim::{TrimReport, trim_calendar};

use crate::cli::Cli;
use crate::error::AppResult;
use crate::files::{read_calendar, write_calendar};

/// ## Summary
/// Runs with the cutoff measured from today's local date.
///
/// ## Errors
/// See [`run_at`].
pub fn run(cli: &Cli, settings: &Settings) -> AppResult<TrimReport> {
    let cutoff = cutoff_from_now(settings.trim.months_before)?;
    trim_file(cli, settings, cutoff)
}

/// ## Summary
/// Runs with the cutoff measured from `today`.
///
/// ## Errors
/// Fails when the input cannot be read or decoded, when the cutoff is out of
/// range, or when the output cannot be written. Nothing is written on failure.
pub fn run_at(cli: &Cli, settings: &Settings, today: NaiveDate) -> AppResult<TrimReport> {
    let cutoff = cutoff_from(today, settings.trim.months_before)?;
    trim_file(cli, settings, cutoff)
}

#[tracing::instrument(skip(cli, settings), fields(infile = %cli.infile.display()))]
fn trim_file(cli: &Cli, settings: &Settings, cutoff: NaiveDate) -> AppResult<TrimReport> {
    let bytes = read_calendar(&cli.infile)?;

    let mut input = Calendar::new();
    let read = input.load_from(decode(&bytes)?)?;
    tracing::info!("Read {read} events from '{}'", cli.infile.display());

    let (output, report) = trim_calendar(&input, cutoff, &settings.trim);
    for exclusion in &report.excluded {
        tracing::debug!(index = exclusion.index, error = %exclusion.error, "Event left out");
    }

    write_calendar(&cli.outfile, &output.serialize()?)?;
    tracing::info!(
        "Wrote {} events to '{}'",
        report.written,
        cli.outfile.display()
    );

    Ok(report)
}

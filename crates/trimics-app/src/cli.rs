use std::path::PathBuf;

use clap::Parser;

/// Trim an iCalendar file down to its current events.
///
/// Events that ended more than MONTHS months ago are dropped unless they
/// belong to a series that is still running.
#[derive(Parser, Debug, Clone)]
#[command(name = "trimics", version)]
pub struct Cli {
    /// Input filename (.ics)
    #[arg(short, long)]
    pub infile: PathBuf,

    /// Output filename (.ics)
    #[arg(short, long)]
    pub outfile: PathBuf,

    /// Extra output
    #[arg(short, long)]
    pub verbose: bool,

    /// Strip application-specific ("X-...") properties from kept events
    #[arg(short = 's', long = "strip-application-specific")]
    pub strip_extensions: bool,

    /// How many months back to keep [default: 12]
    #[arg(short = 'm', long = "months-before", value_name = "MONTHS")]
    pub months_before: Option<u32>,

    /// Copy time zone definitions used by kept events
    #[arg(long)]
    pub keep_timezones: bool,

    /// PRODID written into the output calendar
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub prodid: Option<String>,
}

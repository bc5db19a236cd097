//! Calendar trimming: event records, the calendar container, and the
//! recency filter, extension stripper and lookups that operate on them.

pub mod calendar;
pub mod error;
pub mod trim;

#[cfg(test)]
mod fixtures;

//! Value type parsers for iCalendar (RFC 5545 §3.3).
#![expect(
    clippy::map_err_ignore,
    reason = "Numeric parse errors carry no position; the ParseError built here does"
)]

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{Date, DateTime, DateTimeForm, Frequency, RRule, RRuleUntil};

fn digits<T: std::str::FromStr>(
    s: &str,
    kind: ParseErrorKind,
    line: usize,
    col: usize,
) -> ParseResult<T> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(kind, line, col));
    }
    s.parse::<T>().map_err(|_| ParseError::new(kind, line, col))
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit calendar date.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<Date> {
    let kind = ParseErrorKind::InvalidDate;
    if s.len() != 8 || !s.is_ascii() {
        return Err(ParseError::new(kind, line, col));
    }

    let date = Date {
        year: digits(&s[0..4], kind, line, col)?,
        month: digits(&s[4..6], kind, line, col)?,
        day: digits(&s[6..8], kind, line, col)?,
    };

    // Rejects Feb 30 and friends, not just out-of-range fields.
    if date.to_naive_date().is_none() {
        return Err(ParseError::new(kind, line, col).with_context(format!("no such day: {s}")));
    }

    Ok(date)
}

/// Time of day as written in a DATE-TIME.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    is_utc: bool,
}

/// Parses the HHMMSS[Z] half of a DATE-TIME (RFC 5545 §3.3.12).
fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<Time> {
    let kind = ParseErrorKind::InvalidTime;
    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 || !time_str.is_ascii() {
        return Err(ParseError::new(kind, line, col));
    }

    let time = Time {
        hour: digits(&time_str[0..2], kind, line, col)?,
        minute: digits(&time_str[2..4], kind, line, col)?,
        second: digits(&time_str[4..6], kind, line, col)?,
        is_utc,
    };

    // 60 is a leap second
    if time.hour > 23 || time.minute > 59 || time.second > 60 {
        return Err(ParseError::new(kind, line, col));
    }

    Ok(time)
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z")
///
/// TZID is a property parameter, so it is passed in rather than read here.
///
/// ## Errors
/// Returns an error if the string is not a valid datetime format.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let (date_str, time_str) = s
        .split_once('T')
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidDateTime, line, col))?;

    let date = parse_date(date_str, line, col)?;
    let time = parse_time(time_str, line, col + date_str.len() + 1)?;

    let form = match (time.is_utc, tzid) {
        (true, _) => DateTimeForm::Utc,
        (false, Some(tz)) => DateTimeForm::Zoned {
            tzid: tz.to_string(),
        },
        (false, None) => DateTimeForm::Floating,
    };

    Ok(DateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: time.hour,
        minute: time.minute,
        second: time.second,
        form,
    })
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// Only FREQ, UNTIL and COUNT are read. Other parts, and a COUNT that is not
/// a number, are skipped without failing the rule, so a readable UNTIL is
/// never lost to an unrelated defect.
///
/// ## Errors
/// Returns an error if FREQ is missing or unknown, or UNTIL is not a DATE or
/// DATE-TIME.
pub fn parse_rrule(s: &str, line: usize, col: usize) -> ParseResult<RRule> {
    let mut freq = None;
    let mut until = None;
    let mut count = None;

    for (key, value) in rule_parts(s) {
        match key.to_ascii_uppercase().as_str() {
            "FREQ" => {
                freq = Some(Frequency::parse(value).ok_or_else(|| {
                    ParseError::new(ParseErrorKind::InvalidFrequency, line, col)
                        .with_context(value.to_string())
                })?);
            }
            "UNTIL" => until = Some(parse_until(value, line, col)?),
            "COUNT" => match value.parse() {
                Ok(n) => count = Some(n),
                Err(_) => tracing::trace!(value, "Skipping unreadable COUNT"),
            },
            _ => tracing::trace!(key, "Skipping RRULE part"),
        }
    }

    let freq = freq.ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidRRule, line, col).with_context("FREQ is required")
    })?;

    Ok(RRule { freq, until, count })
}

/// Reads just the UNTIL part of a raw rule, whatever state the rest is in.
///
/// `None` when there is no UNTIL or it is not a DATE or DATE-TIME.
#[must_use]
pub fn rrule_until(s: &str) -> Option<RRuleUntil> {
    rule_parts(s)
        .find(|(key, _)| key.eq_ignore_ascii_case("UNTIL"))
        .and_then(|(_, value)| parse_until(value, 1, 1).ok())
}

fn rule_parts(s: &str) -> impl Iterator<Item = (&str, &str)> {
    s.split(';')
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

fn parse_until(value: &str, line: usize, col: usize) -> ParseResult<RRuleUntil> {
    if value.contains('T') {
        parse_datetime(value, None, line, col).map(RRuleUntil::DateTime)
    } else {
        parse_date(value, line, col).map(RRuleUntil::Date)
    }
}

/// Unescapes text values (RFC 5545 §3.3.11).
///
/// Escape sequences: \\ \, \; \n \N
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('\\') | None => result.push('\\'),
            Some(other) => {
                // Invalid escape, preserve as-is
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_basic() {
        let date = parse_date("20260123", 1, 1).unwrap();
        assert_eq!(date, Date::new(2026, 1, 23));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("2026012", 1, 1).is_err()); // Too short
        assert!(parse_date("20261301", 1, 1).is_err()); // Invalid month
        assert!(parse_date("20260230", 1, 1).is_err()); // No such day
        assert!(parse_date("2026+123", 1, 1).is_err());
        assert!(parse_date("next wk!", 1, 1).is_err());
    }

    #[test]
    fn parse_time_forms() {
        let utc = parse_time("120000Z", 1, 1).unwrap();
        assert!(utc.is_utc);
        assert_eq!((utc.hour, utc.minute, utc.second), (12, 0, 0));

        let local = parse_time("133000", 1, 1).unwrap();
        assert!(!local.is_utc);
        assert_eq!(local.minute, 30);
    }

    #[test]
    fn parse_time_out_of_range() {
        assert!(parse_time("250000", 1, 1).is_err());
        assert!(parse_time("126000", 1, 1).is_err());
    }

    #[test]
    fn parse_datetime_utc() {
        let dt = parse_datetime("20260123T120000Z", None, 1, 1).unwrap();
        assert!(dt.is_utc());
        assert_eq!(dt.year, 2026);
    }

    #[test]
    fn parse_datetime_floating() {
        let dt = parse_datetime("20260123T120000", None, 1, 1).unwrap();
        assert_eq!(dt.form, DateTimeForm::Floating);
    }

    #[test]
    fn parse_datetime_zoned() {
        let dt = parse_datetime("20260123T120000", Some("America/New_York"), 1, 1).unwrap();
        assert_eq!(dt.tzid(), Some("America/New_York"));
    }

    #[test]
    fn parse_datetime_utc_ignores_tzid() {
        let dt = parse_datetime("20260123T120000Z", Some("Europe/Oslo"), 1, 1).unwrap();
        assert!(dt.is_utc());
    }

    #[test]
    fn parse_datetime_bad_time_column() {
        let err = parse_datetime("20260123T99", None, 3, 9).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidTime);
        assert_eq!(err.column, 18);
    }

    #[test]
    fn parse_rrule_count() {
        let rrule = parse_rrule("FREQ=DAILY;COUNT=10", 1, 1).unwrap();
        assert_eq!(rrule.freq, Frequency::Daily);
        assert_eq!(rrule.count, Some(10));
        assert_eq!(rrule.until, None);
    }

    #[test]
    fn parse_rrule_until_date() {
        let rrule = parse_rrule("FREQ=WEEKLY;UNTIL=20260630", 1, 1).unwrap();
        assert_eq!(rrule.until, Some(RRuleUntil::Date(Date::new(2026, 6, 30))));
    }

    #[test]
    fn parse_rrule_until_datetime() {
        let rrule = parse_rrule("FREQ=WEEKLY;UNTIL=20260630T235959Z;BYDAY=TU", 1, 1).unwrap();
        let until = rrule.until.as_ref().map(RRuleUntil::date);
        assert_eq!(until, Some(Date::new(2026, 6, 30)));
    }

    #[test]
    fn until_survives_count_alongside_it() {
        let rrule = parse_rrule("FREQ=WEEKLY;COUNT=3;UNTIL=20100301", 1, 1).unwrap();
        assert_eq!(rrule.until, Some(RRuleUntil::Date(Date::new(2010, 3, 1))));
        assert_eq!(rrule.count, Some(3));
    }

    #[test]
    fn until_survives_malformed_by_parts() {
        for rule in [
            "FREQ=WEEKLY;UNTIL=20100301;BYDAY=MO,",
            "FREQ=MONTHLY;BYMONTHDAY=99;UNTIL=20100301",
            "FREQ=DAILY;UNTIL=20100301;COUNT=many;X-NAME=1;GARBAGE",
        ] {
            let rrule = parse_rrule(rule, 1, 1).unwrap();
            assert_eq!(
                rrule.until,
                Some(RRuleUntil::Date(Date::new(2010, 3, 1))),
                "{rule}"
            );
        }
    }

    #[test]
    fn parse_rrule_requires_freq() {
        let err = parse_rrule("COUNT=3", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidRRule);
        let err = parse_rrule("FREQ=FORTNIGHTLY", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidFrequency);
    }

    #[test]
    fn parse_rrule_bad_until() {
        let err = parse_rrule("FREQ=DAILY;UNTIL=soon", 1, 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidDate);
    }

    #[test]
    fn rrule_until_reads_broken_rules() {
        assert_eq!(
            rrule_until("FREQ=FORTNIGHTLY;UNTIL=20100301T120000Z").map(|u| u.date()),
            Some(Date::new(2010, 3, 1))
        );
        assert_eq!(
            rrule_until("until=20100301").map(|u| u.date()),
            Some(Date::new(2010, 3, 1))
        );
        assert_eq!(rrule_until("FREQ=WEEKLY;UNTIL=soon"), None);
        assert_eq!(rrule_until("SOMETIMES"), None);
    }

    #[test]
    fn unescape_text_basic() {
        assert_eq!(unescape_text("hello\\, world"), "hello, world");
        assert_eq!(unescape_text("line1\\nline2"), "line1\nline2");
        assert_eq!(unescape_text("back\\\\slash"), "back\\slash");
        assert_eq!(unescape_text("odd\\x"), "odd\\x");
    }
}

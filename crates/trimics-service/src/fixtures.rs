//! Calendars shared by the unit tests.

use trimics_rfc::rfc::ical::{ICalendar, parse};

use crate::calendar::Calendar;

/// Cutoff used with [`SCENARIO`].
pub fn cutoff() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// A ended before the cutoff, B after it, C is an open-ended series that
/// started long ago.
pub const SCENARIO: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
X-WR-CALNAME:Work\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19961027T030000\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/Chicago\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19701101T020000\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0600\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:a@example.com\r\n\
SUMMARY:Kickoff\r\n\
DTSTART;VALUE=DATE:20250601\r\n\
DTEND;VALUE=DATE:20250602\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:b@example.com\r\n\
SUMMARY:Review\r\n\
DTSTART;TZID=Europe/Berlin:20260301T090000\r\n\
DTEND;TZID=Europe/Berlin:20260301T100000\r\n\
X-APPLE-TRAVEL-TIME;VALUE=DURATION:PT15M\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:c@example.com\r\n\
SUMMARY:Retro\r\n\
DTSTART:20200103T150000Z\r\n\
DTEND:20200103T160000Z\r\n\
RRULE:FREQ=WEEKLY;BYDAY=FR\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
DESCRIPTION:Retro\r\n\
TRIGGER:-PT10M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Three events for summary lookups.
pub const STANDUPS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example Corp//Calendar 1.0//EN\r\n\
BEGIN:VEVENT\r\n\
UID:s1\r\n\
SUMMARY:Daily Standup\r\n\
DTEND;VALUE=DATE:20260110\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:s2\r\n\
SUMMARY:Lunch\r\n\
DTEND;VALUE=DATE:20260110\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:s3\r\n\
SUMMARY:Weekly STANDUP\r\n\
DTEND;VALUE=DATE:20260110\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub fn decoded(text: &str) -> ICalendar {
    parse(text).unwrap()
}

pub fn loaded(text: &str) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.load_from(decoded(text)).unwrap();
    calendar
}

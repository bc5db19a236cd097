//! iCalendar test fixtures.
//!
//! RFC 5545 Appendix A shapes plus exports seen from common desktop clients.

/// RFC 5545 §A.1 - Minimal VEVENT
pub const VEVENT_MINIMAL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970903T163000Z\r\n\
DTEND:19970903T190000Z\r\n\
SUMMARY:Annual Employee Review\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Weekly series without an end.
pub const VEVENT_RECURRING: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123402@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970905T090000Z\r\n\
DTEND:19970905T100000Z\r\n\
SUMMARY:Weekly Team Meeting\r\n\
RRULE:FREQ=WEEKLY;BYDAY=FR\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// All-day series bounded by UNTIL, with an exception date.
pub const VEVENT_UNTIL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:until-1@example.com\r\n\
DTSTAMP:20250101T000000Z\r\n\
DTSTART;VALUE=DATE:20250106\r\n\
DTEND;VALUE=DATE:20250107\r\n\
RRULE:FREQ=MONTHLY;UNTIL=20251231T235959Z;BYDAY=1MO\r\n\
EXDATE;VALUE=DATE:20250303\r\n\
SUMMARY:Monthly planning\\; all hands\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Event with a nested alarm.
pub const VEVENT_WITH_ALARM: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:alarm-1@example.com\r\n\
DTSTAMP:20260101T000000Z\r\n\
DTSTART:20260210T080000Z\r\n\
DTEND:20260210T083000Z\r\n\
SUMMARY:Dentist\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
DESCRIPTION:Reminder\r\n\
TRIGGER:-PT30M\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Desktop client export: vendor properties, a time zone and a to-do.
pub const CLIENT_EXPORT: &str = "\
BEGIN:VCALENDAR\r\n\
METHOD:PUBLISH\r\n\
VERSION:2.0\r\n\
X-WR-CALNAME:Home\r\n\
PRODID:-//Apple Inc.//macOS 14.0//EN\r\n\
X-APPLE-CALENDAR-COLOR:#1BADF8\r\n\
X-WR-TIMEZONE:Europe/Berlin\r\n\
CALSCALE:GREGORIAN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:+0100\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
DTSTART:19810329T020000\r\n\
TZNAME:CEST\r\n\
TZOFFSETTO:+0200\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
DTSTART:19961027T030000\r\n\
TZNAME:CET\r\n\
TZOFFSETTO:+0100\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
TRANSP:OPAQUE\r\n\
DTEND;TZID=Europe/Berlin:20260412T110000\r\n\
X-APPLE-TRAVEL-ADVISORY-BEHAVIOR:AUTOMATIC\r\n\
UID:5A3C1C5E-2B1F-4A37-9E44-6E1D4C0B7F11\r\n\
DTSTAMP:20260301T101500Z\r\n\
LOCATION:Hauptbahnhof\r\n\
X-APPLE-TRAVEL-TIME;VALUE=DURATION:PT30M\r\n\
SUMMARY:Train to Hamburg\r\n\
CREATED:20260301T101400Z\r\n\
DTSTART;TZID=Europe/Berlin:20260412T090000\r\n\
SEQUENCE:1\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:todo-1\r\n\
SUMMARY:Pack\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";

/// Long description folded by the producer at a different width.
pub const FOLDED_DESCRIPTION: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:folded-1@example.com\r\n\
DTEND;VALUE=DATE:20260501\r\n\
DESCRIPTION:Bring the quarterly numbers\\, the hiring plan and the draft \r\n\
\x20of the offsite agenda. Coffee will be provided.\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

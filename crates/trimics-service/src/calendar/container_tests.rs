use trimics_rfc::rfc::ical::core::{Component, Property};

use super::*;
use crate::fixtures::{SCENARIO, STANDUPS, decoded, loaded};

fn event(uid: &str) -> EventRecord {
    let mut component = Component::event();
    component.add_property(Property::text("UID", uid));
    EventRecord::from_component(component)
}

#[test]
fn new_container_is_empty() {
    let calendar = Calendar::new();
    assert!(calendar.is_empty());
    assert_eq!(calendar.event_count(), 0);
    assert!(matches!(calendar.serialize(), Err(ServiceError::EmptyCalendar)));
}

#[test]
fn initialize_empty_writes_metadata_only() {
    let mut calendar = Calendar::new();
    calendar.initialize_empty();
    assert!(!calendar.is_empty());
    assert_eq!(
        calendar.serialize().unwrap(),
        "BEGIN:VCALENDAR\r\n\
PRODID:-//trimics//Trimmed Calendar//EN\r\n\
VERSION:2.0\r\n\
END:VCALENDAR\r\n"
    );
}

#[test]
fn initialize_empty_uses_configured_prodid() {
    let mut calendar = Calendar::with_prodid("-//Acme//Archive//EN");
    calendar.initialize_empty();
    assert_eq!(
        calendar.metadata("PRODID").and_then(Property::as_text),
        Some("-//Acme//Archive//EN")
    );
}

#[test_log::test]
fn load_reports_event_count_and_keeps_order() {
    let mut calendar = Calendar::new();
    let count = calendar.load_from(decoded(SCENARIO)).unwrap();

    assert_eq!(count, 3);
    let uids: Vec<_> = calendar.events().iter().filter_map(EventRecord::uid).collect();
    assert_eq!(uids, vec!["a@example.com", "b@example.com", "c@example.com"]);
    assert_eq!(calendar.components().len(), 2);
    assert_eq!(
        calendar.metadata("X-WR-CALNAME").map(|p| p.raw_value.as_str()),
        Some("Work")
    );
}

#[test]
fn load_into_loaded_container_is_refused() {
    let mut calendar = loaded(SCENARIO);
    let err = calendar.load_from(decoded(STANDUPS)).unwrap_err();

    assert!(matches!(err, ServiceError::AlreadyLoaded));
    assert_eq!(calendar.event_count(), 3);
    assert_eq!(calendar.event_at(0).and_then(EventRecord::uid), Some("a@example.com"));
}

#[test]
fn load_after_reset_is_allowed() {
    let mut calendar = loaded(SCENARIO);
    calendar.reset();
    calendar.reset();
    assert!(calendar.is_empty());
    assert!(calendar.components().is_empty());
    assert_eq!(calendar.load_from(decoded(STANDUPS)).unwrap(), 3);
}

#[test]
fn load_into_initialized_container_is_refused() {
    let mut calendar = Calendar::new();
    calendar.initialize_empty();
    assert!(matches!(
        calendar.load_from(decoded(STANDUPS)),
        Err(ServiceError::AlreadyLoaded)
    ));
}

#[test]
fn add_event_initializes_and_appends() {
    let mut calendar = Calendar::new();
    calendar.add_event(event("one"));
    calendar.add_event(event("two"));
    calendar.add_event(event("one"));

    assert_eq!(calendar.event_count(), 3);
    let output = calendar.serialize().unwrap();
    assert!(output.starts_with("BEGIN:VCALENDAR\r\nPRODID:-//trimics//Trimmed Calendar//EN\r\n"));
    assert_eq!(output.matches("BEGIN:VEVENT").count(), 3);
    assert!(output.find("UID:one").unwrap() < output.find("UID:two").unwrap());
}

#[test]
fn event_at_out_of_range_is_none() {
    let calendar = loaded(STANDUPS);
    assert_eq!(calendar.event_at(2).and_then(EventRecord::uid), Some("s3"));
    assert!(calendar.event_at(3).is_none());
}

#[test]
fn timezones_for_referenced_events_only() {
    let calendar = loaded(SCENARIO);

    let review = &calendar.events()[1..2];
    let tzids: Vec<_> = calendar
        .timezones_for(review)
        .iter()
        .filter_map(|tz| tz.get_property("TZID"))
        .map(|p| p.raw_value.as_str())
        .collect();
    assert_eq!(tzids, vec!["Europe/Berlin"]);

    assert!(calendar.timezones_for(&calendar.events()[2..]).is_empty());
}

#[test]
fn serialize_loaded_calendar_round_trips() {
    let calendar = loaded(SCENARIO);
    assert_eq!(calendar.serialize().unwrap(), SCENARIO);
}

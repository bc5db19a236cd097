//! A single VEVENT viewed as a mapping from field name to value.

use chrono::NaiveDate;
use trimics_rfc::rfc::ical::core::{Component, Property, Value, names};
use trimics_rfc::rfc::ical::parse::rrule_until;

use crate::error::{ServiceError, ServiceResult};

/// One calendar event.
///
/// A field is the group of all content lines sharing a name, so a record with
/// two `ATTENDEE` lines has one `ATTENDEE` field. Nested sub-components such
/// as VALARM travel with the record untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    component: Component,
}

impl Default for EventRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecord {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            component: Component::event(),
        }
    }

    /// Wraps a decoded VEVENT component.
    #[must_use]
    pub fn from_component(component: Component) -> Self {
        Self { component }
    }

    /// Returns the underlying component.
    #[must_use]
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Consumes the record, returning the underlying component.
    #[must_use]
    pub fn into_component(self) -> Component {
        self.component
    }

    /// Returns the first content line of the named field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Property> {
        self.component.get_property(name)
    }

    /// ## Summary
    /// Returns the first content line of a field the caller cannot do without.
    ///
    /// ## Errors
    /// Returns [`ServiceError::MissingField`] when the record lacks the field.
    pub fn require(&self, name: &str) -> ServiceResult<&Property> {
        self.field(name).ok_or_else(|| ServiceError::MissingField {
            name: name.to_ascii_uppercase(),
        })
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Replaces every content line of the property's field with `property`.
    ///
    /// The field keeps its position when it already existed.
    pub fn set_field(&mut self, property: Property) {
        let properties = &mut self.component.properties;
        match properties.iter().position(|p| p.name == property.name) {
            Some(at) => {
                let name = property.name.clone();
                properties[at] = property;
                let mut index = 0;
                properties.retain(|p| {
                    let keep = index <= at || p.name != name;
                    index += 1;
                    keep
                });
            }
            None => properties.push(property),
        }
    }

    /// Removes the named field, returning whether it was present.
    pub fn remove_field(&mut self, name: &str) -> bool {
        self.component.remove_properties(name) > 0
    }

    /// Returns each field name once, in order of first appearance.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for prop in &self.component.properties {
            if !seen.contains(&prop.name.as_str()) {
                seen.push(&prop.name);
            }
        }
        seen
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.component.summary()
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.component.uid()
    }

    /// Returns nested sub-components (e.g. VALARM).
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.component.children
    }

    /// ## Summary
    /// Returns DTEND at date granularity. Time of day and zone are dropped.
    ///
    /// ## Errors
    /// [`ServiceError::MissingField`] without DTEND, and
    /// [`ServiceError::InvalidField`] when DTEND is not a DATE or DATE-TIME.
    pub fn end_date(&self) -> ServiceResult<NaiveDate> {
        let dtend = self.require(names::DTEND)?;
        dtend
            .value
            .calendar_date()
            .and_then(|d| d.to_naive_date())
            .ok_or_else(|| ServiceError::InvalidField {
                name: names::DTEND.to_string(),
                reason: format!("expected DATE or DATE-TIME, got '{}'", dtend.raw_value),
            })
    }

    /// Returns the recurrence boundary.
    ///
    /// - `None`: the event does not recur
    /// - `Some(None)`: it recurs without an UNTIL boundary
    /// - `Some(Some(d))`: it recurs until `d` (time of day dropped)
    #[must_use]
    pub fn recurrence_until(&self) -> Option<Option<NaiveDate>> {
        let rrule = self.field(names::RRULE)?;
        match &rrule.value {
            Value::Recur(rule) => Some(
                rule.until
                    .as_ref()
                    .and_then(|until| until.date().to_naive_date()),
            ),
            _ => {
                // A rule the codec could not type may still carry a readable UNTIL.
                let until = rrule_until(&rrule.raw_value);
                if until.is_none() {
                    tracing::debug!(
                        uid = self.uid(),
                        rrule = %rrule.raw_value,
                        "Unreadable RRULE treated as open-ended"
                    );
                }
                Some(until.and_then(|u| u.date().to_naive_date()))
            }
        }
    }
}

impl From<Component> for EventRecord {
    fn from(component: Component) -> Self {
        Self::from_component(component)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

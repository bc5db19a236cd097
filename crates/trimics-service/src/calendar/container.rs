//! Calendar container: metadata plus an ordered sequence of event records.

use trimics_core::constants::{DEFAULT_PRODID, ICALENDAR_VERSION};
use trimics_rfc::rfc::ical::core::{Component, ComponentKind, ICalendar, Property, names};

use super::EventRecord;
use crate::error::{ServiceError, ServiceResult};
use crate::trim::lookup;

/// A calendar being read from or written to a file.
///
/// The container is either empty (no metadata, no events) or initialized.
/// Events keep insertion order; nothing is ever sorted.
#[derive(Debug, Clone)]
pub struct Calendar {
    prodid: String,
    metadata: Option<Component>,
    events: Vec<EventRecord>,
    components: Vec<Component>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Creates an empty container that initializes with the default PRODID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prodid(DEFAULT_PRODID)
    }

    /// Creates an empty container that initializes with `prodid`.
    #[must_use]
    pub fn with_prodid(prodid: impl Into<String>) -> Self {
        Self {
            prodid: prodid.into(),
            metadata: None,
            events: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Clears metadata, events and retained components.
    pub fn reset(&mut self) {
        self.metadata = None;
        self.events.clear();
        self.components.clear();
    }

    /// Returns whether the container holds neither metadata nor events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.is_none() && self.events.is_empty()
    }

    /// Resets, then writes the PRODID and VERSION metadata.
    pub fn initialize_empty(&mut self) {
        self.reset();
        let mut root = Component::calendar();
        root.add_property(Property::text(names::PRODID, self.prodid.as_str()));
        root.add_property(Property::text(names::VERSION, ICALENDAR_VERSION));
        self.metadata = Some(root);
        tracing::trace!(prodid = %self.prodid, "Initialized empty calendar");
    }

    /// ## Summary
    /// Adopts a decoded calendar: its metadata, its VEVENTs in document order
    /// and every other top-level component.
    ///
    /// ## Errors
    /// Returns [`ServiceError::AlreadyLoaded`] when the container is not empty;
    /// nothing is modified in that case.
    pub fn load_from(&mut self, decoded: ICalendar) -> ServiceResult<usize> {
        if !self.is_empty() {
            return Err(ServiceError::AlreadyLoaded);
        }

        let mut root = decoded.root;
        let children = std::mem::take(&mut root.children);
        for child in children {
            if child.kind() == ComponentKind::Event {
                self.events.push(EventRecord::from_component(child));
            } else {
                self.components.push(child);
            }
        }
        self.metadata = Some(root);

        tracing::debug!(
            events = self.events.len(),
            components = self.components.len(),
            "Loaded calendar"
        );
        Ok(self.events.len())
    }

    /// Appends an event, initializing the container first when empty.
    pub fn add_event(&mut self, event: EventRecord) {
        if self.is_empty() {
            self.initialize_empty();
        }
        self.events.push(event);
    }

    /// Appends a non-event component such as a VTIMEZONE.
    pub fn add_component(&mut self, component: Component) {
        if self.is_empty() {
            self.initialize_empty();
        }
        self.components.push(component);
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Returns retained non-event components in document order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns a calendar-level metadata property.
    #[must_use]
    pub fn metadata(&self, name: &str) -> Option<&Property> {
        self.metadata.as_ref()?.get_property(name)
    }

    /// Returns the event at `index`, or `None` when out of range.
    #[must_use]
    pub fn event_at(&self, index: usize) -> Option<&EventRecord> {
        lookup::event_at(&self.events, index)
    }

    /// Finds the first event at or after `start` whose SUMMARY contains
    /// `needle`, ignoring case. See [`lookup::find_by_summary`].
    #[must_use]
    pub fn find_by_summary(&self, needle: &str, start: usize) -> (usize, Option<&EventRecord>) {
        lookup::find_by_summary(&self.events, needle, start)
    }

    /// Returns the retained VTIMEZONEs whose TZID is referenced by `events`.
    #[must_use]
    pub fn timezones_for<'a, I>(&self, events: I) -> Vec<&Component>
    where
        I: IntoIterator<Item = &'a EventRecord>,
    {
        let mut referenced: Vec<&str> = Vec::new();
        for event in events {
            for tzid in event.component().referenced_tzids() {
                if !referenced.contains(&tzid) {
                    referenced.push(tzid);
                }
            }
        }

        self.components
            .iter()
            .filter(|c| c.kind() == ComponentKind::Timezone)
            .filter(|tz| {
                tz.get_property(names::TZID)
                    .is_some_and(|p| referenced.contains(&p.raw_value.as_str()))
            })
            .collect()
    }

    /// ## Summary
    /// Builds the document: metadata, retained components, then events.
    ///
    /// ## Errors
    /// Returns [`ServiceError::EmptyCalendar`] when the container is empty.
    pub fn to_icalendar(&self) -> ServiceResult<ICalendar> {
        let Some(metadata) = &self.metadata else {
            return Err(ServiceError::EmptyCalendar);
        };

        let mut root = metadata.clone();
        root.children.extend(self.components.iter().cloned());
        root.children
            .extend(self.events.iter().map(|e| e.component().clone()));
        Ok(ICalendar { root })
    }

    /// ## Summary
    /// Encodes the container as RFC 5545 text.
    ///
    /// ## Errors
    /// Returns [`ServiceError::EmptyCalendar`] when the container is empty.
    pub fn serialize(&self) -> ServiceResult<String> {
        Ok(trimics_rfc::rfc::ical::serialize(&self.to_icalendar()?))
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;

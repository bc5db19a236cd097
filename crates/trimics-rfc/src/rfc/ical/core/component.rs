//! iCalendar components (RFC 5545 §3.4-3.6).

use super::{Property, names};

/// The component kinds trimics tells apart. Everything else is [`Self::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Journal,
    Timezone,
    Alarm,
    Other,
}

impl ComponentKind {
    /// Returns the BEGIN/END name, or `None` for [`Self::Other`].
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Other => return None,
        })
    }

    /// Classifies a BEGIN/END name (case-insensitive).
    #[must_use]
    pub fn of(name: &str) -> Self {
        [
            Self::Calendar,
            Self::Event,
            Self::Todo,
            Self::Journal,
            Self::Timezone,
            Self::Alarm,
        ]
        .into_iter()
        .find(|kind| kind.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
        .unwrap_or(Self::Other)
    }
}

/// A component: its properties and nested sub-components, both in document
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    /// Uppercased component name as written after BEGIN.
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    /// Creates an empty component with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calendar() -> Self {
        Self::named("VCALENDAR")
    }

    #[must_use]
    pub fn event() -> Self {
        Self::named("VEVENT")
    }

    #[must_use]
    pub fn alarm() -> Self {
        Self::named("VALARM")
    }

    /// Creates an empty component with this one's name.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::named(self.name.as_str())
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::of(&self.name)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Removes every property with the given name, returning how many were removed.
    pub fn remove_properties(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.name.eq_ignore_ascii_case(name));
        before - self.properties.len()
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    /// Direct children of the given kind.
    pub fn children_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.children.iter().filter(move |c| c.kind() == kind)
    }

    /// Returns every TZID parameter value used by this component's
    /// properties and those of its sub-components, in order of appearance.
    #[must_use]
    pub fn referenced_tzids(&self) -> Vec<&str> {
        let mut tzids: Vec<&str> = Vec::new();
        self.collect_tzids(&mut tzids);
        tzids
    }

    fn collect_tzids<'a>(&'a self, out: &mut Vec<&'a str>) {
        for tzid in self.properties.iter().filter_map(Property::tzid) {
            if !out.contains(&tzid) {
                out.push(tzid);
            }
        }
        for child in &self.children {
            child.collect_tzids(out);
        }
    }
}

/// A decoded document: the VCALENDAR root and everything below it.
#[derive(Debug, Clone, PartialEq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Creates a calendar holding only PRODID and VERSION.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text(names::PRODID, prodid));
        root.add_property(Property::text(names::VERSION, "2.0"));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID)?.as_text()
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION)?.as_text()
    }

    pub fn add_event(&mut self, event: Component) {
        self.root.add_child(event);
    }

    /// VEVENT children of the root, in document order.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Event).collect()
    }
}

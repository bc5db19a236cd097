//! Vendor extension stripping.

use trimics_core::constants::EXTENSION_PREFIX;
use trimics_rfc::rfc::ical::core::Property;

use crate::calendar::EventRecord;

/// Returns whether a field name is a vendor extension (`X-` prefixed).
///
/// Decoded names are already uppercase, so the match is exact.
#[must_use]
pub fn is_extension(name: &str) -> bool {
    name.starts_with(EXTENSION_PREFIX)
}

/// Returns a copy of `event` without its `X-` fields.
///
/// Remaining properties and nested sub-components are copied verbatim.
#[must_use]
pub fn strip(event: &EventRecord) -> EventRecord {
    let source = event.component();
    let mut component = source.empty_like();
    component.properties = source
        .properties
        .iter()
        .filter(|p| !is_extension(&p.name))
        .cloned()
        .collect::<Vec<Property>>();
    component.children.clone_from(&source.children);

    let removed = source.properties.len() - component.properties.len();
    if removed > 0 {
        tracing::trace!(uid = event.uid(), removed, "Stripped extension fields");
    }

    EventRecord::from_component(component)
}

//! iCalendar serializer (RFC 5545).
//!
//! Components, properties and parameters are written in stored order. Each
//! property is written from its wire form, so untouched input round-trips.

use super::escape::escape_param_value;
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ICalendar, Parameter, Property};

/// Serializes an iCalendar document to a string.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component, its properties and its children.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = fold_line(&format!("BEGIN:{}", component.name));

    for prop in &component.properties {
        result.push_str(&serialize_property(prop));
    }
    for child in &component.children {
        result.push_str(&serialize_component(child));
    }

    result.push_str(&fold_line(&format!("END:{}", component.name)));
    result
}

/// Serializes a property as one folded content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&prop.raw_value);

    fold_line(&line)
}

/// Serializes a parameter as `NAME=value[,value...]`.
#[must_use]
pub fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}

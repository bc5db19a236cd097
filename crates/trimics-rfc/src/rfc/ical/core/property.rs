//! Content lines and properties (RFC 5545 §3.1, §3.8).

use super::{Date, DateTime, Parameter, RRule, Value};
use crate::rfc::ical::build::escape_text;

/// One unfolded line split into name, parameters and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Uppercased property name.
    pub name: String,
    pub params: Vec<Parameter>,
    /// Value exactly as written, still escaped.
    pub raw_value: String,
}

impl ContentLine {
    /// Value of the first parameter called `name`.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        param_value(&self.params, name)
    }

    /// The `VALUE=` data type override, if any.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param_value(super::parameter::names::VALUE)
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(super::parameter::names::TZID)
    }
}

fn param_value<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))?
        .value()
}

/// A property with its typed value.
///
/// `raw_value` is the wire form written back by the serializer, so a property
/// that was never touched comes out exactly as it went in.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Uppercased property name.
    pub name: String,
    pub params: Vec<Parameter>,
    pub value: Value,
    /// Escaped, unfolded wire value.
    pub raw_value: String,
}

impl Property {
    fn build(name: impl Into<String>, params: Vec<Parameter>, value: Value, raw: String) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value,
            raw_value: raw,
        }
    }

    /// A TEXT property. The wire form is escaped.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let raw = escape_text(&value);
        Self::build(name, Vec::new(), Value::Text(value), raw)
    }

    /// A DATE-TIME property. Zoned values carry a TZID parameter.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let raw = dt.to_string();
        let params = dt.tzid().map(Parameter::tzid).into_iter().collect();
        Self::build(name, params, Value::DateTime(dt), raw)
    }

    /// A DATE property, marked with `VALUE=DATE`.
    #[must_use]
    pub fn date(name: impl Into<String>, d: Date) -> Self {
        let raw = d.to_string();
        Self::build(
            name,
            vec![Parameter::value_type("DATE")],
            Value::Date(d),
            raw,
        )
    }

    /// A RECUR property.
    #[must_use]
    pub fn recur(name: impl Into<String>, rule: RRule) -> Self {
        let raw = rule.to_string();
        Self::build(name, Vec::new(), Value::Recur(rule), raw)
    }

    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        param_value(&self.params, name)
    }

    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(super::parameter::names::TZID)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        self.value.as_datetime()
    }

    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        self.value.as_date()
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        self.value.as_recur()
    }
}

/// Property names the codec and the trimming pipeline care about.
pub mod names {
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";
    pub const TZID: &str = "TZID";

    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const DUE: &str = "DUE";
    pub const RECURRENCE_ID: &str = "RECURRENCE-ID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const CREATED: &str = "CREATED";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";

    pub const RRULE: &str = "RRULE";
    pub const EXRULE: &str = "EXRULE";
}

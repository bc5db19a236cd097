//! iCalendar core models (RFC 5545).
//!
//! These types are designed for:
//! - Round-trip fidelity: every property keeps its wire form
//! - Document order: components and properties are never reordered
//! - Type safety: the values trimics reasons about are typed

mod component;
mod datetime;
mod parameter;
mod property;
mod rrule;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm};
pub use parameter::Parameter;
pub use property::{ContentLine, Property, names};
pub use rrule::{Frequency, RRule, RRuleUntil};
pub use value::{Date, Value};

//! iCalendar RFC 5545 implementation.
//!
//! - `core`: Type definitions for iCalendar structures
//! - `parse`: Parsers for iCalendar content
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use trimics_rfc::rfc::ical::{build, core::*, parse};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Team Meeting"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! let reparsed = parse::parse(&output).unwrap();
//! assert_eq!(reparsed.events().len(), 1);
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use core::{Component, ComponentKind, ICalendar, Parameter, Property};
pub use parse::{ParseError, ParseResult, parse};

use crate::error::RfcResult;

/// Byte-order mark some calendar exporters prepend to the document.
const BOM: char = '\u{feff}';

/// ## Summary
/// Decodes raw calendar bytes (UTF-8, optional BOM) into an [`ICalendar`].
///
/// ## Errors
/// Returns an error if the bytes are not UTF-8 or the text is not iCalendar.
pub fn decode(bytes: &[u8]) -> RfcResult<ICalendar> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse(text.trim_start_matches(BOM))?)
}

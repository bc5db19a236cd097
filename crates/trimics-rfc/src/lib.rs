//! iCalendar (RFC 5545) model, parser and serializer used by trimics.

pub mod error;
pub mod rfc;

//! iCalendar parsing primitives (RFC 5545).
//!
//! - Lexer: content line splitting with unfolding
//! - Values: value type parsing (DATE, DATE-TIME, RECUR, ...)
//! - Parser: full document parsing into typed structures

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::parse;
pub use values::{parse_date, parse_datetime, parse_rrule, rrule_until, unescape_text};

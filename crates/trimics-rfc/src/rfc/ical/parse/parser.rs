//! iCalendar document parser (RFC 5545).
//!
//! Parses complete iCalendar documents into typed structures.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use super::values::{parse_date, parse_datetime, parse_rrule, unescape_text};
use crate::rfc::ical::core::{
    Component, ComponentKind, ContentLine, ICalendar, Property, Value, names,
};

/// Components nested deeper than this below VCALENDAR are rejected.
const MAX_DEPTH: usize = 64;

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);

    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1)
            .with_context("document is empty"));
    }

    tracing::trace!(count = lines.len(), "Split lines");

    let mut iter = lines
        .into_iter()
        .map(|(line_num, line)| parse_content_line(&line, line_num).map(|cl| (line_num, cl)));

    let Some(first) = iter.next().transpose()? else {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    };
    let (line_num, begin) = first;
    if begin.name != "BEGIN" {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1));
    }

    let root = parse_component(&mut iter, line_num, &begin.raw_value, 0)?;

    if root.kind() != ComponentKind::Calendar {
        tracing::warn!(name = %root.name, "Root component is not VCALENDAR");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context(format!("expected VCALENDAR, got {}", root.name)));
    }

    // A second component after the root would be dropped unseen, so it is an
    // error. Stray lines are only reported.
    let mut ignored = 0_usize;
    for item in iter {
        match item {
            Ok((extra, cl)) if cl.name == "BEGIN" => {
                tracing::warn!(line = extra, name = %cl.raw_value, "Component after END:VCALENDAR");
                return Err(
                    ParseError::new(ParseErrorKind::TrailingComponent, extra, 1)
                        .with_context(format!("BEGIN:{} after END:{}", cl.raw_value, root.name)),
                );
            }
            _ => ignored += 1,
        }
    }
    if ignored > 0 {
        tracing::warn!(lines = ignored, "Ignoring content after END:VCALENDAR");
    }

    tracing::debug!("iCalendar document parsed successfully");

    Ok(ICalendar { root })
}

/// Parses the body of a component whose `BEGIN` line has been consumed.
fn parse_component(
    iter: &mut impl Iterator<Item = ParseResult<(usize, ContentLine)>>,
    begin_line: usize,
    raw_name: &str,
    depth: usize,
) -> ParseResult<Component> {
    let mut component = Component::named(raw_name);
    let mut last_line = begin_line;

    loop {
        let Some((line_num, content_line)) = iter.next().transpose()? else {
            return Err(ParseError::new(ParseErrorKind::MissingEnd, last_line, 1)
                .with_context(format!("missing END:{}", component.name)));
        };
        last_line = line_num;

        match content_line.name.as_str() {
            "BEGIN" => {
                if depth >= MAX_DEPTH {
                    return Err(ParseError::new(ParseErrorKind::NestingTooDeep, line_num, 1)
                        .with_context(format!("more than {MAX_DEPTH} nested components")));
                }
                let child = parse_component(iter, line_num, &content_line.raw_value, depth + 1)?;
                component.add_child(child);
            }
            "END" => {
                let end_name = content_line.raw_value.to_ascii_uppercase();
                if end_name != component.name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{end_name}",
                                component.name
                            )),
                    );
                }
                return Ok(component);
            }
            _ => component.add_property(parse_property(content_line, line_num)),
        }
    }
}

/// Parses a property from a content line, resolving the value type.
///
/// A value that does not match its expected type is kept as
/// [`Value::Unknown`] so one malformed field never rejects the document.
fn parse_property(cl: ContentLine, line_num: usize) -> Property {
    let value_type = determine_value_type(&cl);
    // Column of the first value character: name, params and colon precede it.
    let col = cl.name.len() + 2;

    let parsed = match value_type {
        ValueType::Text => Ok(Value::Text(unescape_text(&cl.raw_value))),
        ValueType::Date => parse_date(&cl.raw_value, line_num, col).map(Value::Date),
        ValueType::DateTime => {
            parse_datetime(&cl.raw_value, cl.tzid(), line_num, col).map(Value::DateTime)
        }
        ValueType::Recur => parse_rrule(&cl.raw_value, line_num, col).map(Value::Recur),
        ValueType::Opaque => Ok(Value::Unknown(cl.raw_value.clone())),
    };

    let value = parsed.unwrap_or_else(|error| {
        tracing::debug!(property = %cl.name, %error, "Keeping malformed value as opaque");
        Value::Unknown(cl.raw_value.clone())
    });

    Property {
        name: cl.name,
        params: cl.params,
        value,
        raw_value: cl.raw_value,
    }
}

/// Value types the parser resolves. Anything else stays opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueType {
    Date,
    DateTime,
    Recur,
    Text,
    Opaque,
}

/// Determines the value type for a property.
fn determine_value_type(cl: &ContentLine) -> ValueType {
    match cl.name.as_str() {
        names::DTSTART
        | names::DTEND
        | names::DUE
        | names::RECURRENCE_ID
        | names::DTSTAMP
        | names::CREATED
        | names::LAST_MODIFIED => {
            let date_only = cl
                .value_type()
                .is_some_and(|v| v.eq_ignore_ascii_case("DATE"))
                || !cl.raw_value.contains('T');
            if date_only {
                ValueType::Date
            } else {
                ValueType::DateTime
            }
        }

        names::RRULE | names::EXRULE => ValueType::Recur,

        names::SUMMARY
        | names::UID
        | names::PRODID
        | names::VERSION
        | names::TZID
        | "DESCRIPTION"
        | "LOCATION"
        | "COMMENT"
        | "STATUS"
        | "CLASS"
        | "CATEGORIES"
        | "CONTACT"
        | "RESOURCES"
        | "TRANSP"
        | "CALSCALE"
        | "METHOD"
        | "TZNAME"
        | "ACTION"
        | "RELATED-TO" => ValueType::Text,

        _ => ValueType::Opaque,
    }
}

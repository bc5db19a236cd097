use thiserror::Error;

use crate::rfc::ical::parse::ParseError;

/// RFC decoding and encoding errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

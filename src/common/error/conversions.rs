//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::sheet::text::formats::sylk::ParseError;

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(format!("invalid UTF-8 at byte {}", err.valid_up_to()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::text::formats::sylk::ParseErrorKind;

    #[test]
    fn test_parse_error_conversion_keeps_context() {
        let err: Error = ParseError::new(ParseErrorKind::MalformedRecord, 7, "XYZ;foo").into();
        let parse = err.as_parse_error().unwrap();
        assert_eq!(parse.kind, ParseErrorKind::MalformedRecord);
        assert_eq!(parse.line, 7);
        assert_eq!(parse.text, "XYZ;foo");
    }

    #[test]
    fn test_utf8_error_reports_offset() {
        let bytes = [b'I', b'D', 0xFF];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err.to_string(), "Encoding error: invalid UTF-8 at byte 2");
    }
}

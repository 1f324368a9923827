//! Record-level parse failures.
//!
//! Every failure is fatal for the input being read: once a record cannot be
//! interpreted the cursor may be wrong, so later records cannot be trusted.

use std::fmt;
use thiserror::Error;

/// What went wrong while reading a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The record tag or a field code is not well formed.
    MalformedRecord,
    /// A quoted value is not closed within its field.
    UnterminatedString,
    /// A row or column is not a positive integer.
    InvalidCoordinate,
    /// The input stopped before its end-of-file record.
    UnexpectedEndOfInput,
}

impl ParseErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::MalformedRecord => "malformed record",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::InvalidCoordinate => "invalid coordinate",
            ParseErrorKind::UnexpectedEndOfInput => "unexpected end of input",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that could not be interpreted, with its 1-based line number and
/// the raw line text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}: {text:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub text: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }
}

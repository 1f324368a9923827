//! Unified error types for slk2csv.
//!
//! Input is either rejected while it is being decoded (I/O, text encoding)
//! or while its records are interpreted (`Parse`). All of them are fatal for
//! the input being processed.
use crate::sheet::text::formats::sylk::ParseError;
use thiserror::Error;

/// Main error type for slk2csv operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A SYLK record could not be interpreted
    #[error("Parse error: {0}")]
    Parse(ParseError),

    /// Input bytes are not valid in the expected text encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Feature disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),
}

impl Error {
    /// Returns the record parse failure, if this error is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for slk2csv operations.
pub type Result<T> = std::result::Result<T, Error>;

//! SYLK (SYmbolic LinK) format reader.
//!
//! SYLK is a text-based spreadsheet format originally from Multiplan,
//! later supported by Excel and other spreadsheet applications.
//!
//! Format structure:
//! - ID: File identifier and version
//! - P: Page/Print settings
//! - F: Format definition
//! - B: Bounds/dimensions
//! - C: Cell data
//! - E: End of file
//!
//! Reading is a single pass: [`preprocess`] yields numbered lines,
//! [`tokenizer`] turns each into a [`RawRecord`], and the [`Interpreter`]
//! folds the records into a [`SylkSheet`]. The first failing record aborts
//! the whole read.

pub mod error;
pub mod interpreter;
pub mod preprocess;
pub mod tokenizer;

pub use error::{ParseError, ParseErrorKind};
pub use interpreter::{Cursor, Flow, Interpreter, SylkSheet};
pub use tokenizer::{Field, Payload, RawRecord, RecordTag, tokenize};

use crate::sheet::Result as SheetResult;
use std::io::Read;

/// Options for reading SYLK input.
#[derive(Debug, Clone)]
pub struct SylkConfig {
    /// Remove a leading byte order mark before decoding
    pub strip_bom: bool,
    /// Encoding label or Windows code page for non-UTF-8 input
    pub encoding: Option<String>,
    /// Fail with `UnexpectedEndOfInput` when no `E` record closes the input
    pub require_end_record: bool,
}

impl Default for SylkConfig {
    fn default() -> Self {
        Self {
            strip_bom: true,
            encoding: None,
            require_end_record: false,
        }
    }
}

impl SylkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Decode input with the given encoding label (`"windows-1252"`) or code
    /// page (`"1252"`).
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn with_require_end_record(mut self, require: bool) -> Self {
        self.require_end_record = require;
        self
    }
}

/// Read a whole SYLK stream.
pub fn read_sylk<R: Read>(reader: &mut R, config: &SylkConfig) -> SheetResult<SylkSheet> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_sylk_bytes(&bytes, config)
}

/// Parse SYLK input held in memory.
pub fn parse_sylk_bytes(bytes: &[u8], config: &SylkConfig) -> SheetResult<SylkSheet> {
    let text = preprocess::decode_input(bytes, config)?;
    Ok(parse_text(&text, config)?)
}

/// Parse already-decoded SYLK text with the default configuration.
pub fn parse_sylk_str(text: &str) -> SheetResult<SylkSheet> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(parse_text(text, &SylkConfig::default())?)
}

fn parse_text(text: &str, config: &SylkConfig) -> Result<SylkSheet, ParseError> {
    let mut interpreter = Interpreter::new();
    let mut lines = preprocess::lines(text);

    for (line_number, line) in lines.by_ref() {
        let Some(record) = tokenize(line_number, line)? else {
            continue;
        };
        if interpreter.apply(line_number, line, &record)? == Flow::Stop {
            break;
        }
    }

    let sheet = interpreter.finish();
    if config.require_end_record && !sheet.saw_end_record {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEndOfInput,
            lines.line_number() + 1,
            "",
        ));
    }

    let (rows, columns) = sheet.grid.bounds();
    if let Some((declared_rows, declared_columns)) = sheet.declared_bounds {
        if rows > declared_rows || columns > declared_columns {
            tracing::warn!(
                rows,
                columns,
                declared_rows,
                declared_columns,
                "cells extend past the declared bounds"
            );
        }
    }
    tracing::debug!(records = sheet.record_count, rows, columns, "parsed SYLK input");
    Ok(sheet)
}

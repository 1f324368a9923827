//! Delimited text reader.
//!
//! Reads CSV written by [`write_csv`](super::formats::delimited::write_csv)
//! (or any RFC 4180 style producer) back into a [`Grid`]. Values are not
//! typed: every non-empty field becomes [`CellValue::Text`], so CSV → grid →
//! CSV is a fixed point after the first pass.

use super::formats::delimited::CsvConfig;
use crate::common::bom::{BomKind, strip_bom};
use crate::common::Error;
use crate::sheet::grid::Grid;
use crate::sheet::{CellValue, Result as SheetResult};
use memchr::memchr;

/// Row-at-a-time parser over an in-memory buffer.
pub struct TextParser<'a> {
    input: &'a [u8],
    pos: usize,
    delimiter: u8,
    quote: u8,
}

impl<'a> TextParser<'a> {
    /// Create a new text parser
    pub fn new(input: &'a [u8], config: &CsvConfig) -> Self {
        TextParser {
            input,
            pos: 0,
            delimiter: config.delimiter,
            quote: config.quote,
        }
    }

    /// Parse the next row from the input
    ///
    /// Quoted fields may contain delimiters, doubled quotes, and line breaks.
    /// A quote left open at the end of input closes the field.
    pub fn parse_row(&mut self) -> Option<Vec<Vec<u8>>> {
        if self.pos >= self.input.len() {
            return None;
        }

        let mut fields = Vec::new();
        let mut current_field = Vec::new();
        let mut in_quotes = false;

        while self.pos < self.input.len() {
            let byte = self.input[self.pos];
            self.pos += 1;

            if in_quotes {
                if byte == self.quote {
                    if self.input.get(self.pos) == Some(&self.quote) {
                        // Escaped quote (doubled quote)
                        current_field.push(self.quote);
                        self.pos += 1;
                    } else {
                        in_quotes = false;
                    }
                } else {
                    // Copy everything up to the next quote in one go
                    let rest = &self.input[self.pos - 1..];
                    let run = memchr(self.quote, rest).unwrap_or(rest.len());
                    current_field.extend_from_slice(&rest[..run]);
                    self.pos += run - 1;
                }
                continue;
            }

            match byte {
                b'\n' => {
                    fields.push(std::mem::take(&mut current_field));
                    return Some(fields);
                },
                // CR is only meaningful as part of CRLF; LF ends the row
                b'\r' => {},
                quote if quote == self.quote => in_quotes = true,
                delim if delim == self.delimiter => {
                    fields.push(std::mem::take(&mut current_field));
                },
                _ => current_field.push(byte),
            }
        }

        fields.push(current_field);
        Some(fields)
    }
}

/// Read delimited text into a grid of text cells.
///
/// Empty fields are stored as explicit [`CellValue::Empty`] so that short
/// rows and blank trailing columns keep their place in the bounds.
pub fn read_csv_grid(bytes: &[u8], config: &CsvConfig) -> SheetResult<Grid> {
    let (body, bom) = strip_bom(bytes);
    if matches!(bom, Some(BomKind::Utf16Le | BomKind::Utf16Be)) {
        return Err(Error::Encoding("UTF-16 delimited text is not supported".to_string()));
    }
    std::str::from_utf8(body)?;

    let mut parser = TextParser::new(body, config);
    let mut grid = Grid::new();
    let mut row: u32 = 0;
    while let Some(fields) = parser.parse_row() {
        row += 1;
        for (index, field) in fields.into_iter().enumerate() {
            let value = if field.is_empty() {
                CellValue::Empty
            } else {
                // Field boundaries are ASCII bytes, so every field of valid
                // UTF-8 input is itself valid UTF-8.
                CellValue::Text(String::from_utf8(field).map_err(|e| e.utf8_error())?)
            };
            grid.set(row, index as u32 + 1, value);
        }
    }
    Ok(grid)
}

//! Delimited text (CSV/TSV) writer.
//!
//! Rows `1..=max_row` of a [`Grid`] become output lines and columns
//! `1..=max_column` become fields, so a sparse grid comes out rectangular.
//! Quoting keeps the output unambiguous: text is quoted whenever reading it
//! back could change its meaning, which includes text that spells a number
//! or one of the `TRUE`/`FALSE`/error keywords.

use crate::common::{BomKind, write_bom};
use crate::sheet::grid::Grid;
use crate::sheet::lexical;
use crate::sheet::{CellValue, Result as SheetResult};
use memchr::{memchr, memchr3};
use std::io::{BufWriter, Write};

/// Line terminator written after every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvConfig {
    pub delimiter: u8,
    pub quote: u8,
    pub line_terminator: LineTerminator,
    pub write_bom: Option<BomKind>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::Lf,
            write_bom: None,
        }
    }
}

impl CsvConfig {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    pub fn with_write_bom(mut self, bom: Option<BomKind>) -> Self {
        self.write_bom = bom;
        self
    }
}

/// Write `grid` as delimited text.
///
/// Every row, the last one included, ends with the configured terminator.
/// An empty grid produces no output beyond the optional BOM. Only stored
/// cells are visited; the empty fields between them are written as runs of
/// delimiters, so a cell far to the right costs output bytes but no memory.
pub fn write_csv<W: Write>(grid: &Grid, writer: &mut W, config: &CsvConfig) -> SheetResult<()> {
    let mut out = BufWriter::new(writer);
    if let Some(bom) = config.write_bom {
        write_bom(&mut out, bom)?;
    }

    let (max_row, max_column) = grid.bounds();
    let terminator = config.line_terminator.as_str().as_bytes();
    let mut cells = grid.cells().peekable();
    let mut field = String::new();

    for row in 1..=max_row {
        // delimiters already written on this row
        let mut separators = 0;
        while let Some(((_, column), cell)) = cells.next_if(|((cell_row, _), _)| *cell_row == row) {
            write_delimiters(&mut out, config.delimiter, column - 1 - separators)?;
            separators = column - 1;

            field.clear();
            write_field(&mut field, cell, config);
            out.write_all(field.as_bytes())?;
        }
        write_delimiters(&mut out, config.delimiter, max_column - 1 - separators)?;
        out.write_all(terminator)?;
    }

    out.flush()?;
    Ok(())
}

fn write_delimiters<W: Write>(out: &mut W, delimiter: u8, count: u32) -> std::io::Result<()> {
    const RUN: usize = 1024;
    let run = [delimiter; RUN];
    let mut remaining = count as usize;
    while remaining > 0 {
        let n = remaining.min(RUN);
        out.write_all(&run[..n])?;
        remaining -= n;
    }
    Ok(())
}

/// Render `grid` into an owned string.
pub fn grid_to_csv_string(grid: &Grid, config: &CsvConfig) -> SheetResult<String> {
    let mut out = Vec::new();
    write_csv(grid, &mut out, &config.clone().with_write_bom(None))?;
    Ok(String::from_utf8(out).map_err(|e| e.utf8_error())?)
}

fn write_field(buf: &mut String, cell: &CellValue, config: &CsvConfig) {
    match cell {
        CellValue::Empty => {},
        CellValue::Bool(b) => buf.push_str(if *b { "TRUE" } else { "FALSE" }),
        CellValue::Number(n) => write_number(buf, *n),
        CellValue::Text(s) => {
            if has_structural_bytes(s, config)
                || lexical::is_reserved_keyword(s)
                || lexical::is_numeric_literal(s)
            {
                write_quoted(buf, s, config.quote);
            } else {
                buf.push_str(s);
            }
        },
        CellValue::Error(err) => {
            if has_structural_bytes(err, config) {
                write_quoted(buf, err, config.quote);
            } else {
                buf.push_str(err);
            }
        },
    }
}

#[inline]
fn has_structural_bytes(s: &str, config: &CsvConfig) -> bool {
    let bytes = s.as_bytes();
    memchr3(config.delimiter, config.quote, b'\n', bytes).is_some() || memchr(b'\r', bytes).is_some()
}

fn write_quoted(buf: &mut String, s: &str, quote: u8) {
    let quote = char::from(quote);
    buf.reserve(s.len() + 2);
    buf.push(quote);
    for ch in s.chars() {
        if ch == quote {
            buf.push(quote);
        }
        buf.push(ch);
    }
    buf.push(quote);
}

/// Write the canonical form of a number.
///
/// Zero (of either sign) is `0`. Integral values below 1e15 are written as
/// plain integers. Everything else uses the shortest representation that
/// round-trips, with a trailing `.0` dropped: plain decimals for decimal
/// exponents from -5 to 16, scientific notation (`1e21`, `1.5e-7`) beyond.
pub fn write_number(buf: &mut String, n: f64) {
    if n == 0.0 {
        buf.push('0');
        return;
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        let mut ints = itoa::Buffer::new();
        buf.push_str(ints.format(n as i64));
        return;
    }
    let mut floats = ryu::Buffer::new();
    let s = floats.format(n);
    buf.push_str(s.strip_suffix(".0").unwrap_or(s));
}

/// Canonical form of a number as an owned string.
pub fn format_number(n: f64) -> String {
    let mut s = String::with_capacity(24);
    write_number(&mut s, n);
    s
}

//! Record interpreter.
//!
//! Applies records in file order to a [`Grid`]. Cell records may leave out
//! their row (`Y`) or column (`X`); the missing coordinate is inherited from
//! the [`Cursor`], which every explicit coordinate updates. The cursor never
//! advances on its own.

use super::error::{ParseError, ParseErrorKind};
use super::tokenizer::{Payload, RawRecord, RecordTag, VALUE_FIELD};
use crate::sheet::grid::Grid;
use crate::sheet::types::CellValue;

const ROW_FIELD: char = 'Y';
const COLUMN_FIELD: char = 'X';
const EXPRESSION_FIELD: char = 'E';

/// Current row and column, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u32,
    pub column: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { row: 1, column: 1 }
    }
}

/// Whether more records should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// An `E` record was seen; the rest of the input is not data.
    Stop,
}

/// Everything recovered from one SYLK input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SylkSheet {
    pub grid: Grid,
    /// `(rows, columns)` from a `B` record, if the file declared them.
    pub declared_bounds: Option<(u32, u32)>,
    /// Number of records applied, blank lines excluded.
    pub record_count: usize,
    /// Whether the input was closed by an `E` record.
    pub saw_end_record: bool,
}

/// Stateful reduction from records to a [`SylkSheet`].
#[derive(Debug, Default)]
pub struct Interpreter {
    cursor: Cursor,
    sheet: SylkSheet,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.sheet.grid
    }

    /// Apply one record read from `line_number` / `line`.
    pub fn apply(
        &mut self,
        line_number: usize,
        line: &str,
        record: &RawRecord,
    ) -> Result<Flow, ParseError> {
        self.sheet.record_count += 1;
        match &record.tag {
            RecordTag::Cell => self.apply_cell(line_number, line, record)?,
            RecordTag::Bounds => self.apply_bounds(record),
            RecordTag::End => {
                self.sheet.saw_end_record = true;
                return Ok(Flow::Stop);
            },
            RecordTag::Other(tag) => {
                tracing::trace!(line = line_number, tag = %tag, "skipping unknown record");
            },
            other => {
                tracing::trace!(line = line_number, tag = ?other, "skipping non-cell record");
            },
        }
        Ok(Flow::Continue)
    }

    /// Finish the reduction.
    pub fn finish(self) -> SylkSheet {
        self.sheet
    }

    fn apply_cell(
        &mut self,
        line_number: usize,
        line: &str,
        record: &RawRecord,
    ) -> Result<(), ParseError> {
        let invalid = || ParseError::new(ParseErrorKind::InvalidCoordinate, line_number, line);

        // Both coordinates are validated before the cursor moves, so a
        // failing record leaves no half-applied state behind.
        let row = match record.field(ROW_FIELD) {
            Some(field) => parse_coordinate(&field.payload).ok_or_else(invalid)?,
            None => self.cursor.row,
        };
        let column = match record.field(COLUMN_FIELD) {
            Some(field) => parse_coordinate(&field.payload).ok_or_else(invalid)?,
            None => self.cursor.column,
        };
        self.cursor = Cursor { row, column };

        let value = match record.field(VALUE_FIELD) {
            Some(field) => Some(classify(&field.payload)),
            // a formula without a cached value
            None if record.has_field(EXPRESSION_FIELD) => Some(CellValue::Empty),
            None => None,
        };

        if let Some(value) = value {
            if let Some(previous) = self.sheet.grid.set(row, column, value) {
                tracing::trace!(line = line_number, row, column, ?previous, "cell overwritten");
            }
        }
        Ok(())
    }

    fn apply_bounds(&mut self, record: &RawRecord) {
        let rows = record.field(ROW_FIELD).and_then(|f| parse_coordinate(&f.payload));
        let columns = record.field(COLUMN_FIELD).and_then(|f| parse_coordinate(&f.payload));
        if let (Some(rows), Some(columns)) = (rows, columns) {
            self.sheet.declared_bounds = Some((rows, columns));
        }
    }
}

/// Type a value payload. Quoted payloads are always text.
pub fn classify(payload: &Payload) -> CellValue {
    match payload {
        Payload::Quoted(text) => CellValue::Text(text.clone()),
        Payload::Bare(raw) => CellValue::from_bare(raw),
    }
}

/// Parse a positive integer coordinate. Leading zeros are accepted, a sign
/// is not.
fn parse_coordinate(payload: &Payload) -> Option<u32> {
    match payload {
        Payload::Bare(raw) => atoi_simd::parse::<u32, true, false>(raw.as_bytes())
            .ok()
            .filter(|&value| value >= 1),
        Payload::Quoted(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;
    use proptest::prelude::*;

    fn run(lines: &[&str]) -> Result<SylkSheet, ParseError> {
        let mut interpreter = Interpreter::new();
        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            if let Some(record) = tokenize(line_number, line)? {
                if interpreter.apply(line_number, line, &record)? == Flow::Stop {
                    break;
                }
            }
        }
        Ok(interpreter.finish())
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_quoted_keyword_stays_text() {
        let sheet = run(&["ID;PSylk", "C;X1;Y1;K\"TRUE\"", "C;X2;KFALSE"]).unwrap();
        assert_eq!(sheet.grid.get(1, 1), Some(&text("TRUE")));
        assert_eq!(sheet.grid.get(1, 2), Some(&CellValue::Bool(false)));
        assert_eq!(sheet.grid.bounds(), (1, 2));
    }

    #[test]
    fn test_row_and_column_are_inherited() {
        let sheet = run(&["C;Y2;X3;K1", "C;K2", "C;Y5;K3", "C;X1;K4"]).unwrap();
        assert_eq!(sheet.grid.get(2, 3), Some(&CellValue::Number(2.0)));
        assert_eq!(sheet.grid.get(5, 3), Some(&CellValue::Number(3.0)));
        assert_eq!(sheet.grid.get(5, 1), Some(&CellValue::Number(4.0)));
        assert_eq!(sheet.grid.len(), 3);
    }

    #[test]
    fn test_cursor_starts_at_origin() {
        let sheet = run(&["C;K\"first\""]).unwrap();
        assert_eq!(sheet.grid.get(1, 1), Some(&text("first")));
    }

    #[test]
    fn test_last_writer_wins() {
        let sheet = run(&["C;Y2;X2;K1", "C;Y2;X2;K\"two\""]).unwrap();
        assert_eq!(sheet.grid.get(2, 2), Some(&text("two")));
        assert_eq!(sheet.grid.len(), 1);
    }

    #[test]
    fn test_formula_uses_cached_value() {
        let sheet = run(&["C;Y1;X1;K3;ESUM(1,2)", "C;Y1;X2;E1/0", "C;Y1;X3;K#DIV/0!;E1/0"]).unwrap();
        assert_eq!(sheet.grid.get(1, 1), Some(&CellValue::Number(3.0)));
        assert_eq!(sheet.grid.get(1, 2), Some(&CellValue::Empty));
        assert_eq!(sheet.grid.get(1, 3), Some(&CellValue::Error("#DIV/0!".to_string())));
    }

    #[test]
    fn test_blank_value_vs_no_value() {
        let sheet = run(&["C;Y1;X1;K", "C;Y3;X4"]).unwrap();
        assert_eq!(sheet.grid.get(1, 1), Some(&CellValue::Empty));
        assert_eq!(sheet.grid.get(3, 4), None);
        assert_eq!(sheet.grid.bounds(), (1, 1));
    }

    #[test]
    fn test_non_cell_records_are_ignored() {
        let sheet = run(&[
            "ID;PWXL;N;E",
            "P;PGeneral",
            "F;P0;DG0G8;M255",
            "B;Y3;X2;D0 0 2 1",
            "O;L;D;V0;K47;G100 0.001",
            "W;N1;A0 0",
            "QQ;foo",
            "C;Y1;X1;K1",
        ])
        .unwrap();
        assert_eq!(sheet.grid.len(), 1);
        assert_eq!(sheet.declared_bounds, Some((3, 2)));
        assert_eq!(sheet.record_count, 8);
    }

    #[test]
    fn test_end_record_stops() {
        let sheet = run(&["C;Y1;X1;K1", "E", "C;Y9;X9;K9"]).unwrap();
        assert!(sheet.saw_end_record);
        assert_eq!(sheet.grid.bounds(), (1, 1));
    }

    #[test]
    fn test_invalid_coordinates() {
        for bad in ["C;Y0;X1;K1", "C;Y1;X-2;K1", "C;Y1.5;K1", "C;X;K1", "C;Yabc", "C;Y99999999999"] {
            let err = run(&["ID;P", bad]).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidCoordinate, "{bad}");
            assert_eq!(err.line, 2);
            assert_eq!(err.text, bad);
        }
    }

    #[test]
    fn test_coordinate_sign_and_leading_zeros() {
        let err = run(&["C;Y+3;X1;K1"]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCoordinate);

        let sheet = run(&["C;Y007;X01;K1"]).unwrap();
        assert_eq!(sheet.grid.get(7, 1), Some(&CellValue::Number(1.0)));

        let err = run(&["C;Y000;X1;K1"]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCoordinate);
    }

    #[test]
    fn test_failed_record_does_not_move_cursor() {
        let mut interpreter = Interpreter::new();
        let good = tokenize(1, "C;Y4;X5;K1").unwrap().unwrap();
        interpreter.apply(1, "C;Y4;X5;K1", &good).unwrap();
        let bad = tokenize(2, "C;Y7;X0;K1").unwrap().unwrap();
        assert!(interpreter.apply(2, "C;Y7;X0;K1", &bad).is_err());
        assert_eq!(interpreter.cursor(), Cursor { row: 4, column: 5 });
    }

    proptest! {
        #[test]
        fn prop_omitted_column_inherits_previous(
            first_column in 1u32..500,
            rows in prop::collection::vec(1u32..500, 1..20)
        ) {
            let mut lines = vec![format!("C;Y1;X{first_column};K0")];
            lines.extend(rows.iter().map(|row| format!("C;Y{row};K1")));

            let mut interpreter = Interpreter::new();
            for (index, line) in lines.iter().enumerate() {
                let record = tokenize(index + 1, line).unwrap().unwrap();
                interpreter.apply(index + 1, line, &record).unwrap();
                prop_assert_eq!(interpreter.cursor().column, first_column);
            }
            for row in rows {
                prop_assert!(interpreter.grid().get(row, first_column).is_some());
            }
        }
    }
}

//! Common types for spreadsheet operations.

use super::lexical;

/// Result type for spreadsheet operations.
pub type Result<T> = crate::common::Result<T>;

/// Types of data that can be stored in a cell.
///
/// Formulas are never stored: a formula cell carries the value it last
/// evaluated to, or [`CellValue::Empty`] when none was recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// Numeric value (integers and decimals alike)
    Number(f64),
    /// String value
    Text(String),
    /// Error literal such as `#VALUE!`
    Error(String),
}

impl CellValue {
    /// Classify an unquoted payload.
    ///
    /// Numbers win over keywords, keywords over text. An empty payload is an
    /// explicitly blank cell. Numeric spellings that overflow `f64` are kept
    /// as text rather than turned into infinities.
    pub fn from_bare(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        if let Some(number) = lexical::parse_number(raw) {
            return CellValue::Number(number);
        }
        if let Some(flag) = lexical::bool_keyword(raw) {
            return CellValue::Bool(flag);
        }
        if lexical::is_error_keyword(raw) {
            return CellValue::Error(raw.to_string());
        }
        CellValue::Text(raw.to_string())
    }
}

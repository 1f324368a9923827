//! Format-specific implementations for text workbooks.

pub mod delimited;
pub mod sylk;

// Re-export common types and functions
pub use delimited::{CsvConfig, LineTerminator, format_number, grid_to_csv_string, write_csv};
pub use sylk::{ParseError, ParseErrorKind, SylkConfig, SylkSheet, parse_sylk_bytes, read_sylk};

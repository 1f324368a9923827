//! slk2csv - A Rust library for converting SYLK spreadsheets to CSV
//!
//! This library reads SYLK (Symbolic Link) interchange files, the plain text
//! spreadsheet format written by Multiplan, Excel, and many game and data
//! tools, and writes their cell contents as delimited text.
//!
//! # Features
//!
//! - **SYLK reader**: cursor-aware cell records, quoted and bare values,
//!   cached formula results, declared bounds
//! - **CSV writer**: minimal, unambiguous quoting with canonical numbers
//! - **CSV reader**: read delimited text back into the same grid model
//! - **Encodings**: UTF-8, UTF-16 with BOM, and Windows code pages (`encoding` feature)
//! - **Batch conversion**: convert many files across threads (`parallel` feature)
//! - **Precise errors**: every failure carries its line number and line text
//!
//! # Example - Converting a file
//!
//! ```no_run
//! use std::fs::File;
//! use slk2csv::{CsvConfig, SylkConfig, sylk_to_csv};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut input = File::open("UnitData.slk")?;
//! let mut output = File::create("UnitData.csv")?;
//! sylk_to_csv(&mut input, &mut output, &SylkConfig::default(), &CsvConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the grid
//!
//! ```
//! use slk2csv::{CellValue, SylkConfig, parse_sylk_bytes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let slk = b"ID;PWXL;N;E\nC;Y1;X1;K\"TRUE\"\nC;X2;KFALSE\nE\n";
//! let sheet = parse_sylk_bytes(slk, &SylkConfig::default())?;
//!
//! assert_eq!(sheet.grid.get(1, 1), Some(&CellValue::Text("TRUE".into())));
//! assert_eq!(sheet.grid.get(1, 2), Some(&CellValue::Bool(false)));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Handling errors
//!
//! ```
//! use slk2csv::{CsvConfig, ParseErrorKind, SylkConfig, convert_bytes};
//!
//! let err = convert_bytes(b"ID;P\nXYZ;foo\n", &SylkConfig::default(), &CsvConfig::default())
//!     .unwrap_err();
//! let parse = err.as_parse_error().unwrap();
//! assert_eq!(parse.kind, ParseErrorKind::MalformedRecord);
//! assert_eq!(parse.line, 2);
//! ```

/// Error types, BOM handling, and text decoding shared by all formats
pub mod common;

/// Sheet model (grid and cell values) and the SYLK / CSV text formats
pub mod sheet;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use sheet::text::formats::sylk::{ParseError, ParseErrorKind};
pub use sheet::text::{
    BatchOutcome, CsvConfig, LineTerminator, SylkConfig, SylkSheet, convert_batch, convert_bytes,
    parse_sylk_bytes, parse_sylk_str, read_csv_grid, read_sylk, sylk_to_csv, write_csv,
};
pub use sheet::{CellValue, Grid};

//! Text-based spreadsheet format support (SYLK in, CSV out).
//!
//! This module reads SYLK interchange files into a sparse [`Grid`] and writes
//! grids back out as delimited text.
//!
//! # Features
//!
//! - **Cursor-aware SYLK reading**: cell records that omit their row or
//!   column inherit it from the previous record
//! - **Typed values**: numbers, booleans, error literals, and text are told
//!   apart the same way spreadsheet applications do
//! - **Unambiguous CSV**: text that would read back as another type is quoted
//! - **All-or-nothing**: the first bad record aborts the file with its line
//!   number; no partial CSV is produced
//! - **Batch conversion**: independent files convert in parallel
//!
//! # Example
//!
//! ```rust
//! use slk2csv::sheet::text::{CsvConfig, SylkConfig, convert_bytes};
//!
//! let slk = b"ID;PWXL;N;E\nC;Y1;X1;K\"name\"\nC;X2;K42\nE\n";
//! let csv = convert_bytes(slk, &SylkConfig::default(), &CsvConfig::default())?;
//! assert_eq!(csv, b"name,42\n");
//! # Ok::<(), slk2csv::Error>(())
//! ```
//!
//! [`Grid`]: crate::sheet::Grid

pub mod batch;
pub mod convert;
pub mod formats;
pub mod parser;

pub use batch::{BatchOutcome, convert_batch};
pub use convert::{convert_bytes, sylk_to_csv};
pub use formats::delimited::{CsvConfig, LineTerminator, write_csv};
pub use formats::sylk::{SylkConfig, SylkSheet, parse_sylk_bytes, parse_sylk_str, read_sylk};
pub use parser::{TextParser, read_csv_grid};

#[cfg(test)]
mod tests;

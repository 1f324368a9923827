//! Spreadsheet model and text format conversion.
//!
//! This module holds the in-memory sheet model shared by every reader and
//! writer, plus the SYLK and CSV text formats built on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use slk2csv::sheet::{CellValue, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set(2, 3, CellValue::Number(1.5));
//!
//! assert_eq!(grid.bounds(), (2, 3));
//! assert_eq!(grid.get(1, 1), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`Grid`]: sparse cell storage addressed by 1-based `(row, column)`
//! - [`CellValue`]: the typed content of one cell
//! - [`text`]: SYLK reading, CSV reading and writing, and conversion between them

// Submodule declarations
pub mod grid;
pub mod lexical;
pub mod text;
pub mod types;

// Re-exports
pub use grid::Grid;
pub use types::{CellValue, Result};

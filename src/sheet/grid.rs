//! Sparse cell grid with incrementally tracked bounds.
//!
//! Coordinates are 1-based `(row, column)` pairs, the same convention SYLK
//! and spreadsheet applications use. A key that was never written is an
//! empty cell; an explicit [`CellValue::Empty`] is also empty but still
//! counts towards the bounds.

use super::types::CellValue;
use std::collections::BTreeMap;

/// Sparse `(row, column)` → value map.
///
/// Entries are kept in row-major order, so iteration visits cells in the
/// order a CSV writer emits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: BTreeMap<(u32, u32), CellValue>,
    max_row: u32,
    max_column: u32,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `(row, column)`, returning the value it replaced.
    ///
    /// Both coordinates are 1-based.
    pub fn set(&mut self, row: u32, column: u32, value: CellValue) -> Option<CellValue> {
        debug_assert!(row >= 1 && column >= 1, "grid coordinates are 1-based");
        self.max_row = self.max_row.max(row);
        self.max_column = self.max_column.max(column);
        self.cells.insert((row, column), value)
    }

    /// Value stored at `(row, column)`, if any.
    pub fn get(&self, row: u32, column: u32) -> Option<&CellValue> {
        self.cells.get(&(row, column))
    }

    /// `(max_row, max_column)` over every stored key, `(0, 0)` when empty.
    #[inline]
    pub fn bounds(&self) -> (u32, u32) {
        (self.max_row, self.max_column)
    }

    /// Number of stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u32), &CellValue)> + '_ {
        self.cells.iter().map(|(&key, value)| (key, value))
    }
}

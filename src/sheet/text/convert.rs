//! SYLK → CSV conversion.
//!
//! The whole input is parsed before any output is produced, so a failing
//! record never leaves a truncated CSV behind in the writer.

use super::formats::delimited::{CsvConfig, write_csv};
use super::formats::sylk::{SylkConfig, parse_sylk_bytes, read_sylk};
use crate::sheet::Result as SheetResult;
use std::io::{Read, Write};

/// Read SYLK from `reader` and write CSV to `writer`.
pub fn sylk_to_csv<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    sylk: &SylkConfig,
    csv: &CsvConfig,
) -> SheetResult<()> {
    let sheet = read_sylk(reader, sylk)?;
    let mut out = Vec::new();
    write_csv(&sheet.grid, &mut out, csv)?;
    writer.write_all(&out)?;
    writer.flush()?;
    Ok(())
}

/// Convert SYLK bytes held in memory into CSV bytes.
pub fn convert_bytes(input: &[u8], sylk: &SylkConfig, csv: &CsvConfig) -> SheetResult<Vec<u8>> {
    let sheet = parse_sylk_bytes(input, sylk)?;
    let mut out = Vec::new();
    write_csv(&sheet.grid, &mut out, csv)?;
    Ok(out)
}

//! End-to-end tests for SYLK → CSV conversion

use super::*;
use crate::sheet::text::formats::sylk::ParseErrorKind;
use crate::sheet::{CellValue, Grid};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn convert(input: &str) -> crate::Result<String> {
    init_tracing();
    let out = convert_bytes(input.as_bytes(), &SylkConfig::default(), &CsvConfig::default())?;
    Ok(String::from_utf8(out).unwrap())
}

fn csv_fixed_point(csv: &[u8]) -> Vec<u8> {
    let grid = read_csv_grid(csv, &CsvConfig::default()).unwrap();
    let mut out = Vec::new();
    write_csv(&grid, &mut out, &CsvConfig::default()).unwrap();
    out
}

#[test]
fn test_quoted_keyword_versus_bare_keyword() {
    let csv = convert("ID;PSylk\nC;X1;Y1;K\"TRUE\"\nC;X2;KFALSE\n").unwrap();
    assert_eq!(csv, "\"TRUE\",FALSE\n");
}

#[test]
fn test_later_record_wins() {
    let csv = convert("ID;PWXL\nC;Y2;X2;K1\nC;Y1;X1;K\"a\"\nC;Y2;X2;K\"b\"\n").unwrap();
    assert_eq!(csv, "a,\n,b\n");
}

#[test]
fn test_unknown_tag_aborts_without_output() {
    let err = convert("ID;PWXL\nC;Y1;X1;K1\nXYZ;foo\n").unwrap_err();
    let parse = err.as_parse_error().unwrap();
    assert_eq!(parse.kind, ParseErrorKind::MalformedRecord);
    assert_eq!(parse.line, 3);
    assert_eq!(parse.text, "XYZ;foo");
}

#[test]
fn test_backslash_comma_and_quote_survive() {
    let csv = convert("C;Y1;X1;K\"C:\\data, \"\"quoted\"\"\"\n").unwrap();
    assert_eq!(csv, "\"C:\\data, \"\"quoted\"\"\"\n");

    let grid = read_csv_grid(csv.as_bytes(), &CsvConfig::default()).unwrap();
    assert_eq!(
        grid.get(1, 1),
        Some(&CellValue::Text("C:\\data, \"quoted\"".to_string()))
    );
}

#[test]
fn test_object_data_table() {
    let slk = "ID;PWXL;N;E\n\
               B;X3;Y3;D0\n\
               C;X1;Y1;K\"unitID\"\n\
               C;X2;K\"sort\"\n\
               C;X3;K\"comment(s)\"\n\
               C;X1;Y2;K\"hfoo\"\n\
               C;X2;K\"h2\"\n\
               C;X3;K\"Footman\"\n\
               C;X1;Y3;K\"hkni\"\n\
               C;X2;KTRUE\n\
               C;X3;K#VALUE!\n\
               E\n";
    let csv = convert(slk).unwrap();
    assert_eq!(csv, "unitID,sort,comment(s)\nhfoo,h2,Footman\nhkni,TRUE,#VALUE!\n");
}

#[test]
fn test_numbers_are_canonical() {
    let csv = convert("C;Y1;X1;K1.50\nC;X2;K-0\nC;X3;K1E3\nC;X4;K0.000000125\nC;X5;K\"1.50\"\n").unwrap();
    assert_eq!(csv, "1.5,0,1000,1.25e-7,\"1.50\"\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(convert("").unwrap(), "");
    assert_eq!(convert("ID;PWXL;N;E\nE\n").unwrap(), "");
}

#[test]
fn test_csv_round_trip_is_fixed_point() {
    let csv = convert("C;Y1;X1;K\"TRUE\"\nC;X2;KFALSE\nC;Y3;X1;K\"a\nb\"\n");
    // A SYLK line cannot hold a raw newline, so the quote never closes.
    assert_eq!(
        csv.unwrap_err().as_parse_error().unwrap().kind,
        ParseErrorKind::UnterminatedString
    );

    let first = csv_fixed_point(b"\"TRUE\",FALSE\nx,\"a\nb\",\n,\n");
    assert_eq!(first, b"\"TRUE\",\"FALSE\",\nx,\"a\nb\",\n,,\n");
    assert_eq!(csv_fixed_point(&first), first);
}

fn sylk_quote(text: &str) -> String {
    text.replace('"', "\"\"").replace(';', ";;")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_csv_grid_csv_is_idempotent(
        rows in prop::collection::vec(
            prop::collection::vec(r#"[a-zA-Z0-9 ,"\\;#!.\-]{0,8}"#, 1..5),
            1..6,
        )
    ) {
        let mut grid = Grid::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let cell = if value.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(value.clone())
                };
                grid.set(r as u32 + 1, c as u32 + 1, cell);
            }
        }
        let mut once = Vec::new();
        write_csv(&grid, &mut once, &CsvConfig::default()).unwrap();
        let twice = csv_fixed_point(&once);
        prop_assert_eq!(&csv_fixed_point(&twice), &twice);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_quoted_text_survives_pipeline(text in "[^\r\n\u{feff}]{1,24}") {
        let slk = format!("ID;PWXL\nC;Y1;X1;K\"{}\"\n", sylk_quote(&text));
        let sheet = parse_sylk_str(&slk).unwrap();
        prop_assert_eq!(sheet.grid.get(1, 1), Some(&CellValue::Text(text.clone())));

        let mut csv = Vec::new();
        write_csv(&sheet.grid, &mut csv, &CsvConfig::default()).unwrap();
        let grid = read_csv_grid(&csv, &CsvConfig::default()).unwrap();
        prop_assert_eq!(grid.get(1, 1), Some(&CellValue::Text(text)));
    }

    #[test]
    fn prop_coordinates_inherit_across_records(
        cells in prop::collection::vec((prop::option::of(1u32..40), prop::option::of(1u32..40)), 2..30)
    ) {
        let mut slk = String::from("ID;PWXL\n");
        let (mut row, mut column) = (1u32, 1u32);
        let mut expected = std::collections::BTreeMap::new();
        for (index, (y, x)) in cells.iter().enumerate() {
            slk.push('C');
            if let Some(y) = y {
                slk.push_str(&format!(";Y{y}"));
                row = *y;
            }
            if let Some(x) = x {
                slk.push_str(&format!(";X{x}"));
                column = *x;
            }
            slk.push_str(&format!(";K{index}\n"));
            expected.insert((row, column), index as f64);
        }

        let sheet = parse_sylk_str(&slk).unwrap();
        prop_assert_eq!(sheet.grid.len(), expected.len());
        for ((row, column), value) in expected {
            prop_assert_eq!(sheet.grid.get(row, column), Some(&CellValue::Number(value)));
        }
    }
}

//! Lexical rules shared by the SYLK reader and the CSV writer.
//!
//! The reader uses them to type unquoted values; the writer uses the same
//! rules to decide when text must be quoted so that it cannot be mistaken
//! for a number, boolean, or error when read back.

use phf::{Map, Set, phf_map, phf_set};

static BOOL_KEYWORDS: Map<&'static str, bool> = phf_map! {
    "TRUE" => true,
    "FALSE" => false,
};

static ERROR_KEYWORDS: Set<&'static str> = phf_set! {
    "#VALUE!",
    "#N/A",
    "#DIV/0!",
    "#REF!",
    "#NAME?",
    "#NUM!",
    "#NULL!",
};

/// Boolean value of a bare keyword (`TRUE`/`FALSE`, case-sensitive).
#[inline]
pub fn bool_keyword(raw: &str) -> Option<bool> {
    BOOL_KEYWORDS.get(raw).copied()
}

/// Whether `raw` is one of the spreadsheet error literals.
#[inline]
pub fn is_error_keyword(raw: &str) -> bool {
    ERROR_KEYWORDS.contains(raw)
}

/// Whether `raw` is a boolean or error keyword.
#[inline]
pub fn is_reserved_keyword(raw: &str) -> bool {
    BOOL_KEYWORDS.contains_key(raw) || ERROR_KEYWORDS.contains(raw)
}

/// Match the numeric grammar:
/// `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
pub fn is_numeric_literal(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

/// Parse `raw` if it matches the numeric grammar and is finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    if !is_numeric_literal(raw) {
        return None;
    }
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    fast_float2::parse::<f64, _>(unsigned)
        .ok()
        .filter(|value| value.is_finite())
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

//! Character encoding utilities for SYLK input.
//!
//! SYLK files written by spreadsheet applications are usually in the
//! platform's ANSI code page rather than UTF-8, and some tools emit UTF-16
//! with a BOM. This module turns raw input bytes into text, borrowing
//! whenever the input is already valid UTF-8.

use crate::common::bom::BomKind;
use crate::common::{Error, Result};
use std::borrow::Cow;

#[cfg(feature = "encoding")]
use encoding_rs::Encoding;

/// Map Windows codepage identifier to encoding_rs Encoding.
///
/// Only the code pages that spreadsheet exports are realistically written in
/// are covered.
///
/// # Examples
/// ```
/// use slk2csv::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(1252).unwrap();
/// assert_eq!(encoding.name(), "windows-1252");
/// ```
#[cfg(feature = "encoding")]
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // Windows codepages (Western scripts)
        874 => Some(encoding_rs::WINDOWS_874),   // Thai
        1250 => Some(encoding_rs::WINDOWS_1250), // Central European
        1251 => Some(encoding_rs::WINDOWS_1251), // Cyrillic
        1252 => Some(encoding_rs::WINDOWS_1252), // Western European (most common, default ANSI)
        1253 => Some(encoding_rs::WINDOWS_1253), // Greek
        1254 => Some(encoding_rs::WINDOWS_1254), // Turkish
        1255 => Some(encoding_rs::WINDOWS_1255), // Hebrew
        1256 => Some(encoding_rs::WINDOWS_1256), // Arabic
        1257 => Some(encoding_rs::WINDOWS_1257), // Baltic
        1258 => Some(encoding_rs::WINDOWS_1258), // Vietnamese

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS), // Japanese Shift-JIS
        936 => Some(encoding_rs::GBK),       // Simplified Chinese (GB2312/GBK)
        949 => Some(encoding_rs::EUC_KR),    // Korean
        950 => Some(encoding_rs::BIG5),      // Traditional Chinese (Big5)

        // ISO 8859 series
        28591 => Some(encoding_rs::WINDOWS_1252), // ISO-8859-1 approximation
        28592 => Some(encoding_rs::ISO_8859_2),   // Latin 2 (Central European)
        28605 => Some(encoding_rs::ISO_8859_15),  // Latin 9 (Western European with Euro)

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH), // Macintosh Roman

        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

/// Resolve an encoding from a WHATWG label (`"windows-1252"`, `"latin1"`)
/// or a Windows code page number (`"1252"`, `"cp1252"`).
#[cfg(feature = "encoding")]
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let trimmed = label.trim();
    let digits = trimmed
        .strip_prefix("cp")
        .or_else(|| trimmed.strip_prefix("CP"))
        .unwrap_or(trimmed);
    if let Ok(codepage) = atoi_simd::parse::<u32, true, false>(digits.as_bytes()) {
        return codepage_to_encoding(codepage);
    }
    Encoding::for_label(trimmed.as_bytes())
}

/// Decode input bytes (with any BOM already removed) into text.
///
/// A UTF-16 BOM takes precedence over `label`. Without either, the bytes
/// must be valid UTF-8. Decoding never substitutes replacement characters:
/// malformed input is an [`Error::Encoding`].
pub fn decode_text<'a>(
    bytes: &'a [u8],
    bom: Option<BomKind>,
    label: Option<&str>,
) -> Result<Cow<'a, str>> {
    match (bom, label) {
        (Some(BomKind::Utf16Le), _) => decode_with(bytes, Some("utf-16le")),
        (Some(BomKind::Utf16Be), _) => decode_with(bytes, Some("utf-16be")),
        (_, Some(label)) => decode_with(bytes, Some(label)),
        _ => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
    }
}

#[cfg(feature = "encoding")]
fn decode_with<'a>(bytes: &'a [u8], label: Option<&str>) -> Result<Cow<'a, str>> {
    let Some(label) = label else {
        return Ok(Cow::Borrowed(std::str::from_utf8(bytes)?));
    };
    let encoding = encoding_for_label(label)
        .ok_or_else(|| Error::Encoding(format!("unknown encoding label '{label}'")))?;
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| Error::Encoding(format!("input is not valid {}", encoding.name())))
}

#[cfg(not(feature = "encoding"))]
fn decode_with<'a>(bytes: &'a [u8], label: Option<&str>) -> Result<Cow<'a, str>> {
    match label {
        None => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
        Some(_) => Err(Error::FeatureDisabled("encoding".to_string())),
    }
}

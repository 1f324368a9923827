//! Input normalization ahead of tokenization.
//!
//! Turns raw bytes into numbered logical lines: a leading BOM is removed,
//! the text is decoded, and each line loses its `\n` / `\r\n` terminator.
//! Line content is otherwise untouched; backslashes in particular reach the
//! tokenizer verbatim because nothing downstream unescapes them.

use super::SylkConfig;
use crate::common::bom::strip_bom;
use crate::common::encoding::decode_text;
use crate::common::Result;
use memchr::memchr;
use std::borrow::Cow;

/// Decode raw SYLK bytes into text according to `config`.
pub fn decode_input<'a>(bytes: &'a [u8], config: &SylkConfig) -> Result<Cow<'a, str>> {
    let (body, bom) = if config.strip_bom {
        strip_bom(bytes)
    } else {
        (bytes, None)
    };
    decode_text(body, bom, config.encoding.as_deref())
}

/// Split `text` into `(line_number, line)` pairs, numbering from 1.
pub fn lines(text: &str) -> Lines<'_> {
    Lines {
        rest: Some(text),
        line_number: 0,
    }
}

/// Iterator returned by [`lines`].
///
/// A trailing terminator does not produce an extra empty line.
pub struct Lines<'a> {
    rest: Option<&'a str>,
    line_number: usize,
}

impl<'a> Lines<'a> {
    /// Number of the last line yielded (0 before the first).
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        if rest.is_empty() {
            self.rest = None;
            return None;
        }

        let (line, remainder) = match memchr(b'\n', rest.as_bytes()) {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };
        self.rest = remainder;
        self.line_number += 1;

        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((self.line_number, line))
    }
}

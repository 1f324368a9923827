//! Record tokenizer.
//!
//! A SYLK record is a tag followed by `;`-separated fields, each starting
//! with a one-letter code:
//!
//! ```text
//! C;Y3;X2;K"Total"
//! ^ ^  ^  ^-- value field, quoted string payload
//! | |  +----- column
//! | +-------- row
//! +---------- tag (cell definition)
//! ```
//!
//! Inside a payload `;;` stands for a literal semicolon. Only the value
//! field (`K`) may carry a quoted string; everything else, formulas
//! included, is kept as raw text.

use super::error::{ParseError, ParseErrorKind};
use memchr::{memchr, memchr2};
use phf::{Map, phf_map};
use smallvec::SmallVec;

/// Field code of the value field.
pub const VALUE_FIELD: char = 'K';

/// Kind of record, taken from the tag before the first `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTag {
    /// `ID`: file identifier and producing program
    Id,
    /// `C`: cell definition
    Cell,
    /// `F`: formatting
    Format,
    /// `B`: declared sheet bounds
    Bounds,
    /// `P`: number format / font table entry
    Picture,
    /// `O`: sheet options
    Options,
    /// `W`: window layout
    Window,
    /// `NN`: named range
    NameDefinition,
    /// `NE`: external link
    ExternalLink,
    /// `NU`: file name substitution
    NameUpdate,
    /// `E`: end of file
    End,
    /// A well-formed tag this reader does not know
    Other(String),
}

static KNOWN_TAGS: Map<&'static str, RecordTag> = phf_map! {
    "ID" => RecordTag::Id,
    "C" => RecordTag::Cell,
    "F" => RecordTag::Format,
    "B" => RecordTag::Bounds,
    "P" => RecordTag::Picture,
    "O" => RecordTag::Options,
    "W" => RecordTag::Window,
    "NN" => RecordTag::NameDefinition,
    "NE" => RecordTag::ExternalLink,
    "NU" => RecordTag::NameUpdate,
    "E" => RecordTag::End,
};

impl RecordTag {
    /// Parse a tag. Tags are one or two ASCII uppercase letters.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(tag) = KNOWN_TAGS.get(raw) {
            return Some(tag.clone());
        }
        let well_formed = (1..=2).contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_uppercase());
        well_formed.then(|| RecordTag::Other(raw.to_string()))
    }
}

/// Field payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw text, with `;;` already collapsed
    Bare(String),
    /// Quoted string from a value field, quotes removed and unescaped
    Quoted(String),
}

/// One coded field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub code: char,
    pub payload: Payload,
}

/// One tokenized record.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub tag: RecordTag,
    pub fields: SmallVec<[Field; 6]>,
}

impl RawRecord {
    /// Last field with the given code. SYLK writers never repeat a code
    /// within one record; when a hand-edited file does, the later one wins.
    pub fn field(&self, code: char) -> Option<&Field> {
        self.fields.iter().rev().find(|field| field.code == code)
    }

    pub fn has_field(&self, code: char) -> bool {
        self.fields.iter().any(|field| field.code == code)
    }
}

/// Tokenize one line. Blank lines yield `Ok(None)`.
pub fn tokenize(line_number: usize, line: &str) -> Result<Option<RawRecord>, ParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || ParseError::new(ParseErrorKind::MalformedRecord, line_number, line);
    let bytes = line.as_bytes();

    let tag_end = memchr(b';', bytes).unwrap_or(bytes.len());
    let tag = RecordTag::parse(&line[..tag_end]).ok_or_else(malformed)?;

    let mut fields = SmallVec::new();
    // `pos` always sits on a separator or at the end of the line.
    let mut pos = tag_end;
    while pos < bytes.len() {
        pos += 1;
        if pos == bytes.len() {
            break;
        }
        if bytes[pos] == b';' {
            // empty field
            continue;
        }

        let code = bytes[pos];
        if !code.is_ascii_alphabetic() {
            return Err(malformed());
        }
        let code = code as char;
        pos += 1;

        let (payload, end) = if code == VALUE_FIELD && bytes.get(pos) == Some(&b'"') {
            let (text, end) = scan_quoted(line, pos + 1)
                .map_err(|kind| ParseError::new(kind, line_number, line))?;
            (Payload::Quoted(text), end)
        } else {
            let (text, end) = scan_bare(line, pos);
            (Payload::Bare(text), end)
        };
        fields.push(Field { code, payload });
        pos = end;
    }

    Ok(Some(RawRecord { tag, fields }))
}

/// Read a raw payload starting at `start`. Returns the unescaped text and
/// the position of the terminating separator (or the line length).
fn scan_bare(line: &str, start: usize) -> (String, usize) {
    let bytes = line.as_bytes();
    let mut text = String::new();
    let mut pos = start;
    loop {
        match memchr(b';', &bytes[pos..]) {
            Some(offset) => {
                let sep = pos + offset;
                if bytes.get(sep + 1) == Some(&b';') {
                    text.push_str(&line[pos..=sep]);
                    pos = sep + 2;
                } else {
                    text.push_str(&line[pos..sep]);
                    return (text, sep);
                }
            },
            None => {
                text.push_str(&line[pos..]);
                return (text, bytes.len());
            },
        }
    }
}

/// Read a quoted payload whose opening quote sits just before `start`.
///
/// `""` is a literal quote and `;;` a literal semicolon. The closing quote
/// must end the field.
fn scan_quoted(line: &str, start: usize) -> Result<(String, usize), ParseErrorKind> {
    let bytes = line.as_bytes();
    let mut text = String::new();
    let mut pos = start;
    loop {
        let offset =
            memchr2(b'"', b';', &bytes[pos..]).ok_or(ParseErrorKind::UnterminatedString)?;
        let at = pos + offset;
        let doubled = bytes.get(at + 1) == Some(&bytes[at]);

        if doubled {
            text.push_str(&line[pos..=at]);
            pos = at + 2;
            continue;
        }
        if bytes[at] == b';' {
            return Err(ParseErrorKind::UnterminatedString);
        }

        text.push_str(&line[pos..at]);
        let end = at + 1;
        return match bytes.get(end) {
            None | Some(b';') => Ok((text, end)),
            Some(_) => Err(ParseErrorKind::MalformedRecord),
        };
    }
}

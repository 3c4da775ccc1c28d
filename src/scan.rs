//! Line scanner that pulls a named byte array back out of a generated header.
//!
//! The scanner is a three-state machine driven one line at a time:
//!
//! * `Searching` until a line contains `const uint8_t <name>[]`. Along the
//!   way a `#define <NAME>_LEN <n>` line is remembered.
//! * `InArray` until a line whose trimmed content is exactly `};`. Every
//!   comma-separated piece starting with `0x` becomes one byte.
//! * `Done`, after which the rest of the text is ignored.
//!
//! The declaration line itself is never scanned for entries.

use tracing::{debug, warn};

use crate::header::{array_declaration, len_macro_name, ARRAY_CLOSE};
use crate::GzHeaderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InArray,
    Done,
}

/// Bytes recovered from a header, plus what the scanner saw on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArray {
    pub bytes: Vec<u8>,
    /// Whether the array declaration was seen at all.
    pub found: bool,
    /// Value of the matching `#define <NAME>_LEN`, if present before the array.
    pub declared_len: Option<usize>,
}

impl ExtractedArray {
    /// True when a length macro was found and disagrees with the entry count.
    pub fn length_mismatch(&self) -> bool {
        matches!(self.declared_len, Some(n) if n != self.bytes.len())
    }
}

/// Parse one `0x..` token into a byte. `line` is 1-based, for diagnostics.
pub fn parse_hex_token(token: &str, line: usize) -> Result<u8, GzHeaderError> {
    let malformed = || GzHeaderError::MalformedToken {
        line,
        token: token.to_string(),
    };
    let digits = token
        .strip_prefix("0x")
        .filter(|d| !d.is_empty() && d.len() <= 2)
        .ok_or_else(malformed)?;
    // `hex` wants an even digit count.
    let padded = if digits.len() == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    hex::decode(padded)
        .ok()
        .and_then(|v| v.first().copied())
        .ok_or_else(malformed)
}

fn parse_define(line: &str, macro_name: &str) -> Option<usize> {
    let mut parts = line.split_whitespace();
    if parts.next()? != "#define" || parts.next()? != macro_name {
        return None;
    }
    parts.next()?.parse().ok()
}

/// Scan `text` for the array called `name`.
///
/// A missing declaration is not an error here: the result is empty with
/// `found == false`, and the caller decides what that means.
pub fn extract_array(text: &str, name: &str) -> Result<ExtractedArray, GzHeaderError> {
    let declaration = array_declaration(name);
    let macro_name = len_macro_name(name);
    let mut out = ExtractedArray::default();
    let mut state = ScanState::Searching;

    for (idx, line) in text.split('\n').enumerate() {
        match state {
            ScanState::Searching => {
                if line.contains(&declaration) {
                    debug!(line = idx + 1, "array declaration found");
                    out.found = true;
                    state = ScanState::InArray;
                } else if let Some(n) = parse_define(line, &macro_name) {
                    out.declared_len = Some(n);
                }
            }
            ScanState::InArray => {
                if line.trim() == ARRAY_CLOSE {
                    state = ScanState::Done;
                    continue;
                }
                for piece in line.split(',').map(str::trim) {
                    if piece.starts_with("0x") {
                        out.bytes.push(parse_hex_token(piece, idx + 1)?);
                    }
                }
            }
            ScanState::Done => break,
        }
    }

    if !out.found {
        warn!(array = name, "array declaration not found");
    } else if state != ScanState::Done {
        debug!(array = name, "array literal not closed before end of text");
    }
    Ok(out)
}

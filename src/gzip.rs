//! Gzip container handling.
//!
//! The encoder pins every header field that would otherwise vary between runs
//! (mtime, file name, comment) so the same input always yields the same bytes.

use std::io::{self, Read, Write};

use flate2::bufread::GzDecoder;
use flate2::{Compression, GzBuilder};
use tracing::debug;

use crate::GzHeaderError;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Gzip-compress `data` at `level` with a fixed container header.
pub fn compress(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::with_capacity(data.len() / 2 + 32), Compression::new(level));
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decode every member of a gzip stream and concatenate the output.
///
/// Zero bytes after a member are padding and skipped. Anything else left over
/// must start another member, otherwise the stream is rejected. Empty or
/// truncated input is an error.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, GzHeaderError> {
    if data.is_empty() {
        return Err(GzHeaderError::Decompress(
            "empty gzip stream, no header found".to_string(),
        ));
    }
    let mut out = Vec::new();
    let mut rest = data;
    let mut members = 0usize;
    loop {
        if !rest.starts_with(&GZIP_MAGIC) {
            let head = &rest[..rest.len().min(GZIP_MAGIC.len())];
            return Err(GzHeaderError::Decompress(format!(
                "not a gzipped file (0x{}) after {} member(s)",
                hex::encode_upper(head),
                members
            )));
        }
        // The bufread decoder stops right after the member trailer, so the
        // unread tail is handed back by `into_inner`.
        let mut decoder = GzDecoder::new(rest);
        decoder
            .read_to_end(&mut out)
            .map_err(|e| GzHeaderError::Decompress(e.to_string()))?;
        rest = decoder.into_inner();
        members += 1;

        let padding = rest.iter().take_while(|b| **b == 0).count();
        rest = &rest[padding..];
        if rest.is_empty() {
            break;
        }
    }
    debug!(members, bytes = out.len(), "decoded gzip stream");
    Ok(out)
}

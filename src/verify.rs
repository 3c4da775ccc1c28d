//! Checks that a generated header still decodes to an HTML page.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::gzip::decompress;
use crate::scan::extract_array;
use crate::{GzHeaderError, VerifyConfig};

/// Outcome of checking one header. `lines` holds the user-facing
/// diagnostics in the order they were produced.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub valid: bool,
    pub array_found: bool,
    pub compressed_bytes: usize,
    pub declared_len: Option<usize>,
    pub decompressed_bytes: Option<usize>,
    /// Whether `</html>` was present. Only set once HTML was recognised.
    pub html_complete: Option<bool>,
    pub lines: Vec<String>,
}

impl VerificationReport {
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn fail_decompress(mut self, err: impl std::fmt::Display) -> Self {
        self.lines
            .push(format!("✗ 解压失败 / Decompression failed: {err}"));
        self.valid = false;
        self
    }
}

fn looks_like_html(text: &str) -> bool {
    text.contains("<!DOCTYPE html>") || text.contains("<html")
}

/// Verify header `text` against the array named in `config`.
///
/// Only malformed hex entries are errors; every other problem ends up in
/// the report with `valid == false`.
pub fn verify_text(text: &str, config: &VerifyConfig) -> Result<VerificationReport, GzHeaderError> {
    let array = extract_array(text, &config.array_name)?;
    let mut report = VerificationReport {
        valid: false,
        array_found: array.found,
        compressed_bytes: array.bytes.len(),
        declared_len: array.declared_len,
        decompressed_bytes: None,
        html_complete: None,
        lines: Vec::new(),
    };
    report.lines.push(format!(
        "压缩数据大小 / Compressed data size: {} bytes",
        array.bytes.len()
    ));
    if array.length_mismatch() {
        let declared = array.declared_len.unwrap_or_default();
        warn!(declared, extracted = array.bytes.len(), "length macro disagrees with array");
        report.lines.push(format!(
            "声明长度不一致 / Declared length mismatch: {} declared, {} extracted",
            declared,
            array.bytes.len()
        ));
    }

    let raw = match decompress(&array.bytes) {
        Ok(raw) => raw,
        Err(GzHeaderError::Decompress(msg)) => return Ok(report.fail_decompress(msg)),
        Err(e) => return Ok(report.fail_decompress(e)),
    };
    report.decompressed_bytes = Some(raw.len());
    report
        .lines
        .push(format!("解压后大小 / Decompressed size: {} bytes", raw.len()));

    let html = match String::from_utf8(raw) {
        Ok(html) => html,
        Err(e) => return Ok(report.fail_decompress(e)),
    };

    if !looks_like_html(&html) {
        report
            .lines
            .push("✗ 解压后的数据不是有效的HTML / Decompressed data is not valid HTML".to_string());
        return Ok(report);
    }

    report
        .lines
        .push("✓ 解压成功，数据有效 / Decompression successful, data is valid".to_string());
    let complete = html.contains("</html>");
    report.html_complete = Some(complete);
    report.lines.push(if complete {
        "✓ HTML结构完整 / HTML structure is complete".to_string()
    } else {
        "✗ HTML结构不完整 / HTML structure is incomplete".to_string()
    });
    report.valid = true;
    debug!(valid = report.valid, "verification finished");
    Ok(report)
}

/// Read the header at `path` and verify it.
pub fn verify(path: &Path, config: &VerifyConfig) -> Result<VerificationReport, GzHeaderError> {
    let text = fs::read_to_string(path).map_err(|e| GzHeaderError::read(path, e))?;
    verify_text(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_bytes;
    use crate::EncodeConfig;

    fn header_for(payload: &[u8]) -> String {
        encode_bytes(payload, "t.h", &EncodeConfig::default()).unwrap().0
    }

    #[test]
    fn valid_page_passes() {
        let text = header_for(b"<!DOCTYPE html><html><body>Hi</body></html>");
        let report = verify_text(&text, &VerifyConfig::default()).unwrap();
        assert!(report.valid);
        assert_eq!(report.decompressed_bytes, Some(44));
        assert_eq!(report.html_complete, Some(true));
        assert!(report.lines.iter().any(|l| l.contains("HTML structure is complete")));
    }

    #[test]
    fn incomplete_page_still_valid() {
        let text = header_for(b"<html><body>no closing tag");
        let report = verify_text(&text, &VerifyConfig::default()).unwrap();
        assert!(report.valid);
        assert_eq!(report.html_complete, Some(false));
        assert!(report.lines.last().unwrap().contains("incomplete"));
    }

    #[test]
    fn plain_text_is_rejected() {
        let text = header_for(b"just some words, nothing else");
        let report = verify_text(&text, &VerifyConfig::default()).unwrap();
        assert!(!report.valid);
        assert!(report.decompressed_bytes.is_some());
        assert!(report.lines.last().unwrap().contains("not valid HTML"));
    }

    #[test]
    fn missing_array_fails_decompression() {
        let report = verify_text("int x = 0;\n", &VerifyConfig::default()).unwrap();
        assert!(!report.valid);
        assert!(!report.array_found);
        assert_eq!(report.compressed_bytes, 0);
        assert!(report.lines[1].starts_with("✗ 解压失败 / Decompression failed:"));
    }

    #[test]
    fn other_name_is_found_when_configured() {
        let config = EncodeConfig {
            var_name: "setup_page".into(),
            ..EncodeConfig::default()
        };
        let text = encode_bytes(b"<html></html>", "s.h", &config).unwrap().0;
        assert!(!verify_text(&text, &VerifyConfig::default()).unwrap().valid);
        assert!(verify_text(&text, &VerifyConfig::with_name("setup_page")).unwrap().valid);
    }

    #[test]
    fn non_utf8_payload_fails() {
        let text = header_for(&[0xFF, 0xFE, 0x3C, 0x68]);
        let report = verify_text(&text, &VerifyConfig::default()).unwrap();
        assert!(!report.valid);
        assert!(report.lines.last().unwrap().contains("Decompression failed"));
    }

    fn header_around(blob: &[u8]) -> String {
        let stats = crate::CompressionStats::new(blob.len(), blob.len());
        crate::render_header("raw.h", "index_ov2640_html_gz", blob, &stats, 12)
    }

    #[test]
    fn trailing_bytes_fail_decompression() {
        let mut blob = crate::gzip::compress(b"<!DOCTYPE html><html></html>", 9).unwrap();
        blob.extend_from_slice(b"GARBAGE");
        let report = verify_text(&header_around(&blob), &VerifyConfig::default()).unwrap();
        assert!(!report.valid);
        assert_eq!(report.decompressed_bytes, None);
        assert!(report.lines[1].contains("not a gzipped file"));
    }

    #[test]
    fn multi_member_payload_is_whole() {
        let mut blob = crate::gzip::compress(b"<html><body>", 9).unwrap();
        blob.extend(crate::gzip::compress(b"Hi</body></html>", 9).unwrap());
        let report = verify_text(&header_around(&blob), &VerifyConfig::default()).unwrap();
        assert!(report.valid);
        assert_eq!(report.decompressed_bytes, Some(28));
        assert_eq!(report.html_complete, Some(true));
    }
}

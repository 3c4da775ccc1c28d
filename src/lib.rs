//! Build-time helpers for embedding a gzip-compressed HTML page in firmware.
//!
//! [`encode()`] turns an HTML file into a C header holding a
//! `const uint8_t` array of the gzip stream; [`verify()`] reads such a header
//! back and checks the array still decompresses to an HTML page.

pub mod config;
pub mod encode;
pub mod error;
pub mod gzip;
pub mod header;
pub mod io_utils;
pub mod scan;
pub mod stats;
pub mod verify;

pub use config::{EncodeConfig, VerifyConfig, DEFAULT_ARRAY_NAME};
pub use encode::{encode, encode_bytes};
pub use error::GzHeaderError;
pub use header::render_header;
pub use scan::{extract_array, ExtractedArray};
pub use stats::CompressionStats;
pub use verify::{verify, verify_text, VerificationReport};

/// Install the stderr log subscriber used by the binaries.
///
/// Filtering follows `RUST_LOG`; without it only warnings are shown.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

use gzheader::{encode_bytes, verify_text, EncodeConfig, VerifyConfig};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let (text, stats) = match encode_bytes(data, "fuzz.h", &EncodeConfig::default()) {
                Ok(out) => out,
                Err(_) => return,
            };
            let report = verify_text(&text, &VerifyConfig::default()).unwrap();
            assert_eq!(report.compressed_bytes, stats.compressed_bytes);
            assert_eq!(report.decompressed_bytes, Some(data.len()));
        });
    }
}

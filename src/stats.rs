//! Size bookkeeping for one encoder run.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub original_bytes: usize,
    pub compressed_bytes: usize,
}

impl CompressionStats {
    pub fn new(original_bytes: usize, compressed_bytes: usize) -> Self {
        Self {
            original_bytes,
            compressed_bytes,
        }
    }

    /// `1 - compressed/original`. Zero for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        1.0 - self.compressed_bytes as f64 / self.original_bytes as f64
    }

    /// Ratio as a percentage with one decimal place.
    pub fn ratio_percent(&self) -> String {
        format!("{:.1}", self.ratio() * 100.0)
    }

    /// Bytes saved; negative when gzip overhead exceeds the gain.
    pub fn space_saved(&self) -> i64 {
        self.original_bytes as i64 - self.compressed_bytes as i64
    }

    pub fn report(&self) {
        println!("原始大小 / Original size: {} bytes", self.original_bytes);
        println!("压缩后大小 / Compressed size: {} bytes", self.compressed_bytes);
        println!("压缩率 / Compression ratio: {}%", self.ratio_percent());
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "original_bytes": self.original_bytes,
            "compressed_bytes": self.compressed_bytes,
            "ratio": self.ratio(),
            "space_saved": self.space_saved(),
        })
    }
}

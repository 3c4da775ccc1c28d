/// Array name the firmware sources expect.
pub const DEFAULT_ARRAY_NAME: &str = "index_ov2640_html_gz";

/// Strongest gzip setting.
pub const MAX_LEVEL: u32 = 9;

/// Hex entries per line of the generated array.
pub const BYTES_PER_LINE: usize = 12;

/// Parameters for rendering a header from an HTML asset.
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Identifier of the generated `const uint8_t` array. Not validated.
    pub var_name: String,
    /// Gzip compression level, 0..=9.
    pub level: u32,
    /// Number of `0xNN` entries per output line.
    pub bytes_per_line: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            var_name: DEFAULT_ARRAY_NAME.to_string(),
            level: MAX_LEVEL,
            bytes_per_line: BYTES_PER_LINE,
        }
    }
}

/// Parameters for checking a generated header.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Name of the array literal to look for.
    pub array_name: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

impl VerifyConfig {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            array_name: name.into(),
        }
    }
}

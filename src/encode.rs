use std::fs;
use std::path::Path;

use tracing::debug;

use crate::gzip::compress;
use crate::header::render_header;
use crate::{CompressionStats, EncodeConfig, GzHeaderError};

/// Render the header text for `data` without touching the filesystem.
pub fn encode_bytes(
    data: &[u8],
    file_name: &str,
    config: &EncodeConfig,
) -> Result<(String, CompressionStats), GzHeaderError> {
    let compressed = compress(data, config.level)?;
    let stats = CompressionStats::new(data.len(), compressed.len());
    debug!(
        original = stats.original_bytes,
        compressed = stats.compressed_bytes,
        level = config.level,
        "compressed asset"
    );
    let text = render_header(
        file_name,
        &config.var_name,
        &compressed,
        &stats,
        config.bytes_per_line,
    );
    Ok((text, stats))
}

/// Compress the HTML at `input` and write the generated header to `output`.
///
/// Prints the size report and a success line to stdout. An existing output
/// file is overwritten.
pub fn encode(
    input: &Path,
    output: &Path,
    config: &EncodeConfig,
) -> Result<CompressionStats, GzHeaderError> {
    if !input.exists() {
        return Err(GzHeaderError::InputNotFound(input.to_path_buf()));
    }
    let data = fs::read(input).map_err(|e| GzHeaderError::read(input, e))?;
    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (text, stats) = encode_bytes(&data, &file_name, config)?;
    stats.report();

    fs::write(output, text).map_err(|e| GzHeaderError::write(output, e))?;
    println!(
        "成功生成头文件 / Successfully generated header file: {}",
        output.display()
    );
    Ok(stats)
}

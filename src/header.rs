//! Rendering of the generated C header.
//!
//! Layout, top to bottom:
//!
//! 1. a `/* ... */` block with the file name, size statistics and a fixed
//!    bilingual description of the web UI the asset provides,
//! 2. `#define <NAME>_LEN <n>`,
//! 3. `const uint8_t <name>[] = { ... };` with `0xNN` entries, a fixed number
//!    per line, every entry followed by a comma.

use crate::CompressionStats;

/// Token that closes the array literal, alone on its line.
pub const ARRAY_CLOSE: &str = "};";

const CREATION_DATE: &str = "2026-01-30";

const FEATURE_NOTES: &[&str] = &[
    "1. 视频显示区域：显示实时视频流 / Video display area: displays real-time video stream",
    "2. 拍照控制区域：控制拍照功能 / Photo capture control area: controls photo capture function",
    "3. SD卡信息区域：显示SD卡存储信息（GB单位）/ SD card info area: displays SD card storage information (GB unit)",
    "4. 运行时长区域：显示系统运行时长（HH:MM:SS格式）/ Uptime area: displays system uptime (HH:MM:SS format)",
    "5. 摄像头设置区域：调节分辨率、图像质量、亮度、对比度、饱和度 / Camera settings area: adjusts resolution, quality, brightness, contrast, saturation",
    "6. 云台控制区域：控制舵机旋转 / Pan-tilt control area: controls servo rotation",
    "7. 语言选择功能：支持英语和中文切换，默认为英语 / Language selection: supports English and Chinese switching, default is English",
    "8. 主题选择功能：支持深色和浅色主题切换，默认为浅色 / Theme selection: supports dark and light theme switching, default is light",
];

/// Name of the length macro for an array, e.g. `INDEX_OV2640_HTML_GZ_LEN`.
pub fn len_macro_name(var_name: &str) -> String {
    format!("{}_LEN", var_name.to_ascii_uppercase())
}

/// Opening line of the array literal. The scanner keys on everything before ` = {`.
pub fn array_declaration(var_name: &str) -> String {
    format!("const uint8_t {var_name}[]")
}

/// Format one line of array entries: ` 0x1F, 0x8B, ...,`.
pub fn format_row(chunk: &[u8]) -> String {
    let entries: Vec<String> = chunk
        .iter()
        .map(|b| format!("0x{}", hex::encode_upper([*b])))
        .collect();
    format!(" {},", entries.join(", "))
}

/// Build the complete header text.
///
/// `file_name` only appears in the comment block; pass the base name of the
/// output path. `bytes_per_line` of zero is treated as one.
pub fn render_header(
    file_name: &str,
    var_name: &str,
    compressed: &[u8],
    stats: &CompressionStats,
    bytes_per_line: usize,
) -> String {
    let original = stats.original_bytes;
    let packed = stats.compressed_bytes;
    let ratio = stats.ratio_percent();
    let saved = stats.space_saved();
    let features: String = FEATURE_NOTES
        .iter()
        .map(|note| format!(" * {note}\n"))
        .collect();
    let len_macro = len_macro_name(var_name);
    let declaration = array_declaration(var_name);

    let mut out = format!(
        "/*
 * 文件名 / Filename : {file_name}
 * 
 * 文件用途 / File Purpose :
 * 本文件包含Web界面的HTML代码（gzip压缩格式），提供完整的监控控制界面
 * This file contains HTML code for the web interface (gzip compressed), providing a complete monitoring control interface
 * 
 * 技术说明 / Technical Notes:
 * - 使用gzip压缩以节省程序存储空间 / Uses gzip compression to save program storage space
 * - 原始大小: {original} bytes / Original size: {original} bytes
 * - 压缩后大小: {packed} bytes / Compressed size: {packed} bytes
 * - 压缩率: {ratio}% / Compression ratio: {ratio}%
 * - 节省空间: {saved} bytes / Space saved: {saved} bytes
 * 
 * 功能模块 / Function Modules:
{features} * 
 * 创建日期 / Creation Date : {CREATION_DATE}
 */

// Gzip compressed HTML data / Gzip压缩的HTML数据
#define {len_macro} {len}
{declaration} = {{
",
        len = compressed.len(),
    );
    for chunk in compressed.chunks(bytes_per_line.max(1)) {
        out.push_str(&format_row(chunk));
        out.push('\n');
    }
    out.push_str(ARRAY_CLOSE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bytes: &[u8]) -> String {
        let stats = CompressionStats::new(100, bytes.len());
        render_header("camera_index.h", "index_ov2640_html_gz", bytes, &stats, 12)
    }

    #[test]
    fn row_format() {
        assert_eq!(format_row(&[0x1F, 0x8B, 0x08]), " 0x1F, 0x8B, 0x08,");
        assert_eq!(format_row(&[0x0a]), " 0x0A,");
    }

    #[test]
    fn macro_is_uppercased() {
        assert_eq!(len_macro_name("index_ov2640_html_gz"), "INDEX_OV2640_HTML_GZ_LEN");
    }

    #[test]
    fn declaration_and_length() {
        let text = render(&[1, 2, 3]);
        assert!(text.contains("#define INDEX_OV2640_HTML_GZ_LEN 3\n"));
        assert!(text.contains("const uint8_t index_ov2640_html_gz[] = {\n 0x01, 0x02, 0x03,\n};\n"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn rows_wrap_at_twelve() {
        let bytes: Vec<u8> = (0..25).collect();
        let text = render(&bytes);
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with(" 0x")).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches("0x").count(), 12);
        assert_eq!(rows[1].matches("0x").count(), 12);
        assert_eq!(rows[2], " 0x18,");
    }

    #[test]
    fn comment_block_carries_stats() {
        let text = render(&[0; 40]);
        assert!(text.starts_with("/*\n * 文件名 / Filename : camera_index.h\n"));
        assert!(text.contains(" * - 原始大小: 100 bytes / Original size: 100 bytes\n"));
        assert!(text.contains(" * - 压缩率: 60.0% / Compression ratio: 60.0%\n"));
        assert!(text.contains(" * - 节省空间: 60 bytes / Space saved: 60 bytes\n"));
        assert!(text.contains(" * 创建日期 / Creation Date : 2026-01-30\n */\n"));
        assert!(text.contains(" * 功能模块 / Function Modules:\n * 1. 视频显示区域"));
        assert!(text.contains("default is light\n * \n * 创建日期"));
    }

    #[test]
    fn empty_payload_still_closes() {
        let text = render(&[]);
        assert!(text.contains("#define INDEX_OV2640_HTML_GZ_LEN 0\n"));
        assert!(text.contains("[] = {\n};\n"));
    }
}

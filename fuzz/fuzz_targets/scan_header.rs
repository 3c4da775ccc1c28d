use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(arr) = gzheader::extract_array(text, "index_ov2640_html_gz") {
                    assert!(arr.found || arr.bytes.is_empty());
                }
            }
        });
    }
}

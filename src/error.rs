use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GzHeaderError {
    /// Input asset is missing. Checked before any processing starts.
    #[error("错误 / Error: 输入文件不存在 / Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Reading the HTML asset or a generated header failed.
    #[error("reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing the generated header failed.
    #[error("writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A `0x..` entry in the array literal that does not fit in a byte.
    #[error("malformed hex token '{token}' on line {line}")]
    MalformedToken { line: usize, token: String },

    /// Gzip stream could not be decoded.
    #[error("decompression error: {0}")]
    Decompress(String),

    /// Propagated I/O error from the in-memory encoder.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GzHeaderError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

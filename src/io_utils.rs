//! Error reporting for the `encode` and `verify` binaries.

use std::fmt;
use std::io::{self, ErrorKind};

use crate::GzHeaderError;

/// Message printed by a binary before it exits with status 1.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: GzHeaderError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<GzHeaderError> for CliError {
    fn from(err: GzHeaderError) -> Self {
        let msg = match cli_hint(&err) {
            Some(hint) => format!("{err}. {hint}"),
            None => err.to_string(),
        };
        CliError { msg, source: err }
    }
}

fn read_hint(err: &io::Error) -> &'static str {
    match err.kind() {
        ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        ErrorKind::PermissionDenied => "Check the file permissions.",
        ErrorKind::InvalidData => "The header is not valid UTF-8 text.",
        _ => "Check that the path names a readable file.",
    }
}

fn write_hint(err: &io::Error) -> &'static str {
    match err.kind() {
        ErrorKind::PermissionDenied => "Check permissions on the output directory.",
        ErrorKind::NotFound => "Create the output directory first.",
        ErrorKind::WriteZero => "Disk may be full. Free up space and try again.",
        _ if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check that the output path is writable.",
    }
}

/// Actionable follow-up for an error, if there is one. The missing-input
/// message is printed as is.
pub fn cli_hint(err: &GzHeaderError) -> Option<&'static str> {
    match err {
        GzHeaderError::InputNotFound(_) => None,
        GzHeaderError::Read { source, .. } => Some(read_hint(source)),
        GzHeaderError::Write { source, .. } => Some(write_hint(source)),
        GzHeaderError::MalformedToken { .. } => Some("Regenerate the header with encode."),
        GzHeaderError::Decompress(_) => Some("Verify the file is intact."),
        GzHeaderError::Io(_) => None,
    }
}

//! Exit codes following sysexits.h conventions.
//!
//! These codes let scripts tell a missing manifest apart from a missing
//! input file or a broken c2patool installation.

use std::fmt;
use std::io;

use numbers_c2pa_core::NumbersC2paError;

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// General error (catch-all).
pub const GENERAL_ERROR: i32 = 1;

/// Command line usage error (invalid arguments).
/// Maps to EX_USAGE from sysexits.h.
pub const USAGE_ERROR: i32 = 64;

/// Data format error (no claim found, malformed manifest or hash).
/// Maps to EX_DATAERR from sysexits.h.
pub const DATA_ERROR: i32 = 65;

/// Cannot open input file.
/// Maps to EX_NOINPUT from sysexits.h.
pub const INPUT_ERROR: i32 = 66;

/// c2patool could not be started, or exited with an error.
/// Maps to EX_UNAVAILABLE from sysexits.h.
pub const TOOL_ERROR: i32 = 69;

/// I/O error (cannot write output file).
/// Maps to EX_IOERR from sysexits.h.
pub const IO_ERROR: i32 = 74;

/// Invalid combination of arguments that clap cannot express.
#[derive(Debug)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

/// Represents an exit code with optional error context.
pub struct ExitCode {
    pub code: i32,
    pub message: Option<String>,
}

impl ExitCode {
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");

        // The first typed error in the chain decides.
        let code = err
            .chain()
            .find_map(classify)
            .unwrap_or(GENERAL_ERROR);

        Self {
            code,
            message: Some(message),
        }
    }
}

fn classify(cause: &(dyn std::error::Error + 'static)) -> Option<i32> {
    if cause.is::<UsageError>() {
        return Some(USAGE_ERROR);
    }
    if let Some(err) = cause.downcast_ref::<NumbersC2paError>() {
        return Some(match err {
            NumbersC2paError::NoClaimFound
            | NumbersC2paError::InvalidAssetHash(_)
            | NumbersC2paError::UnsupportedMimeType(_)
            | NumbersC2paError::Credential(_)
            | NumbersC2paError::Json(_) => DATA_ERROR,
            NumbersC2paError::Tool { .. }
            | NumbersC2paError::ToolSpawn { .. }
            | NumbersC2paError::ThumbnailFetch(_) => TOOL_ERROR,
            NumbersC2paError::Io(io_err) => io_code(io_err),
            _ => GENERAL_ERROR,
        });
    }
    if let Some(io_err) = cause.downcast_ref::<io::Error>() {
        return Some(io_code(io_err));
    }
    if cause.is::<serde_json::Error>() {
        return Some(DATA_ERROR);
    }
    None
}

fn io_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => INPUT_ERROR,
        _ => IO_ERROR,
    }
}

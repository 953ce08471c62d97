use thiserror::Error;

use crate::escape::EscapeError;
use crate::store::StoreError;

/// Error surfaced by [`Nvram::from_bytes`](crate::Nvram::from_bytes) and
/// [`Nvram::load`](crate::Nvram::load).
///
/// Per-candidate structural mismatches are swallowed during detection; only
/// exhaustion of every enabled candidate is reported.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unrecognized format")]
    Unrecognized,
}

/// Error surfaced by [`Nvram::to_bytes`](crate::Nvram::to_bytes) and
/// [`Nvram::save`](crate::Nvram::save).
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported format")]
    UnsupportedFormat,
    #[error("Tomato format requires hardware type to be defined (.HardwareType)")]
    HardwareTypeMissing,
    #[error("hardware type is not an unsigned 32-bit integer: {value}")]
    HardwareTypeNotNumeric { value: String },
    #[error("key longer than 255 bytes: {key}")]
    KeyTooLong { key: String },
    #[error("value longer than 65535 bytes for key: {key}")]
    ValueTooLong { key: String },
}

/// Structural mismatch while trying one format candidate.
///
/// Never escapes the dispatcher: the candidate simply does not match and
/// detection falls through to the next one.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("buffer too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("declared length {declared} exceeds available {available} bytes")]
    LengthMismatch { declared: usize, available: usize },
    #[error("record without '=' separator")]
    MissingSeparator,
    #[error("record count mismatch: header says {declared}, found {found}")]
    CountMismatch { declared: u16, found: u16 },
    #[error("gzip container: {0}")]
    Gzip(String),
    #[error("line is not ASCII text")]
    NotText,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Escape(#[from] EscapeError),
}

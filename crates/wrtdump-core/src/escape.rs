//! Printable-text escape codec for variable keys and values.
//!
//! Binary dumps can carry control bytes in values; the text format and live
//! editing surfaces need a printable representation. `encode` maps an
//! arbitrary byte-string to printable ASCII, `decode` reverses it. The pair
//! is bijective: `decode(encode(s)) == s` for every byte-string `s`.

use std::fmt::Write;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("invalid hexadecimal escape sequence")]
    InvalidHexEscape,
    #[error("invalid character sequence")]
    Truncated,
}

/// Encode a byte-string as printable ASCII.
///
/// Named escapes (`\n`, `\r`, `\t`, `\b`, `\f`, `\\`) take precedence; any
/// other byte outside 32..=127 becomes a two-digit uppercase hex escape
/// (`\xHH`); the rest pass through unchanged.
///
/// # Examples
/// ```
/// use wrtdump_core::escape::encode;
///
/// assert_eq!(encode(b"lan_ipaddr"), "lan_ipaddr");
/// assert_eq!(encode(b"a\nb"), "a\\nb");
/// assert_eq!(encode(&[0x01]), "\\x01");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            b'\\' => out.push_str("\\\\"),
            32..=127 => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{byte:02X}");
            }
        }
    }
    out
}

enum State {
    Plain,
    Escape,
    Hex(Option<u8>),
}

/// Decode a printable representation back into raw bytes.
///
/// Single-pass state machine; input ending in the middle of an escape is
/// rejected.
///
/// # Examples
/// ```
/// use wrtdump_core::escape::decode;
///
/// assert_eq!(decode("a\\x00b").unwrap(), vec![b'a', 0x00, b'b']);
/// assert!(decode("bad\\q").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, EscapeError> {
    let mut out = Vec::with_capacity(text.len());
    let mut state = State::Plain;

    for byte in text.bytes() {
        state = match state {
            State::Plain => match byte {
                b'\\' => State::Escape,
                _ => {
                    out.push(byte);
                    State::Plain
                }
            },
            State::Escape => match byte {
                b'n' => emit(&mut out, b'\n'),
                b'r' => emit(&mut out, b'\r'),
                b't' => emit(&mut out, b'\t'),
                b'b' => emit(&mut out, 0x08),
                b'f' => emit(&mut out, 0x0C),
                b'\\' => emit(&mut out, b'\\'),
                b'x' => State::Hex(None),
                _ => return Err(EscapeError::InvalidEscape),
            },
            State::Hex(None) => State::Hex(Some(hex_digit(byte)?)),
            State::Hex(Some(high)) => emit(&mut out, high << 4 | hex_digit(byte)?),
        };
    }

    match state {
        State::Plain => Ok(out),
        _ => Err(EscapeError::Truncated),
    }
}

fn emit(out: &mut Vec<u8>, byte: u8) -> State {
    out.push(byte);
    State::Plain
}

fn hex_digit(byte: u8) -> Result<u8, EscapeError> {
    (byte as char)
        .to_digit(16)
        .map(|digit| digit as u8)
        .ok_or(EscapeError::InvalidHexEscape)
}

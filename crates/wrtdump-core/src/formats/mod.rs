//! Dump format codecs and the detection dispatcher.
//!
//! Each binary format follows a layered structure:
//! - `layout`: byte offsets, ranges and magics (source of truth)
//! - `parser`: buffer -> `Variables`, no direct byte indexing
//! - `writer`: `Variables` -> output buffer
//!
//! Shared helpers live beside them: `reader` for safe little-endian byte
//! access, `records` for the NUL-delimited record grammar. Parsers are pure
//! and contain no I/O.
//!
//! Detection is a cascade of trial parses in fixed priority order; a
//! candidate that fails structurally simply does not match and the next one
//! is tried.
//!
//! Version française (résumé):
//! Un module par format (layout/parser/writer), aides communes `reader` et
//! `records`. La détection essaie les candidats dans un ordre fixe; un échec
//! structurel passe au candidat suivant.

pub(crate) mod asuswrt1;
pub(crate) mod asuswrt2;
pub(crate) mod ddwrt;
pub(crate) mod error;
pub(crate) mod reader;
pub(crate) mod records;
pub(crate) mod text;
pub(crate) mod tomato;

use rand::Rng;

pub use error::{FormatError, SaveError};

use crate::store::Variables;
use crate::{Format, FormatMask};
use error::ParseError;

/// Try candidates in priority order, skipping those outside `mask`.
pub(crate) fn detect(buffer: &[u8], mask: FormatMask) -> Result<(Format, Variables), FormatError> {
    for &format in Format::DETECTION_ORDER {
        if !mask.contains(format.mask()) {
            continue;
        }
        match try_parse(format, buffer) {
            Ok(Some(variables)) => return Ok((format, variables)),
            // Structural mismatch: this candidate does not match.
            Ok(None) | Err(_) => continue,
        }
    }
    Err(FormatError::Unrecognized)
}

fn try_parse(format: Format, buffer: &[u8]) -> Result<Option<Variables>, ParseError> {
    match format {
        Format::AsuswrtV1 => asuswrt1::parse(buffer),
        Format::AsuswrtV2 => asuswrt2::parse(buffer),
        Format::DdWrt => ddwrt::parse(buffer),
        Format::Tomato => tomato::parse(buffer),
        Format::Text => text::parse(buffer),
    }
}

/// Serialize for an explicit format tag; detection plays no part here.
pub(crate) fn serialize<R: Rng>(
    format: Format,
    variables: &Variables,
    rng: &mut R,
) -> Result<Vec<u8>, SaveError> {
    match format {
        Format::AsuswrtV1 => Ok(asuswrt1::to_bytes(variables)),
        Format::AsuswrtV2 => Ok(asuswrt2::to_bytes(variables, rng)),
        Format::DdWrt => ddwrt::to_bytes(variables),
        Format::Tomato => tomato::to_bytes(variables),
        Format::Text => Ok(text::to_bytes(variables)),
    }
}

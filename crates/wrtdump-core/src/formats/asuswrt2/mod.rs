//! Asuswrt version 2 dump format.
//!
//! `HDR2` magic, a 24-bit little-endian blob length, one seed byte, then the
//! record blob passed through a reversible byte-wise obfuscation. The
//! obfuscation is the firmware's scrambling scheme, not encryption; it gives
//! no confidentiality.

pub(crate) mod layout;
pub(crate) mod obfuscate;
pub(crate) mod parser;
pub(crate) mod writer;

pub(crate) use parser::parse;
pub(crate) use writer::to_bytes;

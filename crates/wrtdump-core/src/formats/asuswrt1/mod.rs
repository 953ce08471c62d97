//! Asuswrt version 1 dump format.
//!
//! `HDR1` magic, a 32-bit little-endian blob length, then NUL-delimited
//! `key=value` records zero-padded to a multiple of 1024 bytes.

pub(crate) mod layout;
pub(crate) mod parser;
pub(crate) mod writer;

pub(crate) use parser::parse;
pub(crate) use writer::to_bytes;

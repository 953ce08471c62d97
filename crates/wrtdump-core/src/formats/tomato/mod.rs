//! Tomato dump format.
//!
//! The whole file is a gzip stream. Decompressed: `TCF1` magic, a 32-bit
//! little-endian hardware type, then NUL-delimited `key=value` records to
//! the end. The hardware type surfaces in the store as the synthetic
//! `.HardwareType` key and never appears in the record blob.

pub(crate) mod layout;
pub(crate) mod parser;
pub(crate) mod writer;

pub(crate) use parser::parse;
pub(crate) use writer::to_bytes;

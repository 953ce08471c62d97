//! Plain-text dump format.
//!
//! One `escapedKey=escapedValue` record per line, any mix of CR/LF as
//! separators, blank lines ignored. Keys and values cross the store
//! boundary through the escape codec, so values with control bytes stay
//! representable. Saves sort lines by encoded key and end with a newline.

pub(crate) mod parser;
pub(crate) mod writer;

pub(crate) use parser::parse;
pub(crate) use writer::to_bytes;

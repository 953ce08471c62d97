//! DD-WRT dump format.
//!
//! `DD-WRT` magic, a 16-bit little-endian record count, then length-prefixed
//! records packed to the end of the buffer: one key-length byte, the key,
//! two value-length bytes, the value. The count doubles as an integrity
//! check. Saves group `wl_`-prefixed keys first, as the firmware expects.

pub(crate) mod layout;
pub(crate) mod parser;
pub(crate) mod writer;

pub(crate) use parser::parse;
pub(crate) use writer::to_bytes;

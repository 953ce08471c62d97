pub const MAGIC: &[u8; 4] = b"HDR2";

pub const LENGTH_RANGE: std::ops::Range<usize> = 4..7;
pub const SEED_OFFSET: usize = 7;
pub const RECORDS_OFFSET: usize = 8;
pub const HEADER_LEN: usize = 8;

pub const PAD_BLOCK: usize = 1024;

/// Lowest of the reserved marker bytes standing in for NUL in the
/// obfuscated blob; decode treats every byte in `RESERVED_FLOOR..=0xFF`
/// as NUL.
pub const RESERVED_FLOOR: u8 = 0xFD;

/// Seeds are drawn below this bound so that no printable byte can be
/// obfuscated into the reserved marker range.
pub const SEED_BOUND: u8 = 30;

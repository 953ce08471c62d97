pub const MAGIC: &[u8; 4] = b"HDR1";

pub const LENGTH_RANGE: std::ops::Range<usize> = 4..8;
pub const RECORDS_OFFSET: usize = 8;
pub const HEADER_LEN: usize = 8;

pub const PAD_BLOCK: usize = 1024;

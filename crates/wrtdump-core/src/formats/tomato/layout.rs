pub const MAGIC: &[u8; 4] = b"TCF1";

pub const HARDWARE_TYPE_RANGE: std::ops::Range<usize> = 4..8;
pub const RECORDS_OFFSET: usize = 8;
pub const HEADER_LEN: usize = 8;

pub const MAGIC: &[u8; 6] = b"DD-WRT";

pub const COUNT_RANGE: std::ops::Range<usize> = 6..8;
pub const RECORDS_OFFSET: usize = 8;
pub const HEADER_LEN: usize = 8;

pub const MAX_KEY_LEN: usize = 255;
pub const MAX_VALUE_LEN: usize = 65535;

/// Wireless keys are written before everything else.
pub const WIRELESS_PREFIX: &str = "wl_";

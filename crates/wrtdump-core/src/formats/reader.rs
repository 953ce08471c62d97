use std::ops::Range;

use super::error::ParseError;

/// Safe byte access over one dump buffer.
///
/// Header fields in every binary variant are little-endian; the 24-bit width
/// exists only for the Asuswrt V2 length field.
pub(crate) struct DumpReader<'a> {
    buffer: &'a [u8],
}

impl<'a> DumpReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), ParseError> {
        if self.buffer.len() < needed {
            return Err(ParseError::TooShort {
                needed,
                actual: self.buffer.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, ParseError> {
        self.buffer
            .get(offset)
            .copied()
            .ok_or(ParseError::TooShort {
                needed: offset + 1,
                actual: self.buffer.len(),
            })
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> Result<u16, ParseError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(ParseError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u24_le(&self, range: Range<usize>) -> Result<u32, ParseError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 3 {
            return Err(ParseError::TooShort {
                needed: 3,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
    }

    pub fn read_u32_le(&self, range: Range<usize>) -> Result<u32, ParseError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(ParseError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], ParseError> {
        self.buffer.get(range.clone()).ok_or(ParseError::TooShort {
            needed: range.end,
            actual: self.buffer.len(),
        })
    }

    pub fn has_magic(&self, magic: &[u8]) -> bool {
        self.buffer.get(..magic.len()) == Some(magic)
    }
}

pub(crate) fn u24_to_le_bytes(value: u32) -> [u8; 3] {
    let bytes = value.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

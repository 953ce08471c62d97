use crate::store::Variables;

use super::layout;
use crate::formats::error::ParseError;
use crate::formats::reader::DumpReader;
use crate::formats::records::parse_records;

pub(crate) fn parse(buffer: &[u8]) -> Result<Option<Variables>, ParseError> {
    let reader = DumpReader::new(buffer);
    reader.require_len(layout::HEADER_LEN)?;

    if !reader.has_magic(layout::MAGIC) {
        return Ok(None);
    }

    let declared = reader.read_u32_le(layout::LENGTH_RANGE)? as usize;
    let available = buffer.len() - layout::HEADER_LEN;
    if declared > available {
        return Err(ParseError::LengthMismatch {
            declared,
            available,
        });
    }

    let region = reader.read_slice(layout::RECORDS_OFFSET..layout::RECORDS_OFFSET + declared)?;
    parse_records(region).map(Some)
}

use crate::store::Variables;

use super::layout;
use crate::formats::error::ParseError;
use crate::formats::reader::DumpReader;
use crate::formats::records::record_key;

pub(crate) fn parse(buffer: &[u8]) -> Result<Option<Variables>, ParseError> {
    let reader = DumpReader::new(buffer);
    reader.require_len(layout::HEADER_LEN)?;

    if !reader.has_magic(layout::MAGIC) {
        return Ok(None);
    }

    let declared = reader.read_u16_le(layout::COUNT_RANGE)?;

    let mut variables = Variables::new();
    let mut found: u16 = 0;
    let mut offset = layout::RECORDS_OFFSET;
    while offset < buffer.len() {
        let key_len = reader.read_u8(offset)? as usize;
        offset += 1;
        let key_bytes = reader.read_slice(offset..offset + key_len)?;
        offset += key_len;

        let value_len = reader.read_u16_le(offset..offset + 2)? as usize;
        offset += 2;
        let value = reader.read_slice(offset..offset + value_len)?;
        offset += value_len;

        variables.insert(record_key(key_bytes)?, value.to_vec())?;
        found = found.saturating_add(1);
    }

    if found != declared {
        return Err(ParseError::CountMismatch { declared, found });
    }
    Ok(Some(variables))
}

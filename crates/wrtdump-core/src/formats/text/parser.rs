use crate::escape;
use crate::store::Variables;

use crate::formats::error::ParseError;
use crate::formats::records::record_key;

pub(crate) fn parse(buffer: &[u8]) -> Result<Option<Variables>, ParseError> {
    let mut variables = Variables::new();

    for line in buffer.split(|&b| b == b'\n' || b == b'\r') {
        if line.is_empty() {
            continue;
        }
        let separator = line
            .iter()
            .position(|&b| b == b'=')
            .ok_or(ParseError::MissingSeparator)?;

        let key_text = std::str::from_utf8(&line[..separator]).map_err(|_| ParseError::NotText)?;
        let value_text =
            std::str::from_utf8(&line[separator + 1..]).map_err(|_| ParseError::NotText)?;

        let key = escape::decode(key_text)?;
        let value = escape::decode(value_text)?;
        variables.insert(record_key(&key)?, value)?;
    }

    Ok(Some(variables))
}

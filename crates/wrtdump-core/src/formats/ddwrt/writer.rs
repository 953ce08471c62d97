use crate::store::Variables;

use super::layout;
use crate::formats::error::SaveError;

pub(crate) fn to_bytes(variables: &Variables) -> Result<Vec<u8>, SaveError> {
    let mut out = Vec::new();
    out.extend_from_slice(layout::MAGIC);
    out.extend_from_slice(&(variables.len() as u16).to_le_bytes());

    let wireless = variables
        .iter()
        .filter(|(key, _)| key.starts_with(layout::WIRELESS_PREFIX));
    let rest = variables
        .iter()
        .filter(|(key, _)| !key.starts_with(layout::WIRELESS_PREFIX));
    for (key, value) in wireless.chain(rest) {
        write_record(&mut out, key, value)?;
    }
    Ok(out)
}

fn write_record(out: &mut Vec<u8>, key: &str, value: &[u8]) -> Result<(), SaveError> {
    if key.len() > layout::MAX_KEY_LEN {
        return Err(SaveError::KeyTooLong {
            key: key.to_string(),
        });
    }
    if value.len() > layout::MAX_VALUE_LEN {
        return Err(SaveError::ValueTooLong {
            key: key.to_string(),
        });
    }
    out.push(key.len() as u8);
    out.extend_from_slice(key.as_bytes());
    out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    out.extend_from_slice(value);
    Ok(())
}

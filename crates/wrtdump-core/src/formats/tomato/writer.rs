use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::store::{HARDWARE_TYPE_KEY, Variables};

use super::layout;
use crate::formats::error::SaveError;
use crate::formats::records::build_records;

pub(crate) fn to_bytes(variables: &Variables) -> Result<Vec<u8>, SaveError> {
    let raw = variables
        .get(HARDWARE_TYPE_KEY)
        .ok_or(SaveError::HardwareTypeMissing)?;
    let text = String::from_utf8_lossy(raw);
    let hardware_type: u32 = text
        .parse()
        .map_err(|_| SaveError::HardwareTypeNotNumeric {
            value: text.into_owned(),
        })?;

    let mut payload = Vec::new();
    payload.extend_from_slice(layout::MAGIC);
    payload.extend_from_slice(&hardware_type.to_le_bytes());
    let records = build_records(
        variables
            .iter()
            .filter(|(key, _)| *key != HARDWARE_TYPE_KEY),
    );
    payload.extend_from_slice(&records);

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&payload)?;
    Ok(encoder.finish()?)
}

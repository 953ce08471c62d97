use std::io::Read;

use flate2::read::GzDecoder;

use crate::store::{HARDWARE_TYPE_KEY, Variables};

use super::layout;
use crate::formats::error::ParseError;
use crate::formats::reader::DumpReader;
use crate::formats::records::parse_records;

pub(crate) fn parse(buffer: &[u8]) -> Result<Option<Variables>, ParseError> {
    let mut decompressed = Vec::new();
    if let Err(err) = GzDecoder::new(buffer).read_to_end(&mut decompressed) {
        return Err(ParseError::Gzip(err.to_string()));
    }

    let reader = DumpReader::new(&decompressed);
    reader.require_len(layout::HEADER_LEN)?;
    if !reader.has_magic(layout::MAGIC) {
        return Ok(None);
    }

    let hardware_type = reader.read_u32_le(layout::HARDWARE_TYPE_RANGE)?;
    let mut variables = parse_records(&decompressed[layout::RECORDS_OFFSET..])?;
    variables.insert(HARDWARE_TYPE_KEY, hardware_type.to_string().into_bytes())?;
    Ok(Some(variables))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::parse;
    use crate::store::HARDWARE_TYPE_KEY;

    fn gzip(payload: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn parse_surfaces_hardware_type_after_records() {
        let mut payload = b"TCF1".to_vec();
        payload.extend_from_slice(&0x1234u32.to_le_bytes());
        payload.extend_from_slice(b"lan_ipaddr=192.168.1.1\0");

        let variables = parse(&gzip(&payload)).unwrap().unwrap();
        assert_eq!(variables.get(HARDWARE_TYPE_KEY), Some(&b"4660"[..]));

        let keys: Vec<&str> = variables.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["lan_ipaddr", HARDWARE_TYPE_KEY]);
    }

    #[test]
    fn parse_non_gzip_is_structural_error() {
        assert!(parse(b"TCF1 not compressed").is_err());
    }

    #[test]
    fn parse_wrong_inner_magic_is_no_match() {
        let payload = b"XXXX\0\0\0\0rest".to_vec();
        assert!(parse(&gzip(&payload)).unwrap().is_none());
    }

    #[test]
    fn parse_truncated_inner_payload_is_structural_error() {
        assert!(parse(&gzip(b"TCF1")).is_err());
    }
}

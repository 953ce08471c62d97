//! NUL-delimited `key=value` record grammar shared by the Asuswrt and
//! Tomato variants.

use crate::store::{StoreError, Variables};

use super::error::ParseError;

/// Scan a record region into a fresh store.
///
/// Records are split on NUL bytes; empty segments are skipped; each segment
/// splits on its first `=`. Bytes after the last NUL are ignored (binary
/// dumps are zero-padded past the final record).
pub(crate) fn parse_records(region: &[u8]) -> Result<Variables, ParseError> {
    let mut variables = Variables::new();
    let mut start = 0;
    for (index, &byte) in region.iter().enumerate() {
        if byte != 0 {
            continue;
        }
        if index > start {
            let record = &region[start..index];
            let separator = record
                .iter()
                .position(|&b| b == b'=')
                .ok_or(ParseError::MissingSeparator)?;
            let key = record_key(&record[..separator])?;
            variables.insert(key, record[separator + 1..].to_vec())?;
        }
        start = index + 1;
    }
    Ok(variables)
}

/// Interpret raw key bytes as a string, rejecting anything outside
/// printable ASCII.
pub(crate) fn record_key(bytes: &[u8]) -> Result<&str, ParseError> {
    if let Some(&byte) = bytes.iter().find(|&&b| !(32..=127).contains(&b)) {
        return Err(StoreError::NonPrintableKey { byte }.into());
    }
    std::str::from_utf8(bytes).map_err(|_| ParseError::NotText)
}

/// Concatenate `key=value\0` records in store order.
pub(crate) fn build_records<'a>(entries: impl Iterator<Item = (&'a str, &'a [u8])>) -> Vec<u8> {
    let mut blob = Vec::new();
    for (key, value) in entries {
        blob.extend_from_slice(key.as_bytes());
        blob.push(b'=');
        blob.extend_from_slice(value);
        blob.push(0);
    }
    blob
}

/// Zero-pad a record blob up to the next multiple of `block`.
///
/// An already-aligned blob grows by a full block, matching the firmware
/// dumps in the wild: there is always at least one padding byte.
pub(crate) fn pad_to_block(blob: &mut Vec<u8>, block: usize) {
    let padded = blob.len() + (block - blob.len() % block);
    blob.resize(padded, 0);
}

#[cfg(test)]
mod tests {
    use super::{build_records, pad_to_block, parse_records};

    #[test]
    fn parse_basic_records() {
        let variables = parse_records(b"foo=bar\0wl_ssid=home\0").unwrap();
        let entries: Vec<(&str, &[u8])> = variables.iter().collect();
        assert_eq!(
            entries,
            [("foo", &b"bar"[..]), ("wl_ssid", &b"home"[..])]
        );
    }

    #[test]
    fn parse_skips_empty_segments() {
        let variables = parse_records(b"\0\0a=1\0\0\0b=2\0\0").unwrap();
        assert_eq!(variables.len(), 2);
    }

    #[test]
    fn parse_ignores_tail_after_last_nul() {
        let variables = parse_records(b"a=1\0truncated-no-equals").unwrap();
        assert_eq!(variables.len(), 1);
    }

    #[test]
    fn parse_splits_on_first_equals_only() {
        let variables = parse_records(b"a=b=c\0").unwrap();
        assert_eq!(variables.get("a"), Some(&b"b=c"[..]));
    }

    #[test]
    fn parse_rejects_record_without_separator() {
        let err = parse_records(b"no-separator\0").unwrap_err();
        assert!(err.to_string().contains("'='"));
    }

    #[test]
    fn parse_rejects_duplicate_keys() {
        assert!(parse_records(b"a=1\0a=2\0").is_err());
    }

    #[test]
    fn build_then_parse_round_trips() {
        let variables = parse_records(b"k1=v1\0k2=\0").unwrap();
        let blob = build_records(variables.iter());
        assert_eq!(blob, b"k1=v1\0k2=\0");
    }

    #[test]
    fn padding_always_adds_at_least_one_byte() {
        let mut blob = vec![0u8; 1024];
        pad_to_block(&mut blob, 1024);
        assert_eq!(blob.len(), 2048);

        let mut blob = vec![1u8; 5];
        pad_to_block(&mut blob, 1024);
        assert_eq!(blob.len(), 1024);
        assert_eq!(blob[5], 0);
    }
}

//! Ordered variable store shared by every dump format.
//!
//! Keys are non-empty printable ASCII without `=` and are unique
//! (case-sensitive). Values are arbitrary byte-strings; binary formats can
//! carry bytes outside the printable range. Insertion order is preserved and
//! is observable in binary-format serialization.

use thiserror::Error;

/// Synthetic key carrying the Tomato header's hardware-type field.
///
/// It is surfaced as a regular variable (decimal string value) but never
/// written into the Tomato record blob itself.
pub const HARDWARE_TYPE_KEY: &str = ".HardwareType";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("key must not be empty")]
    EmptyKey,
    #[error("key contains byte 0x{byte:02X} outside printable ASCII")]
    NonPrintableKey { byte: u8 },
    #[error("key must not contain '='")]
    EqualsInKey,
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },
}

/// Insertion-ordered key/value container for one dump.
///
/// # Examples
/// ```
/// use wrtdump_core::Variables;
///
/// let mut variables = Variables::new();
/// variables.set("lan_ipaddr", b"192.168.1.1".to_vec())?;
/// assert_eq!(variables.get("lan_ipaddr"), Some(&b"192.168.1.1"[..]));
/// # Ok::<(), wrtdump_core::StoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, Vec<u8>)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_slice())
    }

    /// Insert or update, keeping the entry's position on update.
    pub fn set(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        validate_key(key)?;
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
        Ok(())
    }

    /// Insert a new entry; a duplicate key is an error.
    ///
    /// Parsers use this so that a dump with repeated keys is rejected as
    /// structurally invalid instead of silently collapsing entries.
    pub fn insert(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        validate_key(key)?;
        if self.contains_key(key) {
            return Err(StoreError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.entries.push((key.to_string(), value));
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        let index = self
            .entries
            .iter()
            .position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_slice()))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::EmptyKey);
    }
    for byte in key.bytes() {
        if byte == b'=' {
            return Err(StoreError::EqualsInKey);
        }
        if !(32..=127).contains(&byte) {
            return Err(StoreError::NonPrintableKey { byte });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{StoreError, Variables};

    #[test]
    fn set_preserves_insertion_order() {
        let mut variables = Variables::new();
        variables.set("b", b"2".to_vec()).unwrap();
        variables.set("a", b"1".to_vec()).unwrap();
        variables.set("c", b"3".to_vec()).unwrap();

        let keys: Vec<&str> = variables.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn set_updates_in_place() {
        let mut variables = Variables::new();
        variables.set("a", b"1".to_vec()).unwrap();
        variables.set("b", b"2".to_vec()).unwrap();
        variables.set("a", b"changed".to_vec()).unwrap();

        let entries: Vec<(&str, &[u8])> = variables.iter().collect();
        assert_eq!(entries, [("a", &b"changed"[..]), ("b", &b"2"[..])]);
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut variables = Variables::new();
        variables.insert("key", b"1".to_vec()).unwrap();
        assert_eq!(
            variables.insert("key", b"2".to_vec()),
            Err(StoreError::DuplicateKey {
                key: "key".to_string()
            })
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut variables = Variables::new();
        variables.insert("Key", b"1".to_vec()).unwrap();
        variables.insert("key", b"2".to_vec()).unwrap();
        assert_eq!(variables.len(), 2);
    }

    #[test]
    fn invalid_keys_rejected() {
        let mut variables = Variables::new();
        assert_eq!(
            variables.set("", b"".to_vec()),
            Err(StoreError::EmptyKey)
        );
        assert_eq!(
            variables.set("a=b", b"".to_vec()),
            Err(StoreError::EqualsInKey)
        );
        assert_eq!(
            variables.set("a\nb", b"".to_vec()),
            Err(StoreError::NonPrintableKey { byte: b'\n' })
        );
    }

    #[test]
    fn remove_returns_value() {
        let mut variables = Variables::new();
        variables.set("gone", b"value".to_vec()).unwrap();
        assert_eq!(variables.remove("gone"), Some(b"value".to_vec()));
        assert_eq!(variables.remove("gone"), None);
        assert!(variables.is_empty());
    }
}

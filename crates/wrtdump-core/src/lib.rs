//! Core codec for router NVRAM configuration backups.
//!
//! This crate reads and writes key/value NVRAM dumps in five incompatible
//! on-disk encodings: two binary Asuswrt variants, the gzip-wrapped Tomato
//! variant, the length-prefixed DD-WRT variant, and a plain-text variant.
//! Loading auto-detects the format via cascading trial parses filtered by a
//! caller-supplied candidate mask; saving dispatches on the document's
//! explicit format tag. Parsing is byte-oriented and side-effect free; the
//! only non-pure input is the randomness source feeding the Asuswrt V2
//! obfuscation seed, which callers can inject.
//!
//! Invariants:
//! - Every format round-trips losslessly within its save constraints.
//! - Keys are unique, non-empty printable ASCII without `=`; insertion
//!   order is preserved and observable in binary serialization.
//! - Structural mismatches during detection never surface as errors; only
//!   exhaustion of all enabled candidates does.
//!
//! Version française (résumé):
//! Cette crate lit et écrit des sauvegardes NVRAM de routeurs dans cinq
//! encodages incompatibles. Le chargement détecte le format par essais en
//! cascade filtrés par un masque; la sauvegarde dépend de l'étiquette de
//! format du document. L'analyse est pure; seul le germe aléatoire du
//! brouillage Asuswrt V2 est injecté.
//!
//! # Examples
//! ```
//! use wrtdump_core::{FormatMask, Nvram};
//!
//! let nvram = Nvram::from_bytes(b"lan_ipaddr=192.168.1.1\n", FormatMask::all())?;
//! assert_eq!(nvram.variables.get("lan_ipaddr"), Some(&b"192.168.1.1"[..]));
//! # Ok::<(), wrtdump_core::FormatError>(())
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bitflags::bitflags;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod escape;
mod formats;
mod store;

pub use escape::EscapeError;
pub use formats::{FormatError, SaveError};
pub use store::{HARDWARE_TYPE_KEY, StoreError, Variables};

/// On-disk encoding of one NVRAM dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[serde(rename = "asuswrt1")]
    AsuswrtV1,
    #[serde(rename = "asuswrt2")]
    AsuswrtV2,
    Tomato,
    DdWrt,
    Text,
}

impl Format {
    /// Fixed priority order used by detection.
    pub const DETECTION_ORDER: &[Format] = &[
        Format::AsuswrtV1,
        Format::AsuswrtV2,
        Format::DdWrt,
        Format::Tomato,
        Format::Text,
    ];

    /// The single-candidate mask for this format.
    pub fn mask(self) -> FormatMask {
        match self {
            Format::AsuswrtV1 => FormatMask::ASUSWRT_V1,
            Format::AsuswrtV2 => FormatMask::ASUSWRT_V2,
            Format::Tomato => FormatMask::TOMATO,
            Format::DdWrt => FormatMask::DD_WRT,
            Format::Text => FormatMask::TEXT,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::AsuswrtV1 => "asuswrt1",
            Format::AsuswrtV2 => "asuswrt2",
            Format::Tomato => "tomato",
            Format::DdWrt => "ddwrt",
            Format::Text => "text",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of candidate formats detection is allowed to try.
    ///
    /// This is an input to [`Nvram::from_bytes`]/[`Nvram::load`] only and is
    /// never stored on the document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatMask: u32 {
        const ASUSWRT_V1 = 1 << 0;
        const ASUSWRT_V2 = 1 << 1;
        const TOMATO = 1 << 2;
        const DD_WRT = 1 << 3;
        const TEXT = 1 << 4;
    }
}

/// One loaded (or in-progress) NVRAM document.
///
/// The document is exclusively owned by its caller; the format tag and the
/// variable store are freely mutable between load and save.
///
/// # Examples
/// ```
/// use wrtdump_core::{Format, Nvram};
///
/// let mut nvram = Nvram::new();
/// nvram.variables.set("a", b"b".to_vec())?;
/// nvram.format = Some(Format::Text);
/// assert_eq!(nvram.to_bytes()?, b"a=b\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nvram {
    path: Option<PathBuf>,
    /// Current format tag; `None` until a load succeeds or a caller assigns
    /// one. Saving with `None` fails with [`SaveError::UnsupportedFormat`].
    pub format: Option<Format>,
    /// The key/value store.
    pub variables: Variables,
}

impl Nvram {
    /// Empty document with no format tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect and parse a dump from an in-memory buffer.
    pub fn from_bytes(buffer: &[u8], mask: FormatMask) -> Result<Self, FormatError> {
        let (format, variables) = formats::detect(buffer, mask)?;
        Ok(Self {
            path: None,
            format: Some(format),
            variables,
        })
    }

    /// Read a dump file and detect its format.
    pub fn load(path: &Path, mask: FormatMask) -> Result<Self, FormatError> {
        let buffer = fs::read(path)?;
        let mut nvram = Self::from_bytes(&buffer, mask)?;
        nvram.path = Some(path.to_path_buf());
        Ok(nvram)
    }

    /// Serialize with an injected randomness source (used for the Asuswrt
    /// V2 obfuscation seed).
    pub fn to_bytes_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<u8>, SaveError> {
        let format = self.format.ok_or(SaveError::UnsupportedFormat)?;
        formats::serialize(format, &self.variables, rng)
    }

    /// Serialize using the thread-local randomness source.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
        self.to_bytes_with(&mut rand::thread_rng())
    }

    /// Serialize and write as a single operation.
    ///
    /// The full buffer is built before anything touches the filesystem, so
    /// a serialization failure leaves no partial file behind.
    pub fn save(&mut self, path: &Path) -> Result<(), SaveError> {
        let buffer = self.to_bytes()?;
        fs::write(path, buffer)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Path of the last successful load or save, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

use crate::store::Variables;

use super::layout;
use crate::formats::records::{build_records, pad_to_block};

pub(crate) fn to_bytes(variables: &Variables) -> Vec<u8> {
    let mut blob = build_records(variables.iter());
    pad_to_block(&mut blob, layout::PAD_BLOCK);

    let mut out = Vec::with_capacity(layout::HEADER_LEN + blob.len());
    out.extend_from_slice(layout::MAGIC);
    out.extend_from_slice(&(blob.len() as u32).to_le_bytes());
    out.extend_from_slice(&blob);
    out
}

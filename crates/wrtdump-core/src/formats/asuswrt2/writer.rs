use rand::Rng;

use crate::store::Variables;

use super::layout;
use super::obfuscate::obfuscate;
use crate::formats::reader::u24_to_le_bytes;
use crate::formats::records::{build_records, pad_to_block};

pub(crate) fn to_bytes<R: Rng>(variables: &Variables, rng: &mut R) -> Vec<u8> {
    let mut blob = build_records(variables.iter());
    pad_to_block(&mut blob, layout::PAD_BLOCK);

    // Seeds stay below SEED_BOUND so printable bytes cannot collide with
    // the reserved NUL markers after scrambling; decode accepts any seed.
    let seed = rng.gen_range(0..layout::SEED_BOUND);
    let scrambled = obfuscate(&blob, seed, rng);

    let mut out = Vec::with_capacity(layout::HEADER_LEN + scrambled.len());
    out.extend_from_slice(layout::MAGIC);
    out.extend_from_slice(&u24_to_le_bytes(blob.len() as u32));
    out.push(seed);
    out.extend_from_slice(&scrambled);
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::to_bytes;
    use crate::formats::asuswrt2::layout;
    use crate::store::Variables;

    #[test]
    fn header_declares_padded_blob_length() {
        let mut variables = Variables::new();
        variables.set("foo", b"bar".to_vec()).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let buffer = to_bytes(&variables, &mut rng);
        assert_eq!(&buffer[..4], b"HDR2");
        assert_eq!(&buffer[4..7], &[0x00, 0x04, 0x00]); // 1024 LE, 3 bytes
        assert!(buffer[7] < layout::SEED_BOUND);
        assert_eq!(buffer.len(), 8 + 1024);
    }

    #[test]
    fn blob_carries_no_plaintext() {
        let mut variables = Variables::new();
        variables.set("admin_pass", b"hunter2".to_vec()).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let buffer = to_bytes(&variables, &mut rng);
        let haystack = &buffer[8..];
        assert!(
            !haystack
                .windows(7)
                .any(|window| window == b"hunter2")
        );
    }
}

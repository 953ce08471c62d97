use rand::Rng;

use super::layout;

/// Reverse the byte-wise scrambling applied to a V2 record blob.
///
/// Bytes in the reserved range decode to NUL; everything else decodes to
/// `(0xFF + seed - b) mod 256`.
pub(crate) fn deobfuscate(blob: &[u8], seed: u8) -> Vec<u8> {
    blob.iter()
        .map(|&byte| {
            if byte >= layout::RESERVED_FLOOR {
                0
            } else {
                (0xFFu16 + u16::from(seed) - u16::from(byte)) as u8
            }
        })
        .collect()
}

/// Apply the scrambling. NUL bytes map to a random reserved marker, any of
/// which decodes back to NUL; other bytes map to `(0xFF - b + seed) mod 256`.
pub(crate) fn obfuscate<R: Rng>(blob: &[u8], seed: u8, rng: &mut R) -> Vec<u8> {
    blob.iter()
        .map(|&byte| {
            if byte == 0 {
                layout::RESERVED_FLOOR + rng.gen_range(0..3)
            } else {
                ((0xFFu16 - u16::from(byte) + u16::from(seed)) % 256) as u8
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{deobfuscate, obfuscate};

    #[test]
    fn every_reserved_marker_decodes_to_nul() {
        assert_eq!(deobfuscate(&[0xFD, 0xFE, 0xFF], 0x42), vec![0, 0, 0]);
    }

    #[test]
    fn nul_runs_invert_under_every_seed() {
        let mut rng = StdRng::seed_from_u64(1);
        let blob = vec![0u8; 64];
        for seed in 0..=255u8 {
            let scrambled = obfuscate(&blob, seed, &mut rng);
            assert_eq!(deobfuscate(&scrambled, seed), blob);
        }
    }

    #[test]
    fn printable_blob_inverts_under_every_emitted_seed() {
        let mut rng = StdRng::seed_from_u64(2);
        let blob: Vec<u8> = (32..=127u8).chain(std::iter::repeat_n(0, 8)).collect();
        for seed in 0..super::layout::SEED_BOUND {
            let scrambled = obfuscate(&blob, seed, &mut rng);
            assert!(
                scrambled
                    .iter()
                    .zip(&blob)
                    .all(|(&out, &src)| src == 0 || out < super::layout::RESERVED_FLOOR)
            );
            assert_eq!(deobfuscate(&scrambled, seed), blob);
        }
    }
}

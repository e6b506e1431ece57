//! Key-expansion and subkey-expansion bit-shuffles, plus the fixed
//! round-key mixing steps applied after each expansion.

use crate::tables::{BITS, KEY1_MIX, KEY2_MIX, MixStep, SUB};

/// Expand a two-word (64-bit) source key into a four-word (96-bit)
/// destination key using bit table `BITS[table_idx]`.
pub fn expand_key(table_idx: usize, src: [u32; 2]) -> [u32; 4] {
    let bits = &BITS[table_idx];
    let mut dst = [0u32; 4];
    for (i, &s) in bits.iter().enumerate() {
        let s = s as usize;
        let bit = (src[s / 32] >> (s % 32)) & 1;
        dst[i / 24] |= bit << (i % 24);
    }
    dst
}

/// Expand a 16-bit seed into a two-word (64-bit) subkey using [`SUB`].
pub fn expand_subkey(seed: u16) -> [u32; 2] {
    let mut sub = [0u32; 2];
    for (i, &b) in SUB.iter().enumerate() {
        let bit = u32::from((seed >> b) & 1);
        sub[i / 32] |= bit << (i % 32);
    }
    sub
}

fn apply_mix(key: &mut [u32], steps: &[MixStep]) {
    for step in steps {
        let bit = (key[step.word] >> step.from_bit) & 1;
        key[step.word] ^= bit << step.to_bit;
    }
}

/// Apply the key-1 (FN1 round key) mixing steps in place.
pub fn mix_key1(key1: &mut [u32; 4]) {
    apply_mix(key1, &KEY1_MIX);
}

/// Apply the key-2 (FN2 round key) mixing steps in place.
pub fn mix_key2(key2: &mut [u32; 4]) {
    apply_mix(key2, &KEY2_MIX);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_key_is_deterministic() {
        let a = expand_key(0, [0x1234_5678, 0x9abc_def0]);
        let b = expand_key(0, [0x1234_5678, 0x9abc_def0]);
        assert_eq!(a, b);
        assert_ne!(expand_key(0, [0, 0]), expand_key(1, [0xffff_ffff, 0xffff_ffff]));
    }

    #[test]
    fn zero_seed_expands_to_zero_subkey() {
        assert_eq!(expand_subkey(0), [0, 0]);
    }

    #[test]
    fn mixing_is_a_pure_function_of_the_lower_bits() {
        let mut k = [0u32; 4];
        mix_key1(&mut k);
        assert_eq!(k, [0, 0, 0, 0]);

        let mut k2 = [0x0000_0002, 0, 0, 0];
        mix_key1(&mut k2);
        // bit 1 of key1[0] is set, so bit 4 gets XORed in.
        assert_eq!(k2[0], 0x0000_0012);
    }
}

//! The Feistel network shared by both cipher stages: bit-permuted L/R
//! split, four rounds of XOR-with-round-function, asymmetric recombine.

use crate::sbox::OptimizedSBox;

/// Pack 8 bits of `val` selected by `positions` (index 0 of `positions`
/// becomes bit 0 of the result, and so on) into a byte.
fn pack(val: u16, positions: &[u8; 8]) -> u8 {
    let mut out = 0u8;
    for (i, &pos) in positions.iter().enumerate() {
        out |= (((val >> pos) & 1) as u8) << i;
    }
    out
}

/// Inverse of [`pack`]: scatter the 8 bits of `val` back to `positions` in a
/// 16-bit word.
fn unpack(val: u8, positions: &[u8; 8]) -> u16 {
    let mut out = 0u16;
    for (i, &pos) in positions.iter().enumerate() {
        out |= (u16::from((val >> i) & 1)) << pos;
    }
    out
}

/// The round function: four parallel S-boxes, one per 6-bit slice of a
/// 24-bit round key, OR-ed together (their output bit positions are
/// disjoint by construction).
#[inline]
fn round_function(input: u8, boxes: &[OptimizedSBox; 4], key: u32) -> u8 {
    boxes[0].eval(input, key)
        | boxes[1].eval(input, key >> 6)
        | boxes[2].eval(input, key >> 12)
        | boxes[3].eval(input, key >> 18)
}

/// Run one Feistel stage (four rounds) over a 16-bit word.
///
/// `group_a`/`group_b` are the stage's bit-group permutations. `boxes` are
/// the four per-round S-box quads, in application order. `keys` are the
/// four 24-bit round keys, in application order.
///
/// Note the asymmetric packing: `l` is packed from `group_b` but unpacked
/// to `group_a`, and vice versa for `r` — this is what makes the network
/// its own inverse when round-key order and S-box order are reversed. Do
/// not "fix" this; symmetry breaks the self-inverse property.
#[allow(clippy::too_many_arguments)]
pub fn feistel(
    val: u16,
    group_a: &[u8; 8],
    group_b: &[u8; 8],
    boxes: [&[OptimizedSBox; 4]; 4],
    keys: [u32; 4],
) -> u16 {
    let mut l = pack(val, group_b);
    let mut r = pack(val, group_a);

    l ^= round_function(r, boxes[0], keys[0]);
    r ^= round_function(l, boxes[1], keys[1]);
    l ^= round_function(r, boxes[2], keys[2]);
    r ^= round_function(l, boxes[3], keys[3]);

    unpack(l, group_a) | unpack(r, group_b)
}

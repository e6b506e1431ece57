//! The top-level cipher: per-address subkey stream driving the FN2 Feistel
//! stage over every word in the active range.

use std::sync::LazyLock;

use tracing::{debug, info};

use crate::error::{CryptoError, Result};
use crate::feistel::feistel;
use crate::keyschedule::{expand_key, expand_subkey, mix_key1, mix_key2};
use crate::masterkey::MasterKey;
use crate::sbox::OptimizedSBox;
use crate::tables::{
    FN1_GROUP_A, FN1_GROUP_B, FN1_R1, FN1_R2, FN1_R3, FN1_R4, FN2_GROUP_A, FN2_GROUP_B, FN2_R1,
    FN2_R2, FN2_R3, FN2_R4,
};

/// Which way the cipher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

struct StageBoxes {
    fn1: [[OptimizedSBox; 4]; 4],
    fn2: [[OptimizedSBox; 4]; 4],
}

fn build_quad(sboxes: &[crate::sbox::SBox; 4]) -> [OptimizedSBox; 4] {
    [
        OptimizedSBox::build(&sboxes[0]),
        OptimizedSBox::build(&sboxes[1]),
        OptimizedSBox::build(&sboxes[2]),
        OptimizedSBox::build(&sboxes[3]),
    ]
}

static TABLES: LazyLock<StageBoxes> = LazyLock::new(|| StageBoxes {
    fn1: [
        build_quad(&FN1_R1),
        build_quad(&FN1_R2),
        build_quad(&FN1_R3),
        build_quad(&FN1_R4),
    ],
    fn2: [
        build_quad(&FN2_R1),
        build_quad(&FN2_R2),
        build_quad(&FN2_R3),
        build_quad(&FN2_R4),
    ],
});

fn word_to_be_bytes(words: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for &w in words {
        out.extend_from_slice(&w.to_be_bytes());
    }
    out
}

fn bytes_to_be_words(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect()
}

/// Compute the FN1 seed and the direction-dependent FN2 key/box order for
/// one value of `i` (the low 16 bits of every word address this step
/// touches), then apply the FN2 Feistel stage to every such address in
/// `words` that falls inside `[lower_word, upper_word]`.
fn process_address_class(
    i: u16,
    key1: [u32; 4],
    mk: &MasterKey,
    direction: Direction,
    words: &[u16],
) -> Vec<(usize, u16)> {
    let tables = &*TABLES;
    let fn1_boxes = [&tables.fn1[0], &tables.fn1[1], &tables.fn1[2], &tables.fn1[3]];
    let seed = feistel(i, &FN1_GROUP_A, &FN1_GROUP_B, fn1_boxes, key1);

    let mut subkey = expand_subkey(seed);
    subkey[0] ^= mk.mk1;
    subkey[1] ^= mk.mk2;

    let mut key2 = expand_key(1, subkey);
    mix_key2(&mut key2);

    let (fn2_boxes, keys): ([&[OptimizedSBox; 4]; 4], [u32; 4]) = match direction {
        Direction::Decrypt => (
            [&tables.fn2[0], &tables.fn2[1], &tables.fn2[2], &tables.fn2[3]],
            key2,
        ),
        Direction::Encrypt => (
            [&tables.fn2[3], &tables.fn2[2], &tables.fn2[1], &tables.fn2[0]],
            [key2[3], key2[2], key2[1], key2[0]],
        ),
    };

    let mut out = Vec::new();
    let i = i as usize;
    let mut a = i;
    while a < words.len() {
        if (mk.lower_word..=mk.upper_word).contains(&(a as i64)) {
            let v = feistel(words[a], &FN2_GROUP_A, &FN2_GROUP_B, fn2_boxes, keys);
            out.push((a, v));
        }
        a += 0x10000;
    }
    out
}

/// Run the cipher over `image` in the given `direction`, using the 20+ byte
/// `key_blob` to derive the master key. `image`'s length must be even; the
/// returned buffer has identical length.
pub fn crypt(direction: Direction, key_blob: &[u8], image: &[u8]) -> Result<Vec<u8>> {
    if image.len() % 2 != 0 {
        return Err(CryptoError::InvalidImageLength(image.len()));
    }
    let mk = MasterKey::from_key_bytes(key_blob)?;
    debug!(
        mk1 = format_args!("{:#010x}", mk.mk1),
        mk2 = format_args!("{:#010x}", mk.mk2),
        lower_word = mk.lower_word,
        upper_word = mk.upper_word,
        "derived master key"
    );

    let mut key1 = expand_key(0, [mk.mk1, mk.mk2]);
    mix_key1(&mut key1);

    let words = bytes_to_be_words(image);
    let mut out_words = words.clone();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let updates: Vec<Vec<(usize, u16)>> = (0..=0xffffu32)
            .into_par_iter()
            .map(|i| process_address_class(i as u16, key1, &mk, direction, &words))
            .collect();
        for batch in updates {
            for (idx, v) in batch {
                out_words[idx] = v;
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for i in 0..=0xffffu32 {
            for (idx, v) in process_address_class(i as u16, key1, &mk, direction, &words) {
                out_words[idx] = v;
            }
        }
    }

    info!(
        words = out_words.len(),
        direction = ?direction,
        "cipher pass complete"
    );
    Ok(word_to_be_bytes(&out_words))
}

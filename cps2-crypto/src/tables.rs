//! Literal cipher constants: the two Feistel stages' S-box arrays, their
//! bit-group permutations, the key-expansion bit tables, and the subkey
//! expansion bit table.
//!
//! All data here is transcribed bit-for-bit from the reference
//! implementation; nothing is derived or "cleaned up" — the cipher is only
//! correct if these tables are exact.

use crate::sbox::SBox;

/// FN1 (first Feistel stage; derives the per-address seed) bit-group
/// permutations. `group_a`/`group_b` select which bits of the 16-bit input
/// feed the `R`/`L` halves respectively, packed MSB-first.
pub const FN1_GROUP_A: [u8; 8] = [10, 4, 6, 7, 2, 13, 15, 14];
pub const FN1_GROUP_B: [u8; 8] = [0, 1, 3, 5, 8, 9, 11, 12];

/// FN2 (second Feistel stage; encrypts/decrypts words in range) bit-group
/// permutations.
pub const FN2_GROUP_A: [u8; 8] = [6, 0, 2, 13, 1, 4, 14, 7];
pub const FN2_GROUP_B: [u8; 8] = [3, 5, 9, 10, 8, 15, 12, 11];

pub const FN1_R1: [SBox; 4] = [
    SBox {
        table: [
            0, 2, 2, 0, 1, 0, 1, 1, 3, 2, 0, 3, 0, 3, 1, 2, 1, 1, 1, 2, 1, 3, 2, 2, 2, 3, 3, 2, 1,
            1, 1, 2, 2, 2, 0, 0, 3, 1, 3, 1, 1, 1, 3, 0, 0, 1, 0, 0, 1, 2, 2, 1, 2, 3, 2, 2, 2, 3,
            1, 3, 2, 0, 1, 3,
        ],
        inputs: [3, 4, 5, 6, -1, -1],
        outputs: [3, 6],
    },
    SBox {
        table: [
            3, 0, 2, 2, 2, 1, 1, 1, 1, 2, 1, 0, 0, 0, 2, 3, 2, 3, 1, 3, 0, 0, 0, 2, 1, 2, 2, 3, 0,
            3, 3, 3, 0, 1, 3, 2, 3, 3, 3, 1, 1, 1, 1, 2, 0, 1, 2, 1, 3, 2, 3, 1, 1, 3, 2, 2, 2, 3,
            1, 3, 2, 3, 0, 0,
        ],
        inputs: [0, 1, 2, 4, 7, -1],
        outputs: [2, 7],
    },
    SBox {
        table: [
            3, 0, 3, 1, 1, 0, 2, 2, 3, 1, 2, 0, 3, 3, 2, 3, 0, 1, 0, 1, 2, 3, 0, 2, 0, 2, 0, 1, 0,
            0, 1, 0, 2, 3, 1, 2, 1, 0, 2, 0, 2, 1, 0, 1, 0, 2, 1, 0, 3, 1, 2, 3, 1, 3, 1, 1, 1, 2,
            0, 2, 2, 0, 0, 0,
        ],
        inputs: [0, 1, 2, 3, 6, 7],
        outputs: [0, 1],
    },
    SBox {
        table: [
            3, 2, 0, 3, 0, 2, 2, 1, 1, 2, 3, 2, 1, 3, 2, 1, 2, 2, 1, 3, 3, 2, 1, 0, 1, 0, 1, 3, 0,
            0, 0, 2, 2, 1, 0, 1, 0, 1, 0, 1, 3, 1, 1, 2, 2, 3, 2, 0, 3, 3, 2, 0, 2, 1, 3, 3, 0, 0,
            3, 0, 1, 1, 3, 3,
        ],
        inputs: [0, 1, 3, 5, 6, 7],
        outputs: [4, 5],
    },
];

pub const FN1_R2: [SBox; 4] = [
    SBox {
        table: [
            3, 3, 2, 0, 3, 0, 3, 1, 0, 3, 0, 1, 0, 2, 1, 3, 1, 3, 0, 3, 3, 1, 3, 3, 3, 2, 3, 2, 2,
            3, 1, 2, 0, 2, 2, 1, 0, 1, 2, 0, 3, 3, 0, 1, 3, 2, 1, 2, 3, 0, 1, 3, 0, 1, 2, 2, 1, 2,
            1, 2, 0, 1, 3, 0,
        ],
        inputs: [0, 1, 2, 3, 6, -1],
        outputs: [1, 6],
    },
    SBox {
        table: [
            1, 2, 3, 2, 1, 3, 0, 1, 1, 0, 2, 0, 0, 2, 3, 2, 3, 3, 0, 1, 2, 2, 1, 0, 1, 0, 1, 2, 3,
            2, 1, 3, 2, 2, 2, 0, 1, 0, 2, 3, 2, 1, 2, 1, 2, 1, 0, 3, 0, 1, 2, 3, 1, 2, 1, 3, 2, 0,
            3, 2, 3, 0, 2, 0,
        ],
        inputs: [2, 4, 5, 6, 7, -1],
        outputs: [5, 7],
    },
    SBox {
        table: [
            0, 1, 0, 2, 1, 1, 0, 1, 0, 2, 2, 2, 1, 3, 0, 0, 1, 1, 3, 1, 2, 2, 2, 3, 1, 0, 3, 3, 3,
            2, 2, 2, 1, 1, 3, 0, 3, 1, 3, 0, 1, 3, 3, 2, 1, 1, 0, 0, 1, 2, 2, 2, 1, 1, 1, 2, 2, 0,
            0, 3, 2, 3, 1, 3,
        ],
        inputs: [1, 2, 3, 4, 5, 7],
        outputs: [0, 3],
    },
    SBox {
        table: [
            2, 1, 0, 3, 3, 3, 2, 0, 1, 2, 1, 1, 1, 0, 3, 1, 1, 3, 3, 0, 1, 2, 1, 0, 0, 0, 3, 0, 3,
            0, 3, 0, 1, 3, 3, 3, 0, 3, 2, 0, 2, 1, 2, 2, 2, 1, 1, 3, 0, 1, 0, 1, 0, 1, 1, 1, 1, 3,
            1, 0, 1, 2, 3, 3,
        ],
        inputs: [0, 1, 3, 4, 6, 7],
        outputs: [2, 4],
    },
];

pub const FN1_R3: [SBox; 4] = [
    SBox {
        table: [
            0, 0, 0, 3, 3, 1, 1, 0, 2, 0, 2, 0, 0, 0, 3, 2, 0, 1, 2, 3, 2, 2, 1, 0, 3, 0, 0, 0, 0,
            0, 2, 3, 3, 0, 0, 1, 1, 2, 3, 3, 0, 1, 3, 2, 0, 1, 3, 3, 2, 0, 0, 1, 0, 2, 0, 0, 0, 3,
            1, 3, 3, 3, 3, 3,
        ],
        inputs: [0, 1, 5, 6, 7, -1],
        outputs: [0, 5],
    },
    SBox {
        table: [
            2, 3, 2, 3, 0, 2, 3, 0, 2, 2, 3, 0, 3, 2, 0, 2, 1, 0, 2, 3, 1, 1, 1, 0, 0, 1, 0, 2, 1,
            2, 2, 1, 3, 0, 2, 1, 2, 3, 3, 0, 3, 2, 3, 1, 0, 2, 1, 0, 1, 2, 2, 3, 0, 2, 1, 3, 1, 3,
            0, 2, 1, 1, 1, 3,
        ],
        inputs: [2, 3, 4, 6, 7, -1],
        outputs: [6, 7],
    },
    SBox {
        table: [
            3, 0, 2, 1, 1, 3, 1, 2, 2, 1, 2, 2, 2, 0, 0, 1, 2, 3, 1, 0, 2, 0, 0, 2, 3, 1, 2, 0, 0,
            0, 3, 0, 2, 1, 1, 2, 0, 0, 1, 2, 3, 1, 1, 2, 0, 1, 3, 0, 3, 1, 1, 0, 0, 2, 3, 0, 0, 0,
            0, 3, 2, 0, 0, 0,
        ],
        inputs: [0, 2, 3, 4, 5, 6],
        outputs: [1, 4],
    },
    SBox {
        table: [
            0, 1, 0, 0, 2, 1, 3, 2, 3, 3, 2, 1, 0, 1, 1, 1, 1, 1, 0, 3, 3, 1, 1, 0, 0, 2, 2, 1, 0,
            3, 3, 2, 1, 3, 3, 0, 3, 0, 2, 1, 1, 2, 3, 2, 2, 2, 1, 0, 0, 3, 3, 3, 2, 2, 3, 1, 0, 2,
            3, 0, 3, 1, 1, 0,
        ],
        inputs: [0, 1, 2, 3, 5, 7],
        outputs: [2, 3],
    },
];

pub const FN1_R4: [SBox; 4] = [
    SBox {
        table: [
            1, 1, 1, 1, 1, 0, 1, 3, 3, 2, 3, 0, 1, 2, 0, 2, 3, 3, 0, 1, 2, 1, 2, 3, 0, 3, 2, 3, 2,
            0, 1, 2, 0, 1, 0, 3, 2, 1, 3, 2, 3, 1, 2, 3, 2, 0, 1, 2, 2, 0, 0, 0, 2, 1, 3, 0, 3, 1,
            3, 0, 1, 3, 3, 0,
        ],
        inputs: [1, 2, 3, 4, 5, 7],
        outputs: [0, 4],
    },
    SBox {
        table: [
            3, 0, 0, 0, 0, 1, 0, 2, 3, 3, 1, 3, 0, 3, 1, 2, 2, 2, 3, 1, 0, 0, 2, 0, 1, 0, 2, 2, 3,
            3, 0, 0, 1, 1, 3, 0, 2, 3, 0, 3, 0, 3, 0, 2, 0, 2, 0, 1, 0, 3, 0, 1, 3, 1, 1, 0, 0, 1,
            3, 3, 2, 2, 1, 0,
        ],
        inputs: [0, 1, 2, 3, 5, 6],
        outputs: [1, 3],
    },
    SBox {
        table: [
            0, 1, 1, 2, 0, 1, 3, 1, 2, 0, 3, 2, 0, 0, 3, 0, 3, 0, 1, 2, 2, 3, 3, 2, 3, 2, 0, 1, 0,
            0, 1, 0, 3, 0, 2, 3, 0, 2, 2, 2, 1, 1, 0, 2, 2, 0, 0, 1, 2, 1, 1, 1, 2, 3, 0, 3, 1, 2,
            3, 3, 1, 1, 3, 0,
        ],
        inputs: [0, 2, 4, 5, 6, 7],
        outputs: [2, 6],
    },
    SBox {
        table: [
            0, 1, 2, 2, 0, 1, 0, 3, 2, 2, 1, 1, 3, 2, 0, 2, 0, 1, 3, 3, 0, 2, 2, 3, 3, 2, 0, 0, 2,
            1, 3, 3, 1, 1, 1, 3, 1, 2, 1, 1, 0, 3, 3, 2, 3, 2, 3, 0, 3, 1, 0, 0, 3, 0, 0, 0, 2, 2,
            2, 1, 2, 3, 0, 0,
        ],
        inputs: [0, 1, 3, 4, 6, 7],
        outputs: [5, 7],
    },
];

pub const FN2_R1: [SBox; 4] = [
    SBox {
        table: [
            2, 0, 2, 0, 3, 0, 0, 3, 1, 1, 0, 1, 3, 2, 0, 1, 2, 0, 1, 2, 0, 2, 0, 2, 2, 2, 3, 0, 2,
            1, 3, 0, 0, 1, 0, 1, 2, 2, 3, 3, 0, 3, 0, 2, 3, 0, 1, 2, 1, 1, 0, 2, 0, 3, 1, 1, 2, 2,
            1, 3, 1, 1, 3, 1,
        ],
        inputs: [0, 3, 4, 5, 7, -1],
        outputs: [6, 7],
    },
    SBox {
        table: [
            1, 1, 0, 3, 0, 2, 0, 1, 3, 0, 2, 0, 1, 1, 0, 0, 1, 3, 2, 2, 0, 2, 2, 2, 2, 0, 1, 3, 3,
            3, 1, 1, 1, 3, 1, 3, 2, 2, 2, 2, 2, 2, 0, 1, 0, 1, 1, 2, 3, 1, 1, 2, 0, 3, 3, 3, 2, 2,
            3, 1, 1, 1, 3, 0,
        ],
        inputs: [1, 2, 3, 4, 6, -1],
        outputs: [3, 5],
    },
    SBox {
        table: [
            1, 0, 2, 2, 3, 3, 3, 3, 1, 2, 2, 1, 0, 1, 2, 1, 1, 2, 3, 1, 2, 0, 0, 1, 2, 3, 1, 2, 0,
            0, 0, 2, 2, 0, 1, 1, 0, 0, 2, 0, 0, 0, 2, 3, 2, 3, 0, 1, 3, 0, 0, 0, 2, 3, 2, 0, 1, 3,
            2, 1, 3, 1, 1, 3,
        ],
        inputs: [1, 2, 4, 5, 6, 7],
        outputs: [1, 4],
    },
    SBox {
        table: [
            1, 3, 3, 0, 3, 2, 3, 1, 3, 2, 1, 1, 3, 3, 2, 1, 2, 3, 0, 3, 1, 0, 0, 2, 3, 0, 0, 0, 3,
            3, 0, 1, 2, 3, 0, 0, 0, 1, 2, 1, 3, 0, 0, 1, 0, 2, 2, 2, 3, 3, 1, 2, 1, 3, 0, 0, 0, 3,
            0, 1, 3, 2, 2, 0,
        ],
        inputs: [0, 2, 3, 5, 6, 7],
        outputs: [0, 2],
    },
];

pub const FN2_R2: [SBox; 4] = [
    SBox {
        table: [
            3, 1, 3, 0, 3, 0, 3, 1, 3, 0, 0, 1, 1, 3, 0, 3, 1, 1, 0, 1, 2, 3, 2, 3, 3, 1, 2, 2, 2,
            0, 2, 3, 2, 2, 2, 1, 1, 3, 3, 0, 3, 1, 2, 1, 1, 1, 0, 2, 0, 3, 3, 0, 0, 2, 0, 0, 1, 1,
            2, 1, 2, 1, 1, 0,
        ],
        inputs: [0, 2, 4, 6, -1, -1],
        outputs: [4, 6],
    },
    SBox {
        table: [
            0, 3, 0, 3, 3, 2, 1, 2, 3, 1, 1, 1, 2, 0, 2, 3, 0, 3, 1, 2, 2, 1, 3, 3, 3, 2, 1, 2, 2,
            0, 1, 0, 2, 3, 0, 1, 2, 0, 1, 1, 2, 0, 2, 1, 2, 0, 2, 3, 3, 1, 0, 2, 3, 3, 0, 3, 1, 1,
            3, 0, 0, 1, 2, 0,
        ],
        inputs: [1, 3, 4, 5, 6, 7],
        outputs: [0, 3],
    },
    SBox {
        table: [
            0, 0, 2, 1, 3, 2, 1, 0, 1, 2, 2, 2, 1, 1, 0, 3, 1, 2, 2, 3, 2, 1, 1, 0, 3, 0, 0, 1, 1,
            2, 3, 1, 3, 3, 2, 2, 1, 0, 1, 1, 1, 2, 0, 1, 2, 3, 0, 3, 3, 0, 3, 2, 2, 0, 2, 2, 1, 2,
            3, 2, 1, 0, 2, 1,
        ],
        inputs: [0, 1, 3, 4, 5, 7],
        outputs: [1, 7],
    },
    SBox {
        table: [
            0, 2, 1, 2, 0, 2, 2, 0, 1, 3, 2, 0, 3, 2, 3, 0, 3, 3, 2, 3, 1, 2, 3, 1, 2, 2, 0, 0, 2,
            2, 1, 2, 2, 3, 3, 3, 1, 1, 0, 0, 0, 3, 2, 0, 3, 2, 3, 1, 1, 1, 1, 0, 1, 0, 1, 3, 0, 0,
            1, 2, 2, 3, 2, 0,
        ],
        inputs: [1, 2, 3, 5, 6, 7],
        outputs: [2, 5],
    },
];

pub const FN2_R3: [SBox; 4] = [
    SBox {
        table: [
            2, 1, 2, 1, 2, 3, 1, 3, 2, 2, 1, 3, 3, 0, 0, 1, 0, 2, 0, 3, 3, 1, 0, 0, 1, 1, 0, 2, 3,
            2, 1, 2, 1, 1, 2, 1, 1, 3, 2, 2, 0, 2, 2, 3, 3, 3, 2, 0, 0, 0, 0, 0, 3, 3, 3, 0, 1, 2,
            1, 0, 2, 3, 3, 1,
        ],
        inputs: [2, 3, 4, 6, -1, -1],
        outputs: [3, 5],
    },
    SBox {
        table: [
            3, 2, 3, 3, 1, 0, 3, 0, 2, 0, 1, 1, 1, 0, 3, 0, 3, 1, 3, 1, 0, 1, 2, 3, 2, 2, 3, 2, 0,
            1, 1, 2, 3, 0, 0, 2, 1, 0, 0, 2, 2, 0, 1, 0, 0, 2, 0, 0, 1, 3, 1, 3, 2, 0, 3, 3, 1, 0,
            2, 2, 2, 3, 0, 0,
        ],
        inputs: [0, 1, 3, 5, 7, -1],
        outputs: [0, 2],
    },
    SBox {
        table: [
            2, 2, 1, 0, 2, 3, 3, 0, 0, 0, 1, 3, 1, 2, 3, 2, 2, 3, 1, 3, 0, 3, 0, 3, 3, 2, 2, 1, 0,
            0, 0, 2, 1, 2, 2, 2, 0, 0, 1, 2, 0, 1, 3, 0, 2, 3, 2, 1, 3, 2, 2, 2, 3, 1, 3, 0, 2, 0,
            2, 1, 0, 3, 3, 1,
        ],
        inputs: [0, 1, 2, 3, 5, 7],
        outputs: [1, 6],
    },
    SBox {
        table: [
            1, 2, 3, 2, 0, 2, 1, 3, 3, 1, 0, 1, 1, 2, 2, 0, 0, 1, 1, 1, 2, 1, 1, 2, 0, 1, 3, 3, 1,
            1, 1, 2, 3, 3, 1, 0, 2, 1, 1, 1, 2, 1, 0, 0, 2, 2, 3, 2, 3, 2, 2, 0, 2, 2, 3, 3, 0, 2,
            3, 0, 2, 2, 1, 1,
        ],
        inputs: [0, 2, 4, 5, 6, 7],
        outputs: [4, 7],
    },
];

pub const FN2_R4: [SBox; 4] = [
    SBox {
        table: [
            2, 0, 1, 1, 2, 1, 3, 3, 1, 1, 1, 2, 0, 1, 0, 2, 0, 1, 2, 0, 2, 3, 0, 2, 3, 3, 2, 2, 3,
            2, 0, 1, 3, 0, 2, 0, 2, 3, 1, 3, 2, 0, 0, 1, 1, 2, 3, 1, 1, 1, 0, 1, 2, 0, 3, 3, 1, 1,
            1, 3, 3, 1, 1, 0,
        ],
        inputs: [0, 1, 3, 6, 7, -1],
        outputs: [0, 3],
    },
    SBox {
        table: [
            1, 2, 2, 1, 0, 3, 3, 1, 0, 2, 2, 2, 1, 0, 1, 0, 1, 1, 0, 1, 0, 2, 1, 0, 2, 1, 0, 2, 3,
            2, 3, 3, 2, 2, 1, 2, 2, 3, 1, 3, 3, 3, 0, 1, 0, 1, 3, 0, 0, 0, 1, 2, 0, 3, 3, 2, 3, 2,
            1, 3, 2, 1, 0, 2,
        ],
        inputs: [0, 1, 2, 4, 5, 6],
        outputs: [4, 7],
    },
    SBox {
        table: [
            2, 3, 2, 1, 3, 2, 3, 0, 0, 2, 1, 1, 0, 0, 3, 2, 3, 1, 0, 1, 2, 2, 2, 1, 3, 2, 2, 1, 0,
            2, 1, 2, 0, 3, 1, 0, 0, 3, 1, 1, 3, 3, 2, 0, 1, 0, 1, 3, 0, 0, 1, 2, 1, 2, 3, 2, 1, 0,
            0, 3, 2, 1, 1, 3,
        ],
        inputs: [0, 2, 3, 4, 5, 7],
        outputs: [1, 2],
    },
    SBox {
        table: [
            2, 0, 0, 3, 2, 2, 2, 1, 3, 3, 1, 1, 2, 0, 0, 3, 1, 0, 3, 2, 1, 0, 2, 0, 3, 2, 2, 3, 2,
            0, 3, 0, 1, 3, 0, 2, 2, 1, 3, 3, 0, 1, 0, 3, 1, 1, 3, 2, 0, 3, 0, 2, 3, 2, 1, 3, 2, 3,
            0, 0, 1, 3, 2, 1,
        ],
        inputs: [2, 3, 4, 5, 6, 7],
        outputs: [5, 6],
    },
];

/// Key-expansion bit-source tables. `BITS[k][i]` names which bit of the
/// 64-bit source key (two 32-bit words, bit index `0..64`) feeds output bit
/// `i` of a 96-bit expanded key (`dst[i/24] |= bit(src[s/32], s%32) << (i%24)`).
pub const BITS: [[u8; 96]; 2] = [
    [
        33, 58, 49, 36, 0, 31, 22, 30, 3, 16, 5, 53, 10, 41, 23, 19, 27, 39, 43, 6, 34, 12, 61,
        21, 48, 13, 32, 35, 6, 42, 43, 14, 21, 41, 52, 25, 18, 47, 46, 37, 57, 53, 20, 8, 55, 54,
        59, 60, 27, 33, 35, 18, 8, 15, 63, 1, 50, 44, 16, 46, 5, 4, 45, 51, 38, 25, 13, 11, 62,
        29, 48, 2, 59, 61, 62, 56, 51, 57, 54, 9, 24, 63, 22, 7, 26, 42, 45, 40, 23, 14, 2, 31,
        52, 28, 44, 17,
    ],
    [
        34, 9, 32, 24, 44, 54, 38, 61, 47, 13, 28, 7, 29, 58, 18, 1, 20, 60, 15, 6, 11, 43, 39,
        19, 63, 23, 16, 62, 54, 40, 31, 3, 56, 61, 17, 25, 47, 38, 55, 57, 5, 4, 15, 42, 22, 7, 2,
        19, 46, 37, 29, 39, 12, 30, 49, 57, 31, 41, 26, 27, 24, 36, 11, 63, 33, 16, 56, 62, 48,
        60, 59, 32, 12, 30, 53, 48, 10, 0, 50, 35, 3, 59, 14, 49, 51, 45, 44, 2, 21, 33, 55, 52,
        23, 28, 8, 26,
    ],
];

/// Subkey-expansion bit-source table: `SUB[i]` names which bit (`0..16`) of
/// the 16-bit seed feeds output bit `i` of the 64-bit subkey.
pub const SUB: [u8; 64] = [
    5, 10, 14, 9, 4, 0, 15, 6, 1, 8, 3, 2, 12, 7, 13, 11, 5, 12, 7, 2, 13, 11, 9, 14, 4, 1, 6, 10,
    8, 0, 15, 3, 4, 10, 2, 0, 6, 9, 12, 1, 11, 7, 15, 8, 13, 5, 14, 3, 14, 11, 12, 7, 4, 5, 2, 10,
    1, 15, 0, 9, 8, 6, 13, 3,
];

/// A single `dst[word] ^= bit(dst[word], from_bit) << to_bit` mixing step.
pub struct MixStep {
    pub word: usize,
    pub from_bit: u32,
    pub to_bit: u32,
}

/// Key-1 (FN1 round key) mixing steps, applied after `expand(BITS[0], ...)`.
pub const KEY1_MIX: [MixStep; 7] = [
    MixStep { word: 0, from_bit: 1, to_bit: 4 },
    MixStep { word: 0, from_bit: 2, to_bit: 5 },
    MixStep { word: 0, from_bit: 8, to_bit: 11 },
    MixStep { word: 1, from_bit: 0, to_bit: 5 },
    MixStep { word: 1, from_bit: 8, to_bit: 11 },
    MixStep { word: 2, from_bit: 1, to_bit: 5 },
    MixStep { word: 2, from_bit: 8, to_bit: 11 },
];

/// Key-2 (FN2 round key) mixing steps, applied after `expand(BITS[1], ...)`.
pub const KEY2_MIX: [MixStep; 8] = [
    MixStep { word: 0, from_bit: 0, to_bit: 5 },
    MixStep { word: 0, from_bit: 6, to_bit: 11 },
    MixStep { word: 1, from_bit: 0, to_bit: 5 },
    MixStep { word: 1, from_bit: 1, to_bit: 4 },
    MixStep { word: 2, from_bit: 2, to_bit: 5 },
    MixStep { word: 2, from_bit: 3, to_bit: 4 },
    MixStep { word: 2, from_bit: 7, to_bit: 11 },
    MixStep { word: 3, from_bit: 1, to_bit: 5 },
];

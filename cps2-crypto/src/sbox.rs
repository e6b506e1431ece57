//! S-box evaluation: a fixed 64-entry lookup table parameterized by up to
//! six input-bit positions and two output-bit positions.
//!
//! Each `SBox` is specified as literal data in [`crate::tables`]. At cipher
//! build time every `SBox` is lowered into an [`OptimizedSBox`], which
//! precomputes the input-bit extraction for all 256 possible input bytes so
//! that evaluating a round in the hot loop is a table lookup and an XOR,
//! never a bit-by-bit scan.

/// A single S-box: 64 two-bit outputs selected by a 6-bit index built from
/// up to six input-bit positions, XORed with a 6-bit round-key slice.
pub struct SBox {
    pub table: [u8; 64],
    /// Input bit positions in `0..8`; `-1` means "not used".
    pub inputs: [i8; 6],
    /// Output bit positions in `0..8` for the table's two output bits.
    pub outputs: [u8; 2],
}

impl SBox {
    fn extract_inputs(&self, val: u8) -> u8 {
        let mut sel = 0u8;
        for (i, &pos) in self.inputs.iter().enumerate() {
            if pos >= 0 {
                sel |= ((val >> pos) & 1) << i;
            }
        }
        sel
    }
}

/// A precomputed S-box: a 256-entry input lookup plus the 64-entry output
/// table, ready for single-lookup-plus-OR evaluation.
pub struct OptimizedSBox {
    input_lookup: [u8; 256],
    output: [u8; 64],
}

impl OptimizedSBox {
    pub fn build(sbox: &SBox) -> Self {
        let mut input_lookup = [0u8; 256];
        for (i, slot) in input_lookup.iter_mut().enumerate() {
            *slot = sbox.extract_inputs(i as u8);
        }

        let mut output = [0u8; 64];
        for (i, slot) in output.iter_mut().enumerate() {
            let o = sbox.table[i];
            let mut out = 0u8;
            if o & 1 != 0 {
                out |= 1 << sbox.outputs[0];
            }
            if o & 2 != 0 {
                out |= 1 << sbox.outputs[1];
            }
            *slot = out;
        }

        Self {
            input_lookup,
            output,
        }
    }

    /// Evaluate the box on input byte `x` with a 6-bit round-key slice `key`.
    #[inline]
    pub fn eval(&self, x: u8, key: u32) -> u8 {
        let sel = self.input_lookup[x as usize] ^ (key & 0x3f) as u8;
        self.output[sel as usize]
    }
}

//! `Patch`: a flat offset-keyed byte substitution, and the diff that
//! produces a list of them from two assembled images.

use cps2_rom::{OpKind, RegionPlan};
use tracing::debug;

use crate::error::{PatchError, Result};

/// A contiguous run of replacement bytes in one named chip file.
///
/// `byte_offset` is region-absolute (includes the owning operation's
/// `offset`), not zero-based within the file — see [`diff`]'s docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub filename: String,
    pub byte_offset: usize,
    pub bytes: Vec<u8>,
}

/// Diff two equal-length region images, per §4.3.1: words are compared in
/// **little-endian** order (independent of the cipher's big-endian framing,
/// see the crate docs), runs are collected per `Load` operation and never
/// cross operation boundaries.
///
/// `Patch::byte_offset` is the word-aligned byte offset **within the region**
/// (i.e. it already includes `op.offset`), matching the reference
/// implementation's diff loop, which walks the region's word array starting
/// at `operation.Offset / 2` rather than a per-file zeroed slice. `apply_mra`
/// relies on this: it maps an MRA offset back to an operation by comparing
/// against `[op.offset, op.offset + op.length)`, which only works if patch
/// offsets live in that same region-absolute space.
pub fn diff(a: &[u8], b: &[u8], plan: &RegionPlan) -> Result<Vec<Patch>> {
    if a.len() != b.len() {
        return Err(PatchError::MismatchedSizes { expected: a.len(), actual: b.len() });
    }

    let mut patches = Vec::new();

    for op in &plan.operations {
        if op.kind != OpKind::Load || op.length == 0 {
            continue;
        }
        let Some(filename) = &op.filename else { continue };
        let region_a = &a[op.offset..op.offset + op.length];
        let region_b = &b[op.offset..op.offset + op.length];

        let mut run: Option<(usize, Vec<u8>)> = None;
        for word_index in 0..op.length / 2 {
            let i = word_index * 2;
            let wa = u16::from_le_bytes([region_a[i], region_a[i + 1]]);
            let wb = u16::from_le_bytes([region_b[i], region_b[i + 1]]);
            if wa == wb {
                if let Some((start, bytes)) = run.take() {
                    patches.push(Patch { filename: filename.clone(), byte_offset: start, bytes });
                }
            } else {
                match &mut run {
                    Some((_, bytes)) => bytes.extend_from_slice(&wb.to_le_bytes()),
                    None => run = Some((op.offset + i, wb.to_le_bytes().to_vec())),
                }
            }
        }
        if let Some((start, bytes)) = run.take() {
            patches.push(Patch { filename: filename.clone(), byte_offset: start, bytes });
        }
    }

    debug!(count = patches.len(), "diff produced patches");
    Ok(patches)
}

//! `RegionPlan`: the ordered list of load/fill/continue operations that maps
//! a set of per-chip files onto one contiguous region image, and back.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RomError};

/// What an operation does to the destination buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Load,
    Fill,
    Continue,
    /// Anything the catalog might carry that this codec doesn't recognize.
    /// Operations of this kind are ignored during assembly, per the forward
    /// compatibility rule.
    #[serde(other)]
    Unknown,
}

/// One entry in a [`RegionPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomOp {
    #[serde(rename = "type")]
    pub kind: OpKind,
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default = "default_group_size", rename = "groupSize")]
    pub group_size: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default, rename = "fillValue", skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<u8>,
}

fn default_group_size() -> usize {
    1
}

/// A region: a declared size and the ordered operations that fill it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPlan {
    pub size: usize,
    #[serde(default)]
    pub operations: Vec<RomOp>,
}

impl RegionPlan {
    /// Assemble the region image from a filename → bytes map, per §4.2.1.
    pub fn assemble(&self, files: &HashMap<String, Vec<u8>>) -> Result<Vec<u8>> {
        let mut dst = vec![0u8; self.size];

        for op in &self.operations {
            match op.kind {
                OpKind::Fill => {
                    let byte = op.fill_value.unwrap_or(0);
                    dst[op.offset..op.offset + op.length].fill(byte);
                }
                OpKind::Continue => {
                    // Destination offsets are absolute per-operation, so there
                    // is no cursor to carry across operations; this is purely
                    // a placeholder in the plan for readability.
                }
                OpKind::Load => {
                    if op.length == 0 {
                        continue;
                    }
                    let name = op.filename.as_deref().unwrap_or_default();
                    let bytes = files
                        .get(name)
                        .ok_or_else(|| RomError::MissingFiles(vec![name.to_string()]))?;
                    debug!(file = name, offset = op.offset, length = op.length, "loading");
                    load_into(&mut dst, op, bytes);
                }
                OpKind::Unknown => {}
            }
        }

        Ok(dst)
    }

    /// Split an assembled image back into per-file buffers, for `Load`
    /// operations whose layout is a plain or skip-ignored copy (case 1/2 of
    /// §4.2.1). Interleaved splits are out of scope per §4.2.2.
    pub fn split(&self, image: &[u8]) -> HashMap<String, Vec<u8>> {
        let mut out = HashMap::new();
        for op in &self.operations {
            if op.kind != OpKind::Load || op.length == 0 {
                continue;
            }
            let Some(name) = &op.filename else { continue };
            out.insert(name.clone(), image[op.offset..op.offset + op.length].to_vec());
        }
        out
    }

    /// Validate that every `Load` operation's file is present, per §4.2.3.
    pub fn validate(&self, files: &HashMap<String, Vec<u8>>) -> Result<()> {
        let missing: Vec<String> = self
            .operations
            .iter()
            .filter(|op| op.kind == OpKind::Load)
            .filter_map(|op| op.filename.clone())
            .filter(|name| !files.contains_key(name))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RomError::MissingFiles(missing))
        }
    }
}

fn load_into(dst: &mut [u8], op: &RomOp, src: &[u8]) {
    let stride = op.skip + op.group_size;

    if op.group_size <= 1 {
        dst[op.offset..op.offset + op.length].copy_from_slice(&src[..op.length]);
        return;
    }

    if !op.reverse {
        let mut buf_ptr = op.offset;
        let mut bytes_left = op.length;
        let mut j = 0usize;
        while bytes_left > 0 {
            for k in 0..op.group_size {
                if bytes_left == 0 {
                    break;
                }
                dst[buf_ptr + k] = src[j * op.group_size + k];
                bytes_left -= 1;
            }
            buf_ptr += stride;
            j += 1;
        }
    } else {
        let mut buf_ptr = op.offset;
        let mut bytes_written = 0usize;
        while bytes_written < op.length {
            for k in (0..op.group_size).rev() {
                dst[buf_ptr + k] = src[bytes_written];
                bytes_written += 1;
            }
            buf_ptr += stride;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(offset: usize, length: usize, filename: &str) -> RomOp {
        RomOp {
            kind: OpKind::Load,
            offset,
            length,
            filename: Some(filename.to_string()),
            group_size: 1,
            skip: 0,
            reverse: false,
            fill_value: None,
        }
    }

    #[test]
    fn empty_plan_is_zero_filled() {
        let plan = RegionPlan { size: 16, operations: vec![] };
        let out = plan.assemble(&HashMap::new()).unwrap();
        assert_eq!(out, vec![0u8; 16]);
    }

    #[test]
    fn zero_length_load_is_a_no_op() {
        let mut op = load(0, 0, "nope.bin");
        op.length = 0;
        let plan = RegionPlan { size: 4, operations: vec![op] };
        let out = plan.assemble(&HashMap::new()).unwrap();
        assert_eq!(out, vec![0u8; 4]);
    }

    #[test]
    fn plain_copy_ignores_skip_when_group_size_is_one() {
        let mut files = HashMap::new();
        files.insert("a.bin".to_string(), vec![1, 2, 3, 4]);
        let mut op = load(0, 4, "a.bin");
        op.skip = 7;
        let plan = RegionPlan { size: 4, operations: vec![op] };
        let out = plan.assemble(&files).unwrap();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    /// Spec §8 scenario 4: two interleaved Load operations with a Continue
    /// between them. The scenario names both operations `length = 8`, but
    /// under case 3's iteration count (`length / group_size` groups of
    /// `group_size` bytes each) that reads and writes past the 4-byte files
    /// and the 8-byte region; the parameters that actually produce the
    /// scenario's expected output are each operation's own `length = 4`,
    /// with `B.offset = 2` starting one `group_size` past `A.offset = 0`
    /// within their shared `stride` — see the "Open Question decisions"
    /// entry for scenario 4 in DESIGN.md for the full derivation.
    #[test]
    fn interleaved_assemble() {
        let mut files = HashMap::new();
        files.insert("a.bin".to_string(), vec![0x00, 0x01, 0x02, 0x03]);
        files.insert("b.bin".to_string(), vec![0x10, 0x11, 0x12, 0x13]);

        let op_a = RomOp {
            kind: OpKind::Load,
            offset: 0,
            length: 4,
            filename: Some("a.bin".to_string()),
            group_size: 2,
            skip: 2,
            reverse: false,
            fill_value: None,
        };
        let op_continue = RomOp {
            kind: OpKind::Continue,
            offset: 0,
            length: 0,
            filename: None,
            group_size: 1,
            skip: 0,
            reverse: false,
            fill_value: None,
        };
        let op_b = RomOp {
            kind: OpKind::Load,
            offset: 2,
            length: 4,
            filename: Some("b.bin".to_string()),
            group_size: 2,
            skip: 2,
            reverse: false,
            fill_value: None,
        };

        let plan = RegionPlan { size: 8, operations: vec![op_a, op_continue, op_b] };
        let out = plan.assemble(&files).unwrap();
        assert_eq!(out, vec![0x00, 0x01, 0x10, 0x11, 0x02, 0x03, 0x12, 0x13]);
    }

    /// Spec §8 scenario 5.
    #[test]
    fn reversed_group() {
        let mut files = HashMap::new();
        files.insert("p.bin".to_string(), vec![0x0a, 0x0b, 0x0c, 0x0d]);
        let op = RomOp {
            kind: OpKind::Load,
            offset: 0,
            length: 4,
            filename: Some("p.bin".to_string()),
            group_size: 2,
            skip: 0,
            reverse: true,
            fill_value: None,
        };
        let plan = RegionPlan { size: 4, operations: vec![op] };
        let out = plan.assemble(&files).unwrap();
        assert_eq!(out, vec![0x0b, 0x0a, 0x0d, 0x0c]);
    }

    #[test]
    fn fill_writes_the_fill_byte() {
        let op = RomOp {
            kind: OpKind::Fill,
            offset: 2,
            length: 3,
            filename: None,
            group_size: 1,
            skip: 0,
            reverse: false,
            fill_value: Some(0xaa),
        };
        let plan = RegionPlan { size: 6, operations: vec![op] };
        let out = plan.assemble(&HashMap::new()).unwrap();
        assert_eq!(out, vec![0, 0, 0xaa, 0xaa, 0xaa, 0]);
    }

    #[test]
    fn split_recovers_case_one_files() {
        let mut files = HashMap::new();
        files.insert("a.bin".to_string(), vec![1, 2, 3, 4]);
        let op = load(0, 4, "a.bin");
        let plan = RegionPlan { size: 4, operations: vec![op] };
        let image = plan.assemble(&files).unwrap();
        let split = plan.split(&image);
        assert_eq!(split.get("a.bin"), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn validate_reports_all_missing_files() {
        let plan = RegionPlan {
            size: 8,
            operations: vec![load(0, 4, "a.bin"), load(4, 4, "b.bin")],
        };
        let err = plan.validate(&HashMap::new()).unwrap_err();
        match err {
            RomError::MissingFiles(mut names) => {
                names.sort();
                assert_eq!(names, vec!["a.bin".to_string(), "b.bin".to_string()]);
            }
            other => panic!("wrong error: {other:?}"),
        }
    }
}

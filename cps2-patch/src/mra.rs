//! MRA-format patch text: serializing a [`Patch`] list to the text fragment
//! format described in §4.3.2, and parsing/applying an MRA XML document's
//! `<patch>` elements per §4.3.3.

use std::collections::HashMap;

use cps2_rom::RegionPlan;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::{debug, warn};

use crate::error::{PatchError, Result};
use crate::patch::Patch;

const HEADER_COMMENT: &str =
    "<!-- these patches are for use with .mra files; subtract 0x40 from the offset to get the raw file offset -->\n";

/// The fixed byte adjustment between a patch's in-region offset and the
/// offset an MRA file expects, per §4.3.2/§4.3.3.
const MRA_HEADER_ADJUSTMENT: usize = 0x40;

/// Render a patch list as MRA patch text, grouping consecutive patches for
/// the same file under a `<!-- filename -->` comment.
pub fn to_mra_text(patches: &[Patch]) -> String {
    let mut out = String::from(HEADER_COMMENT);
    let mut current_file: Option<&str> = None;

    for patch in patches {
        if current_file != Some(patch.filename.as_str()) {
            out.push_str(&format!("<!-- {} -->\n", patch.filename));
            current_file = Some(patch.filename.as_str());
        }
        let offset = patch.byte_offset + MRA_HEADER_ADJUSTMENT;
        let hex: Vec<String> = patch.bytes.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&format!("<patch offset=\"{offset:#010x}\">{}</patch>\n", hex.join(" ")));
    }

    out
}

/// One `<patch>` element parsed out of an MRA document, not yet mapped to a
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawPatch {
    offset: usize,
    bytes: Vec<u8>,
}

fn parse_offset(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    usize::from_str_radix(digits, 16)
        .map_err(|e| PatchError::InvalidPatchFormat(format!("bad offset {raw:?}: {e}")))
}

fn parse_hex_bytes(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .map(|tok| {
            u8::from_str_radix(tok, 16)
                .map_err(|e| PatchError::InvalidPatchFormat(format!("bad byte {tok:?}: {e}")))
        })
        .collect()
}

/// Parse every `<patch offset="..">hex..</patch>` element in an MRA XML
/// document, tolerating unrecognized attributes, elements, and whitespace
/// per §9's permissive-parser design note.
fn parse_patches(xml: &str) -> Result<Vec<RawPatch>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text = true;

    let mut patches = Vec::new();
    let mut pending_offset: Option<usize> = None;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(tag) if tag.local_name().as_ref() == b"patch" => {
                let mut offset = None;
                for attr in tag.attributes().flatten() {
                    if attr.key.local_name().as_ref() == b"offset" {
                        let value = attr.unescape_value()?;
                        offset = Some(parse_offset(&value)?);
                    }
                }
                pending_offset = Some(offset.ok_or_else(|| {
                    PatchError::InvalidPatchFormat("<patch> missing offset attribute".to_string())
                })?);
            }
            Event::Text(text) => {
                if let Some(offset) = pending_offset {
                    let content = text.unescape()?;
                    let bytes = parse_hex_bytes(&content)?;
                    patches.push(RawPatch { offset, bytes });
                }
            }
            Event::End(tag) if tag.local_name().as_ref() == b"patch" => {
                pending_offset = None;
            }
            _ => {}
        }
    }

    Ok(patches)
}

/// Apply every `<patch>` in `xml` to `files`, per §4.3.3. Patches whose
/// mapped address falls outside every `Load` operation's range are silently
/// skipped (this is what lets one cross-region MRA file be applied per
/// region in turn).
pub fn apply_mra(
    xml: &str,
    files: &mut HashMap<String, Vec<u8>>,
    plan: &RegionPlan,
    base_offset: usize,
) -> Result<()> {
    let raw_patches = parse_patches(xml)?;
    let mut applied = 0usize;

    for raw in raw_patches {
        let shifted = MRA_HEADER_ADJUSTMENT + base_offset;
        if raw.offset < shifted {
            continue;
        }
        let actual = raw.offset - shifted;

        let target = plan
            .operations
            .iter()
            .filter(|op| op.kind == cps2_rom::OpKind::Load)
            .find(|op| actual >= op.offset && actual < op.offset + op.length);

        let Some(op) = target else {
            warn!(offset = raw.offset, "patch maps to no operation in this region, skipping");
            continue;
        };
        let Some(filename) = &op.filename else { continue };
        let Some(content) = files.get_mut(filename) else {
            warn!(file = filename.as_str(), "patch targets a file not present, skipping");
            continue;
        };

        let file_offset = actual - op.offset;
        let end = file_offset + raw.bytes.len();
        if end > content.len() {
            return Err(PatchError::InvalidPatchFormat(format!(
                "patch at {filename}:{file_offset} ({} bytes) overruns file length {}",
                raw.bytes.len(),
                content.len()
            )));
        }
        content[file_offset..end].copy_from_slice(&raw.bytes);
        applied += 1;
    }

    debug!(applied, "mra patches applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use cps2_rom::{OpKind, RomOp};

    use super::*;
    use crate::patch::Patch;

    fn load_op(offset: usize, length: usize, filename: &str) -> RomOp {
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
    fn serializes_grouped_by_file_with_header_adjustment() {
        let patches = vec![
            Patch { filename: "a.bin".into(), byte_offset: 0, bytes: vec![0xde, 0xad] },
            Patch { filename: "a.bin".into(), byte_offset: 4, bytes: vec![0xbe, 0xef] },
            Patch { filename: "b.bin".into(), byte_offset: 2, bytes: vec![0x11] },
        ];
        let text = to_mra_text(&patches);
        assert!(text.starts_with(HEADER_COMMENT));
        assert!(text.contains("<!-- a.bin -->\n<patch offset=\"0x00000040\">de ad</patch>\n"));
        assert!(text.contains("<patch offset=\"0x00000044\">be ef</patch>\n"));
        assert!(text.contains("<!-- b.bin -->\n<patch offset=\"0x00000042\">11</patch>\n"));
    }

    #[test]
    fn round_trips_through_diff_and_apply() {
        let plan = RegionPlan { size: 8, operations: vec![load_op(0, 8, "a.bin")] };
        let mut files: HashMap<String, Vec<u8>> = HashMap::new();
        files.insert("a.bin".to_string(), vec![0u8; 8]);
        let a = plan.assemble(&files).unwrap();

        let mut target = files.clone();
        target.get_mut("a.bin").unwrap()[2] = 0xaa;
        target.get_mut("a.bin").unwrap()[3] = 0xbb;
        let b = plan.assemble(&target).unwrap();

        let patches = crate::patch::diff(&a, &b, &plan).unwrap();
        let xml = format!(
            "<misterromdescription><rom>{}</rom></misterromdescription>",
            patches
                .iter()
                .map(|p| format!(
                    "<patch offset=\"{:#x}\">{}</patch>",
                    p.byte_offset + MRA_HEADER_ADJUSTMENT,
                    p.bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
                ))
                .collect::<String>()
        );

        let mut applied = files.clone();
        apply_mra(&xml, &mut applied, &plan, 0).unwrap();
        assert_eq!(applied.get("a.bin"), target.get("a.bin"));
    }

    #[test]
    fn tolerates_unknown_attributes_and_elements() {
        let xml = r#"<misterromdescription extra="1">
            <rom name="main">
                <unknown-tag/>
                <patch offset="0x40" weird="attr">DE AD</patch>
            </rom>
        </misterromdescription>"#;
        let patches = parse_patches(xml).unwrap();
        assert_eq!(patches, vec![RawPatch { offset: 0x40, bytes: vec![0xde, 0xad] }]);
    }

    #[test]
    fn unmapped_patch_is_silently_skipped() {
        let plan = RegionPlan { size: 4, operations: vec![load_op(0, 4, "a.bin")] };
        let mut files: HashMap<String, Vec<u8>> = HashMap::new();
        files.insert("a.bin".to_string(), vec![0u8; 4]);
        let xml = r#"<misterromdescription><rom><patch offset="0x1000">FF FF</patch></rom></misterromdescription>"#;
        apply_mra(xml, &mut files, &plan, 0).unwrap();
        assert_eq!(files.get("a.bin"), Some(&vec![0u8; 4]));
    }

    #[test]
    fn malformed_hex_is_invalid_patch_format() {
        let xml = r#"<misterromdescription><rom><patch offset="0x40">ZZ</patch></rom></misterromdescription>"#;
        let err = parse_patches(xml).unwrap_err();
        assert!(matches!(err, PatchError::InvalidPatchFormat(_)));
    }
}

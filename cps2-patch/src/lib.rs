//! The patch engine: diffing two assembled region images into a flat list
//! of offset-keyed byte substitutions, serializing that list to MRA patch
//! text, and applying a parsed MRA document's patches back onto a
//! filename-keyed content map.
//!
//! Diff uses **little-endian** 16-bit word framing, independent of the
//! cipher engine's big-endian framing — the two must never share a
//! word-framing helper.

mod error;
mod mra;
mod patch;

pub use error::{PatchError, Result};
pub use mra::{apply_mra, to_mra_text};
pub use patch::{diff, Patch};

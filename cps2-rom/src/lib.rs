//! Region assembly/disassembly and the per-title ROM-set catalog for
//! CPS2-family arcade ROMs.
//!
//! A [`RegionPlan`] describes how a region's per-chip files interleave into
//! one contiguous image ([`RegionPlan::assemble`]) and back
//! ([`RegionPlan::split`]); a [`RomCatalog`] maps a ROM set name to its five
//! named regions (`maincpu`, `audiocpu`, `gfx`, `qsound`, `key`).

pub mod archive;
pub mod catalog;
pub mod error;
pub mod plan;

pub use archive::RomArchive;
#[cfg(feature = "archive")]
pub use archive::ZipRomArchive;
pub use catalog::{RomCatalog, RomDefinition};
pub use error::{Result, RomError};
pub use plan::{OpKind, RegionPlan, RomOp};

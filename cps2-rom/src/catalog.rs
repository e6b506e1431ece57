//! The static ROM-set catalog: an embedded JSON table mapping a ROM set name
//! to its five region plans. Authoring this table is out of scope; this
//! module only consumes its schema (§6) and exposes lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RomError};
use crate::plan::RegionPlan;

/// The five named regions of a CPS2 ROM set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomDefinition {
    #[serde(default)]
    pub maincpu: RegionPlan,
    #[serde(default)]
    pub audiocpu: RegionPlan,
    #[serde(default)]
    pub gfx: RegionPlan,
    #[serde(default)]
    pub qsound: RegionPlan,
    #[serde(default)]
    pub key: RegionPlan,
}

impl RomDefinition {
    /// The filename of the key blob, per §6 (`catalog[set].key.operations[0].filename`).
    pub fn key_filename(&self) -> Option<&str> {
        self.key.operations.first().and_then(|op| op.filename.as_deref())
    }
}

/// A parsed ROM-set catalog: `{ "<setname>": RomDefinition, ... }`.
#[derive(Debug, Clone, Default)]
pub struct RomCatalog {
    sets: HashMap<String, RomDefinition>,
}

/// The catalog shipped with this crate, embedded at compile time.
static CATALOG_JSON: &str = include_str!("catalog.json");

impl RomCatalog {
    /// Parse a catalog from its JSON representation (§6).
    pub fn from_json(json: &str) -> Result<Self> {
        let sets: HashMap<String, RomDefinition> =
            serde_json::from_str(json).map_err(RomError::Catalog)?;
        Ok(Self { sets })
    }

    /// The catalog embedded in this binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    /// Look up a ROM set's definition by name.
    pub fn get(&self, set: &str) -> Result<&RomDefinition> {
        self.sets
            .get(set)
            .ok_or_else(|| RomError::UnknownRomSet(set.to_string()))
    }

    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = RomCatalog::embedded().unwrap();
        assert!(catalog.set_names().next().is_some());
    }

    #[test]
    fn unknown_set_is_an_error() {
        let catalog = RomCatalog::embedded().unwrap();
        assert!(matches!(catalog.get("does-not-exist"), Err(RomError::UnknownRomSet(_))));
    }

    #[test]
    fn ssf2_key_filename_is_present() {
        let catalog = RomCatalog::embedded().unwrap();
        let ssf2 = catalog.get("ssf2").unwrap();
        assert!(ssf2.key_filename().is_some());
    }
}

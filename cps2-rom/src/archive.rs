//! A minimal read-only archive abstraction: list entries, open by name. The
//! concrete ZIP reader (behind the `archive` feature) and an in-memory map
//! both implement this, so the codec and its tests don't need a real ZIP
//! file on disk.

use std::collections::HashMap;

use crate::error::Result;

/// A read-only container of named byte blobs.
pub trait RomArchive {
    /// Every entry name this archive holds.
    fn entry_names(&self) -> Vec<String>;

    /// Read an entry's full contents by name, or `Ok(None)` if absent.
    fn open(&mut self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Read every entry whose name is in `names` into a filename → bytes map.
    /// Names with no matching entry are simply absent from the result —
    /// callers that need a hard failure should follow up with
    /// [`crate::plan::RegionPlan::validate`].
    fn read_all(&mut self, names: &[String]) -> Result<HashMap<String, Vec<u8>>> {
        let mut out = HashMap::with_capacity(names.len());
        for name in names {
            if let Some(bytes) = self.open(name)? {
                out.insert(name.clone(), bytes);
            }
        }
        Ok(out)
    }
}

/// The simplest possible archive: an in-memory filename → bytes map. Used in
/// tests and by callers that have already extracted files some other way.
impl RomArchive for HashMap<String, Vec<u8>> {
    fn entry_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn open(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(name).cloned())
    }
}

#[cfg(feature = "archive")]
mod zip_archive {
    use std::io::{Read, Seek};

    use super::{HashMap, Result, RomArchive};

    /// A real ZIP file, read lazily by entry name.
    pub struct ZipRomArchive<R: Read + Seek> {
        inner: zip::ZipArchive<R>,
    }

    impl<R: Read + Seek> ZipRomArchive<R> {
        pub fn new(reader: R) -> Result<Self> {
            Ok(Self { inner: zip::ZipArchive::new(reader)? })
        }
    }

    impl<R: Read + Seek> RomArchive for ZipRomArchive<R> {
        fn entry_names(&self) -> Vec<String> {
            self.inner.file_names().map(str::to_string).collect()
        }

        fn open(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
            match self.inner.by_name(name) {
                Ok(mut file) => {
                    let mut buf = Vec::with_capacity(file.size() as usize);
                    file.read_to_end(&mut buf)?;
                    Ok(Some(buf))
                }
                Err(zip::result::ZipError::FileNotFound) => Ok(None),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(feature = "archive")]
pub use zip_archive::ZipRomArchive;

//! Exercises the `zip`-backed [`RomArchive`] adapter against a real ZIP file
//! on disk (a `tempfile::NamedTempFile`, cleaned up on drop), not just an
//! in-memory buffer — closer to how a caller actually drives this adapter
//! against an archive read off the filesystem. Only compiled with the
//! `archive` feature.

#![cfg(feature = "archive")]

use std::fs::File;
use std::io::Write;

use cps2_rom::{RomArchive, ZipRomArchive};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;

fn build_test_zip_file() -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    {
        let mut writer = zip::ZipWriter::new(tmp.reopen().unwrap());
        let options = SimpleFileOptions::default();
        writer.start_file("a.bin", options).unwrap();
        writer.write_all(&[1, 2, 3, 4]).unwrap();
        writer.start_file("b.bin", options).unwrap();
        writer.write_all(&[5, 6, 7, 8]).unwrap();
        writer.finish().unwrap();
    }
    tmp
}

#[test]
fn lists_and_reads_entries() {
    let tmp = build_test_zip_file();
    let file: File = tmp.reopen().unwrap();
    let mut archive = ZipRomArchive::new(file).unwrap();

    let mut names = archive.entry_names();
    names.sort();
    assert_eq!(names, vec!["a.bin".to_string(), "b.bin".to_string()]);

    assert_eq!(archive.open("a.bin").unwrap(), Some(vec![1, 2, 3, 4]));
    assert_eq!(archive.open("missing.bin").unwrap(), None);
}

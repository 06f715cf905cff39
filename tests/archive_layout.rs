//! Byte-level checks of the central directory written by `build_archive`.
//!
//! Unzip tools only honour the mode in the external attributes when the host
//! byte of "version made by" says Unix, so both fields are read straight from
//! the archive bytes rather than through a zip reader.

use build_lambda_zip::common::{CREATOR_UNIX, STORED_UNIX_MODE, UNIX_EXECUTABLE_MODE};
use build_lambda_zip::compress::build_archive_with_progress;
use build_lambda_zip::fsx::to_archive_name;
use std::fs;
use tempfile::tempdir;

const EOCD_SIGNATURE: u32 = 0x0605_4b50;
const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4b50;

struct CentralEntry {
    version_made_by: u16,
    external_attributes: u32,
    name: String,
}

fn u16_at(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn u32_at(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn central_directory(buf: &[u8]) -> Vec<CentralEntry> {
    let eocd = (0..=buf.len() - 22)
        .rev()
        .find(|&i| u32_at(buf, i) == EOCD_SIGNATURE)
        .expect("end of central directory record");
    let count = u16_at(buf, eocd + 10) as usize;
    let mut at = u32_at(buf, eocd + 16) as usize;

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        assert_eq!(u32_at(buf, at), CENTRAL_HEADER_SIGNATURE);
        let name_len = u16_at(buf, at + 28) as usize;
        let extra_len = u16_at(buf, at + 30) as usize;
        let comment_len = u16_at(buf, at + 32) as usize;
        entries.push(CentralEntry {
            version_made_by: u16_at(buf, at + 4),
            external_attributes: u32_at(buf, at + 38),
            name: String::from_utf8(buf[at + 46..at + 46 + name_len].to_vec()).unwrap(),
        });
        at += 46 + name_len + extra_len + comment_len;
    }
    entries
}

#[test]
fn every_entry_is_unix_executable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut sources = Vec::new();
    for (name, data) in [("bootstrap", &b"#!/bin/sh\n"[..]), ("handler.dll", &[0u8; 300][..]), ("empty", &[][..])] {
        let path = dir.path().join(name);
        fs::write(&path, data)?;
        sources.push(path.to_string_lossy().into_owned());
    }
    let out = dir.path().join("layout.zip");
    build_archive_with_progress(Some(out.as_path()), &sources, |_| {})?;

    let entries = central_directory(&fs::read(&out)?);
    assert_eq!(entries.len(), sources.len());
    for (entry, source) in entries.iter().zip(&sources) {
        assert_eq!((entry.version_made_by >> 8) as u8, CREATOR_UNIX);
        assert_eq!(entry.external_attributes, STORED_UNIX_MODE << 16);
        assert_eq!(entry.external_attributes, 0o100777 << 16);
        // Decoded the way unzip does when the host byte says Unix.
        let mode = entry.external_attributes >> 16;
        assert_eq!(mode & 0o777, UNIX_EXECUTABLE_MODE);
        assert_eq!(mode & 0o170000, 0o100000);
        assert_eq!(entry.name, to_archive_name(source));
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn backslash_paths_are_stored_with_forward_slashes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    // On Unix hosts a backslash is an ordinary filename character, so the
    // source file really has this name; the entry must still use `/`.
    let source = r"runtimes\linux-x64\native.so";
    fs::write(dir.path().join(source), b"\x7fELF")?;
    let out = dir.path().join("sep.zip");

    let full_source = dir.path().join(source).to_string_lossy().into_owned();
    build_archive_with_progress(Some(out.as_path()), &[full_source], |_| {})?;

    let entries = central_directory(&fs::read(&out)?);
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].name.contains('\\'));
    assert!(entries[0].name.ends_with("runtimes/linux-x64/native.so"));
    Ok(())
}

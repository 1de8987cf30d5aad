//! # Directory Listing
//!
//! One level of the filesystem, turned into the ordered view the rest of
//! the app addresses: excluded names dropped, search filter applied,
//! directories sorted before files.
//!
//! Listing is all-or-nothing. A child that cannot be classified as file
//! or directory (broken symlink, permission error) fails the whole
//! listing rather than being silently dropped: a listing with holes in
//! it would let the user select something other than what they think
//! they selected.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One filesystem child discovered by a listing. Rebuilt fresh on every
/// listing, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name (basename).
    pub name: String,
    /// Resolved path, rooted at the listed directory.
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Errors that can occur while listing a directory.
#[derive(Debug)]
pub enum ListError {
    /// The directory itself could not be read.
    Read(PathBuf, io::Error),
    /// A child could not be classified as file or directory.
    Stat(PathBuf, io::Error),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Read(path, e) => {
                write!(f, "could not read directory {}: {e}", path.display())
            }
            ListError::Stat(path, e) => write!(f, "could not stat {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for ListError {}

/// Lists the immediate children of `dir`, dropping excluded names and
/// names that do not contain `query` as a literal case-sensitive
/// substring (empty query matches everything), then sorts
/// directories-first.
pub fn list_dir(dir: &Path, excluded: &[&str], query: &str) -> Result<Vec<Entry>, ListError> {
    let read = fs::read_dir(dir).map_err(|e| ListError::Read(dir.to_path_buf(), e))?;

    let mut entries = Vec::new();
    for dirent in read {
        let dirent = dirent.map_err(|e| ListError::Read(dir.to_path_buf(), e))?;
        let name = dirent.file_name().to_string_lossy().into_owned();
        if excluded.contains(&name.as_str()) {
            continue;
        }
        if !name.contains(query) {
            continue;
        }
        let path = dirent.path();
        // Follows symlinks, so a link to a directory lists as a directory.
        let meta = fs::metadata(&path).map_err(|e| ListError::Stat(path.clone(), e))?;
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(Entry { name, path, kind });
    }

    entries.sort_by(compare_entries);
    debug!(
        "listed {} with query {:?}: {} entries",
        dir.display(),
        query,
        entries.len()
    );
    Ok(entries)
}

/// Directories before files; within a kind, case-insensitive name order
/// with the raw name as tiebreaker so the order is total.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::File) => Ordering::Less,
        (EntryKind::File, EntryKind::Directory) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

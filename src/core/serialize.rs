//! # Selection Serialization
//!
//! Turns the committed selection into one tagged text document:
//!
//! ```text
//! <file name="NAME">
//! CONTENT
//! </file>
//!
//! <directory name="NAME">
//! <file name="NESTED_ABSOLUTE_PATH">
//! CONTENT
//! </file>
//! </directory>
//! ```
//!
//! A selected file becomes one block tagged with its display name. A
//! selected directory becomes a `<directory>` wrapper around every file
//! anywhere beneath it - sub-directories are transparent, their files
//! surface as blocks tagged with the file's full path. Blocks are
//! blank-line separated.
//!
//! Serialization is all-or-nothing: any read failure aborts the whole
//! document, because a partial document silently landing on the
//! clipboard is worse than no document.
//!
//! The descent is iterative (explicit stack, children pushed in reverse
//! sorted order so emission matches a recursive depth-first walk) and
//! keeps a set of canonicalized directories it has entered, so deep
//! trees and symlink cycles both terminate. Excluded names are skipped
//! at every depth, same as the top-level listing.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::entries::{Entry, EntryKind, compare_entries};

/// The commit product: the document plus how many `<file>` blocks it
/// contains (directories never count, only the files inside them).
#[derive(Debug)]
pub struct SelectionDocument {
    pub text: String,
    pub file_count: usize,
}

/// Errors that can occur while serializing a selection.
#[derive(Debug)]
pub enum SerializeError {
    /// The recursive walk could not enumerate or classify a path.
    Walk(PathBuf, io::Error),
    /// A file's content could not be read as text.
    Read(PathBuf, io::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Walk(path, e) => {
                write!(f, "could not walk {}: {e}", path.display())
            }
            SerializeError::Read(path, e) => write!(f, "could not read {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for SerializeError {}

/// Serializes every view entry whose path is selected, in view order.
pub fn serialize(
    entries: &[Entry],
    selected: &HashSet<PathBuf>,
    excluded: &[&str],
) -> Result<SelectionDocument, SerializeError> {
    let mut blocks: Vec<String> = Vec::new();
    let mut file_count = 0;

    for entry in entries.iter().filter(|e| selected.contains(&e.path)) {
        match entry.kind {
            EntryKind::File => {
                blocks.push(file_block(&entry.name, &entry.path)?);
                file_count += 1;
            }
            EntryKind::Directory => {
                blocks.push(format!("<directory name=\"{}\">\n", entry.name));
                file_count += walk_directory(&entry.path, excluded, &mut blocks)?;
                blocks.push("</directory>\n".to_string());
            }
        }
    }

    debug!("serialized {file_count} file(s) into {} blocks", blocks.len());
    Ok(SelectionDocument {
        text: blocks.join("\n"),
        file_count,
    })
}

fn file_block(name: &str, path: &Path) -> Result<String, SerializeError> {
    let content =
        fs::read_to_string(path).map_err(|e| SerializeError::Read(path.to_path_buf(), e))?;
    Ok(format!("<file name=\"{name}\">\n{content}\n</file>\n"))
}

/// Emits a block for every file beneath `root` in depth-first order,
/// returning how many were emitted.
fn walk_directory(
    root: &Path,
    excluded: &[&str],
    blocks: &mut Vec<String>,
) -> Result<usize, SerializeError> {
    let mut count = 0;
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut stack: Vec<(PathBuf, EntryKind)> = vec![(root.to_path_buf(), EntryKind::Directory)];

    while let Some((path, kind)) = stack.pop() {
        match kind {
            EntryKind::File => {
                blocks.push(file_block(&path.display().to_string(), &path)?);
                count += 1;
            }
            EntryKind::Directory => {
                let canonical = fs::canonicalize(&path)
                    .map_err(|e| SerializeError::Walk(path.clone(), e))?;
                if !visited.insert(canonical) {
                    // Symlink cycle: this directory is already being walked.
                    debug!("skipping already-visited directory {}", path.display());
                    continue;
                }

                let read =
                    fs::read_dir(&path).map_err(|e| SerializeError::Walk(path.clone(), e))?;
                let mut children = Vec::new();
                for dirent in read {
                    let dirent =
                        dirent.map_err(|e| SerializeError::Walk(path.clone(), e))?;
                    let name = dirent.file_name().to_string_lossy().into_owned();
                    if excluded.contains(&name.as_str()) {
                        continue;
                    }
                    let child = dirent.path();
                    let meta = fs::metadata(&child)
                        .map_err(|e| SerializeError::Walk(child.clone(), e))?;
                    let kind = if meta.is_dir() {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    };
                    children.push(Entry { name, path: child, kind });
                }
                children.sort_by(compare_entries);

                // Reverse so popping yields sorted depth-first order.
                for child in children.into_iter().rev() {
                    stack.push((child.path, child.kind));
                }
            }
        }
    }

    Ok(count)
}

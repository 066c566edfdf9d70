//! Filesystem helpers with "already absent is fine" semantics.

use std::fs;
use std::io;
use std::path::Path;

/// Remove a file, treating a missing file as success.
///
/// Returns `true` if a file was removed.
pub fn remove_file_if_exists(path: &Path) -> io::Result<bool> {
  match fs::remove_file(path) {
    Ok(()) => Ok(true),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(e) => Err(e),
  }
}

/// Copy `from` to `to`, removing whatever exists at `to` first.
///
/// The destination is replaced rather than written through, so a read-only
/// or hard-linked file left by a previous build is never modified in place.
pub fn replace_file(from: &Path, to: &Path) -> io::Result<u64> {
  remove_file_if_exists(to)?;
  fs::copy(from, to)
}

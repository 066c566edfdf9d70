//! Manifest (Info.plist) handling.
//!
//! The manifest declares which bundle files back the primary and alternate
//! icons. This module decodes it into typed values, parses the current icon
//! declarations, diffs them against a scanned catalog, rebuilds them, and
//! writes the file back atomically.

mod diff;
mod store;
mod types;
mod value;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use diff::{ManifestDiff, compute_diff};
pub use store::ManifestStore;
pub use types::*;
pub use value::{Dictionary, Value, decode_root};

/// Errors raised while reading or writing the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// The manifest file could not be read.
  #[error("cannot read manifest {}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file is not a property list.
  #[error("cannot parse manifest {}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: plist::Error,
  },

  /// The property list does not have the expected shape.
  #[error("malformed manifest: {0}")]
  Malformed(String),

  /// The in-memory manifest could not be encoded.
  #[error("cannot serialize manifest")]
  Serialize(#[source] plist::Error),

  /// The manifest file could not be replaced.
  #[error("cannot write manifest {}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

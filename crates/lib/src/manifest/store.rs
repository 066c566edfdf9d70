//! Loading, rewriting and persisting the manifest file.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::IconSet;

use super::ManifestError;
use super::types::{ALTERNATE_ICONS_KEY, ICON_NAME_KEY, IconScope, ManifestEntry, ManifestSnapshot, PRIMARY_ICON_KEY};
use super::value::{Dictionary, Value, decode_root};

/// In-memory copy of a manifest file.
#[derive(Debug, Clone)]
pub struct ManifestStore {
  path: PathBuf,
  root: Dictionary,
}

impl ManifestStore {
  /// Read and decode a manifest file.
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let bytes = fs::read(path).map_err(|source| ManifestError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let value = plist::Value::from_reader(Cursor::new(bytes)).map_err(|source| ManifestError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    let root = decode_root(value)?;
    debug!(path = %path.display(), keys = root.len(), "loaded manifest");

    Ok(Self {
      path: path.to_path_buf(),
      root,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn root(&self) -> &Dictionary {
    &self.root
  }

  /// Icon declarations currently held in memory.
  pub fn snapshot(&self) -> ManifestSnapshot {
    ManifestSnapshot::from_root(&self.root)
  }

  /// Rebuild both idiom-scoped icon dictionaries from the given icon sets.
  ///
  /// The previous icon dictionaries are replaced entirely; other manifest
  /// keys are left untouched.
  pub fn update(&mut self, alternates: &[&IconSet], primary: &IconSet) {
    for scope in IconScope::ALL {
      let mut primary_dict = ManifestEntry::from_icon_set(primary, scope).to_dictionary();
      primary_dict.insert(ICON_NAME_KEY.to_string(), Value::from(primary.name()));

      let alternate_dicts: Dictionary = alternates
        .iter()
        .map(|set| {
          let entry = ManifestEntry::from_icon_set(set, scope);
          (entry.name.clone(), Value::Dictionary(entry.to_dictionary()))
        })
        .collect();

      let mut icons = Dictionary::new();
      icons.insert(PRIMARY_ICON_KEY.to_string(), Value::Dictionary(primary_dict));
      icons.insert(ALTERNATE_ICONS_KEY.to_string(), Value::Dictionary(alternate_dicts));

      debug!(key = scope.key(), alternates = alternates.len(), "rebuilt icon dictionary");
      self.root.insert(scope.key().to_string(), Value::Dictionary(icons));
    }
  }

  /// Write the manifest back to its file as an XML property list.
  ///
  /// The content is written to a temporary file in the same directory and
  /// renamed over the original, so the manifest is never left truncated.
  pub fn commit(&self) -> Result<(), ManifestError> {
    let write_error = |source: io::Error| ManifestError::Write {
      path: self.path.clone(),
      source,
    };

    let dir = match self.path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    plist::Value::from(Value::Dictionary(self.root.clone()))
      .to_writer_xml(&mut temp)
      .map_err(ManifestError::Serialize)?;
    temp.as_file().sync_all().map_err(write_error)?;

    // Keep the original file mode; temp files are created owner-only.
    if let Ok(meta) = fs::metadata(&self.path) {
      temp.as_file().set_permissions(meta.permissions()).map_err(write_error)?;
    }

    temp.persist(&self.path).map_err(|e| write_error(e.error))?;
    info!(path = %self.path.display(), "manifest written");
    Ok(())
  }
}

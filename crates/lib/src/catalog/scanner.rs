//! Asset catalog scanning.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::consts::{DESCRIPTOR_FILE_NAME, ICON_SET_EXTENSION};

use super::{Catalog, CatalogError, IconSet};

/// Scan a catalog directory for icon sets.
///
/// Only direct subfolders with the icon-set extension that contain a
/// descriptor file are considered; anything else is skipped, including
/// entries that cannot be inspected (a dangling link, for instance) unless
/// they carry the icon-set extension. Icon sets are returned in file-name
/// order.
pub fn scan(catalog_dir: &Path) -> Result<Catalog, CatalogError> {
  info!(catalog = %catalog_dir.display(), "scanning asset catalog");

  let unreadable = |source: io::Error| CatalogError::Unreadable {
    path: catalog_dir.to_path_buf(),
    source,
  };

  if !fs::metadata(catalog_dir).map_err(unreadable)?.is_dir() {
    return Err(unreadable(io::ErrorKind::NotADirectory.into()));
  }

  let walker = WalkDir::new(catalog_dir)
    .min_depth(1)
    .max_depth(1)
    .follow_links(true)
    .sort_by_file_name();

  let mut icon_sets = Vec::new();

  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      Err(err) if err.depth() > 0 && !err.path().is_some_and(has_icon_set_extension) => {
        debug!(error = %err, "unreadable catalog entry, skipping");
        continue;
      }
      Err(err) => return Err(unreadable(err.into())),
    };

    let path = entry.path();
    if !entry.file_type().is_dir() || !has_icon_set_extension(path) {
      continue;
    }

    if !path.join(DESCRIPTOR_FILE_NAME).is_file() {
      debug!(folder = %path.display(), "icon set without descriptor, skipping");
      continue;
    }

    icon_sets.push(IconSet::load(path)?);
  }

  info!(icon_sets = icon_sets.len(), "catalog scanned");
  Ok(Catalog::new(icon_sets))
}

fn has_icon_set_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext == ICON_SET_EXTENSION)
}

//! Diff between the icons a manifest declares and a freshly scanned catalog.
//!
//! Alternate icons declared in the manifest whose icon set no longer exists
//! are reported as removed; their bundle files are stale and get deleted.
//! A removed entry is cleanup work, never an error.

use std::collections::BTreeSet;

use crate::catalog::Catalog;

use super::types::{ManifestEntry, ManifestSnapshot};

/// Difference between previously declared and currently scanned alternates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestDiff {
  /// Declared entries (either idiom scope) with no matching alternate icon set.
  pub removed: BTreeSet<ManifestEntry>,

  /// Alternate icon sets not declared before.
  pub added: BTreeSet<String>,

  /// Alternate icon sets declared before and still present.
  pub retained: BTreeSet<String>,
}

impl ManifestDiff {
  /// Returns true if the set of alternate icons did not change.
  pub fn is_empty(&self) -> bool {
    self.removed.is_empty() && self.added.is_empty()
  }

  /// Names of the removed icons.
  pub fn removed_names(&self) -> BTreeSet<&str> {
    self.removed.iter().map(|entry| entry.name.as_str()).collect()
  }

  /// Bundle file names (with extension) declared by removed entries.
  pub fn stale_files(&self) -> BTreeSet<String> {
    self.removed.iter().flat_map(|entry| entry.bundle_files()).collect()
  }
}

/// Compute the diff between a manifest snapshot and a scanned catalog.
pub fn compute_diff(previous: &ManifestSnapshot, current: &Catalog) -> ManifestDiff {
  let current_names: BTreeSet<&str> = current.alternates().map(|set| set.name()).collect();
  let previous_names = previous.alternate_names();

  let removed = previous
    .all_alternates()
    .filter(|entry| !current_names.contains(entry.name.as_str()))
    .cloned()
    .collect();

  let added = current_names
    .difference(&previous_names)
    .map(|name| name.to_string())
    .collect();

  let retained = current_names
    .intersection(&previous_names)
    .map(|name| name.to_string())
    .collect();

  ManifestDiff {
    removed,
    added,
    retained,
  }
}

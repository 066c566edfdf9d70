//! The sync pipeline.

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{IconSet, scan};
use crate::config::BuildContext;
use crate::manifest::{ManifestDiff, ManifestStore, compute_diff};
use crate::util::fs::{remove_file_if_exists, replace_file};

use super::types::{SyncError, SyncErrorKind, SyncReport, SyncStage};

/// Run the full pipeline for a build context.
///
/// 1. Scan the asset catalog and pick out the primary icon set
/// 2. Load the manifest and snapshot its current icon declarations
/// 3. Diff the declared alternates against the catalog
/// 4. Delete bundle files of alternates that no longer exist
/// 5. Rebuild the icon dictionaries
/// 6. Write the manifest back
/// 7. Copy every image of every icon set into the bundle
///
/// Stages 1-3 only read. A missing primary icon set or an unreadable
/// manifest therefore aborts before anything on disk changes.
pub fn sync(ctx: &BuildContext) -> Result<SyncReport, SyncError> {
  info!(
    catalog = %ctx.catalog_dir.display(),
    bundle = %ctx.bundle_dir.display(),
    manifest = %ctx.manifest_path.display(),
    "starting icon sync"
  );

  let mut stage = SyncStage::ScanCatalog;
  info!(%stage, "entering stage");
  let catalog = scan(&ctx.catalog_dir).map_err(|e| SyncError::new(stage, e))?;
  let (primary, alternates) = catalog.partition().map_err(|e| SyncError::new(stage, e))?;
  info!(primary = primary.name(), alternates = alternates.len(), "catalog ready");

  stage = SyncStage::LoadManifest;
  info!(%stage, "entering stage");
  if !ctx.bundle_dir.is_dir() {
    return Err(SyncError::new(
      stage,
      SyncErrorKind::MissingBundle(ctx.bundle_dir.clone()),
    ));
  }
  let mut store = ManifestStore::load(&ctx.manifest_path).map_err(|e| SyncError::new(stage, e))?;
  let previous = store.snapshot();

  stage = SyncStage::ComputeDiff;
  info!(%stage, "entering stage");
  let diff = compute_diff(&previous, &catalog);
  info!(
    removed = diff.removed.len(),
    added = diff.added.len(),
    retained = diff.retained.len(),
    "computed diff"
  );

  stage = SyncStage::DeleteStaleFiles;
  info!(%stage, "entering stage");
  let files_deleted = delete_stale_files(&ctx.bundle_dir, &diff).map_err(|e| SyncError::new(stage, e))?;

  stage = SyncStage::UpdateManifest;
  info!(%stage, "entering stage");
  store.update(&alternates, primary);

  stage = SyncStage::CommitManifest;
  info!(%stage, "entering stage");
  store.commit().map_err(|e| SyncError::new(stage, e))?;

  stage = SyncStage::CopyCurrentFiles;
  info!(%stage, "entering stage");
  let icon_sets: Vec<&IconSet> = std::iter::once(primary).chain(alternates.iter().copied()).collect();
  let files_copied = copy_current_files(&ctx.bundle_dir, &icon_sets).map_err(|e| SyncError::new(stage, e))?;

  info!(stage = %SyncStage::Done, files_deleted, files_copied, "icon sync complete");

  Ok(SyncReport {
    primary: primary.name().to_string(),
    alternates: alternates.iter().map(|set| set.name().to_string()).collect(),
    diff,
    files_deleted,
    files_copied,
  })
}

/// Delete the bundle files declared by removed entries.
///
/// Only the names the manifest declared are touched. Those are de-duplicated
/// per idiom, so other scale variants a previous run copied for a removed icon
/// set stay in the bundle until the next clean build.
///
/// Returns the number of files actually removed; already absent files are skipped.
fn delete_stale_files(bundle_dir: &Path, diff: &ManifestDiff) -> Result<usize, SyncErrorKind> {
  let mut deleted = 0;

  for file in diff.stale_files() {
    let path = bundle_dir.join(&file);
    let removed = remove_file_if_exists(&path).map_err(|source| SyncErrorKind::Delete {
      path: path.clone(),
      source,
    })?;

    if removed {
      debug!(path = %path.display(), "deleted stale icon file");
      deleted += 1;
    } else {
      debug!(path = %path.display(), "stale icon file already absent");
    }
  }

  Ok(deleted)
}

/// Copy every resolvable image of the given icon sets into the bundle.
///
/// All idioms are included and nothing is de-duplicated; existing files at the
/// destination are replaced.
fn copy_current_files(bundle_dir: &Path, icon_sets: &[&IconSet]) -> Result<usize, SyncErrorKind> {
  let files = icon_sets.iter().flat_map(|set| set.resolve_files(None, false));
  let mut copied = 0;

  for file in files {
    let destination = bundle_dir.join(&file.destination_name);
    replace_file(&file.source_path, &destination).map_err(|source| SyncErrorKind::Copy {
      from: file.source_path.clone(),
      to: destination.clone(),
      source,
    })?;
    debug!(from = %file.source_path.display(), to = %destination.display(), "copied icon file");
    copied += 1;
  }

  Ok(copied)
}

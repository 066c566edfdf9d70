//! Stages, results and errors of a sync run.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::manifest::{ManifestDiff, ManifestError};

/// Pipeline stages, in execution order.
///
/// Stages run strictly in sequence. A failure in any stage aborts the
/// remaining ones; work done by earlier stages is not rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyncStage {
  ScanCatalog,
  LoadManifest,
  ComputeDiff,
  DeleteStaleFiles,
  UpdateManifest,
  CommitManifest,
  CopyCurrentFiles,
  Done,
}

impl SyncStage {
  pub fn as_str(self) -> &'static str {
    match self {
      SyncStage::ScanCatalog => "scan catalog",
      SyncStage::LoadManifest => "load manifest",
      SyncStage::ComputeDiff => "compute diff",
      SyncStage::DeleteStaleFiles => "delete stale files",
      SyncStage::UpdateManifest => "update manifest",
      SyncStage::CommitManifest => "commit manifest",
      SyncStage::CopyCurrentFiles => "copy current files",
      SyncStage::Done => "done",
    }
  }

  /// Whether this stage modifies the manifest or the bundle.
  pub fn is_mutating(self) -> bool {
    matches!(
      self,
      SyncStage::DeleteStaleFiles | SyncStage::CommitManifest | SyncStage::CopyCurrentFiles
    )
  }
}

impl fmt::Display for SyncStage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Summary of a completed sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
  /// Name of the primary icon set.
  pub primary: String,

  /// Alternate icon sets now declared, in catalog order.
  pub alternates: Vec<String>,

  /// Diff between the previous manifest and the scanned catalog.
  pub diff: ManifestDiff,

  /// Stale bundle files that were deleted.
  pub files_deleted: usize,

  /// Image files copied into the bundle.
  pub files_copied: usize,
}

/// A sync run failure and the stage it happened in.
#[derive(Debug, Error)]
#[error("failed to {stage}")]
pub struct SyncError {
  pub stage: SyncStage,
  #[source]
  pub kind: SyncErrorKind,
}

impl SyncError {
  pub fn new(stage: SyncStage, kind: impl Into<SyncErrorKind>) -> Self {
    Self {
      stage,
      kind: kind.into(),
    }
  }
}

/// What went wrong in a sync run.
#[derive(Debug, Error)]
pub enum SyncErrorKind {
  #[error(transparent)]
  Catalog(#[from] CatalogError),

  #[error(transparent)]
  Manifest(#[from] ManifestError),

  /// The bundle directory does not exist.
  #[error("bundle directory {} does not exist", .0.display())]
  MissingBundle(PathBuf),

  /// A stale bundle file exists but could not be removed.
  #[error("cannot delete {}", .path.display())]
  Delete {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// An image could not be copied into the bundle.
  #[error("cannot copy {} to {}", .from.display(), .to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },
}

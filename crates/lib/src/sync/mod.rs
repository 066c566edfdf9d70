//! Catalog-to-bundle synchronisation.
//!
//! Sequences the scan, diff, manifest rewrite and bundle file
//! reconciliation. This is the only module that changes files on disk
//! besides [`ManifestStore::commit`](crate::manifest::ManifestStore::commit).

mod pipeline;
mod types;

pub use pipeline::sync;
pub use types::{SyncError, SyncErrorKind, SyncReport, SyncStage};

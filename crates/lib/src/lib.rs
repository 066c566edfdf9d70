//! alticons-lib: alternate app icon wiring for application bundles.
//!
//! Scans an asset catalog for icon sets, declares them as primary and
//! alternate icons in the bundle manifest, and reconciles the bundle's icon
//! image files with the catalog:
//! - `catalog`: icon sets, image variants and destination naming
//! - `manifest`: typed manifest values, icon declarations, diffing
//! - `sync`: the staged pipeline tying both together
//! - `config`: the build context the pipeline runs against

pub mod catalog;
pub mod config;
pub mod consts;
pub mod manifest;
pub mod sync;
pub mod util;

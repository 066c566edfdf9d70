//! Shared utilities.
//!
//! Filesystem helpers used by the sync pipeline, and test fixtures.

pub mod fs;

#[cfg(test)]
pub mod testutil;

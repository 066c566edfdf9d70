//! The sync run performed on every invocation.
//!
//! Reads the build context from the environment, runs the sync pipeline and
//! prints a summary of what changed in the bundle.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use alticons_lib::config::BuildContext;
use alticons_lib::sync::sync;

use crate::output::{format_duration, print_info, print_stat, print_success};

pub fn cmd_sync() -> Result<()> {
  let started = Instant::now();

  print_info("Parsing build context");
  let ctx = BuildContext::from_env().context("invalid build context")?;
  debug!(?ctx, "build context");

  print_info(&format!("Syncing icons from {}", ctx.catalog_dir.display()));
  let report = sync(&ctx).inspect_err(|err| {
    if err.stage.is_mutating() {
      warn!(stage = %err.stage, "bundle left partially updated, the next build finishes the sync");
    }
  })?;

  print_stat("Primary icon", &report.primary);
  print_stat("Alternate icons", &report.alternates.len().to_string());
  if !report.diff.added.is_empty() {
    print_stat("Added", &join(report.diff.added.iter().map(String::as_str)));
  }
  if !report.diff.removed.is_empty() {
    print_stat("Removed", &join(report.diff.removed_names()));
  }
  print_stat("Files copied", &report.files_copied.to_string());
  print_stat("Files deleted", &report.files_deleted.to_string());

  print_success(&format!("Done in {}", format_duration(started.elapsed())));
  Ok(())
}

fn join<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
  names.into_iter().collect::<Vec<_>>().join(", ")
}

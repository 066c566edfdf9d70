mod cmd;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alticons_lib::consts::APP_NAME;

/// Wire alternate app icons from an asset catalog into the app bundle.
///
/// Meant to run as a build phase. Every input comes from the build
/// environment: BUILT_PRODUCTS_DIR, CONTENTS_FOLDER_PATH and
/// SCRIPT_INPUT_FILE_0 (the asset catalog), plus the optional INFOPLIST_PATH.
#[derive(Parser)]
#[command(name = APP_NAME, author, version, about, long_about)]
struct Cli {}

fn main() -> ExitCode {
  let _cli = Cli::parse();

  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cmd::cmd_sync() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      output::print_error(&format!("{err:#}"));
      ExitCode::FAILURE
    }
  }
}

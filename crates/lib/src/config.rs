//! Build context read from the invoking build system.
//!
//! The context is resolved once at process start and handed to the sync
//! pipeline; nothing below this module reads the environment.
//!
//! # Variables
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BUILT_PRODUCTS_DIR` | Build-output directory |
//! | `CONTENTS_FOLDER_PATH` | Bundle-contents subpath, relative to the build-output directory |
//! | `SCRIPT_INPUT_FILE_COUNT` | Number of input files |
//! | `SCRIPT_INPUT_FILE_<n>` | Input file `n`; the first one is the asset catalog |
//! | `INFOPLIST_PATH` | Optional manifest path, relative to the build-output directory |

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::DEFAULT_MANIFEST_NAME;

pub const BUILT_PRODUCTS_DIR: &str = "BUILT_PRODUCTS_DIR";
pub const CONTENTS_FOLDER_PATH: &str = "CONTENTS_FOLDER_PATH";
pub const SCRIPT_INPUT_FILE_COUNT: &str = "SCRIPT_INPUT_FILE_COUNT";
pub const SCRIPT_INPUT_FILE_PREFIX: &str = "SCRIPT_INPUT_FILE_";
pub const INFOPLIST_PATH: &str = "INFOPLIST_PATH";

/// Errors raised while reading the build context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// A required variable is not set.
  #[error("missing required build setting {0}")]
  Missing(String),

  /// A required variable is set to an empty string.
  #[error("build setting {0} is empty")]
  Empty(String),

  /// The input file count is not a number.
  #[error("invalid SCRIPT_INPUT_FILE_COUNT value {0:?}")]
  InvalidCount(String),

  /// No input files were declared, so there is no asset catalog.
  #[error("no input files declared; the asset catalog must be the first input file")]
  NoInputFiles,
}

/// Paths the sync pipeline operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
  /// Bundle directory receiving the icon images.
  pub bundle_dir: PathBuf,
  /// Manifest file rewritten with the icon declarations.
  pub manifest_path: PathBuf,
  /// Asset catalog holding the icon sets.
  pub catalog_dir: PathBuf,
  /// Every declared input file, in order. The first one is `catalog_dir`.
  pub input_files: Vec<PathBuf>,
}

impl BuildContext {
  /// Read the build context from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Read the build context through an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |name: &str| -> Result<String, ConfigError> {
      match lookup(name) {
        None => Err(ConfigError::Missing(name.to_string())),
        Some(value) if value.is_empty() => Err(ConfigError::Empty(name.to_string())),
        Some(value) => Ok(value),
      }
    };

    let built_products_dir = PathBuf::from(required(BUILT_PRODUCTS_DIR)?);
    let contents_folder = required(CONTENTS_FOLDER_PATH)?;
    let bundle_dir = join_relative(&built_products_dir, &contents_folder);

    let count_value = required(SCRIPT_INPUT_FILE_COUNT)?;
    let count: usize = count_value
      .trim()
      .parse()
      .map_err(|_| ConfigError::InvalidCount(count_value.clone()))?;
    if count == 0 {
      return Err(ConfigError::NoInputFiles);
    }

    let input_files = (0..count)
      .map(|index| required(&format!("{SCRIPT_INPUT_FILE_PREFIX}{index}")).map(PathBuf::from))
      .collect::<Result<Vec<_>, _>>()?;

    let manifest_path = match lookup(INFOPLIST_PATH).filter(|value| !value.is_empty()) {
      Some(relative) => join_relative(&built_products_dir, &relative),
      None => bundle_dir.join(DEFAULT_MANIFEST_NAME),
    };

    Ok(Self {
      bundle_dir,
      manifest_path,
      catalog_dir: input_files[0].clone(),
      input_files,
    })
  }
}

/// Join a build-setting subpath onto a base directory.
///
/// Build settings such as `CONTENTS_FOLDER_PATH` are always relative to the
/// build-output directory, even when written with a leading separator.
fn join_relative(base: &Path, relative: &str) -> PathBuf {
  base.join(relative.trim_start_matches(['/', '\\']))
}

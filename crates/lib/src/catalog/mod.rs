//! Asset catalog model: icon sets, their images, and catalog scanning.

mod icon_set;
mod image;
mod scanner;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::consts::PRIMARY_ICON_SET_NAME;

pub use icon_set::{IconSet, ResolvedImageFile};
pub use image::{IconImage, Idiom, Scale};
pub use scanner::scan;

/// Errors raised while reading an asset catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// The catalog directory could not be listed.
  #[error("cannot read asset catalog {}", .path.display())]
  Unreadable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// An icon-set descriptor is missing, unreadable or invalid.
  #[error("malformed descriptor in icon set '{icon_set}': {reason}")]
  MalformedDescriptor { icon_set: String, reason: String },

  /// No icon set carries the reserved primary name.
  #[error("no icon set named 'AppIcon' found in the asset catalog")]
  NoPrimaryIconSet,
}

/// The icon sets found in one catalog scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  icon_sets: Vec<IconSet>,
}

impl Catalog {
  pub fn new(icon_sets: Vec<IconSet>) -> Self {
    Self { icon_sets }
  }

  pub fn icon_sets(&self) -> &[IconSet] {
    &self.icon_sets
  }

  pub fn len(&self) -> usize {
    self.icon_sets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.icon_sets.is_empty()
  }

  pub fn get(&self, name: &str) -> Option<&IconSet> {
    self.icon_sets.iter().find(|set| set.name() == name)
  }

  /// The primary icon set, if the catalog has one.
  pub fn primary(&self) -> Option<&IconSet> {
    self.get(PRIMARY_ICON_SET_NAME)
  }

  /// Every icon set except the primary one.
  pub fn alternates(&self) -> impl Iterator<Item = &IconSet> {
    self.icon_sets.iter().filter(|set| set.name() != PRIMARY_ICON_SET_NAME)
  }

  /// Split into the primary icon set and the alternates.
  pub fn partition(&self) -> Result<(&IconSet, Vec<&IconSet>), CatalogError> {
    let primary = self.primary().ok_or(CatalogError::NoPrimaryIconSet)?;
    Ok((primary, self.alternates().collect()))
  }
}

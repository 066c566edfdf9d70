//! Icon sets and the destination naming of their images.
//!
//! Every image of an icon set is copied into the bundle under a name derived
//! from the icon-set name and the image's size, scale and idiom:
//!
//! ```text
//! <icon set><size>[@<scale>][~ipad].png
//! Dark29x29@2x.png
//! Dark76x76~ipad.png
//! ```
//!
//! The `<icon set><size>` prefix is the image's base name. Manifests that only
//! need one representative file per nominal size de-duplicate on it.

use std::collections::HashSet;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::{DESCRIPTOR_FILE_NAME, IMAGE_EXTENSION};

use super::CatalogError;
use super::image::{Descriptor, DescriptorImage, IconImage, Idiom};

/// A named folder of image variants representing one icon.
///
/// Equality and hashing are structural over the name and the images.
#[derive(Debug, Clone)]
pub struct IconSet {
  name: String,
  folder: PathBuf,
  images: Vec<IconImage>,
}

/// An image of an icon set resolved to its source and bundle destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImageFile {
  /// `<icon set><size>`, the de-duplication key.
  pub base_name: String,
  /// Image file inside the icon-set folder.
  pub source_path: PathBuf,
  /// File name in the bundle, including the extension.
  pub destination_name: String,
}

impl ResolvedImageFile {
  /// Destination name without the image extension, as declared in the manifest.
  pub fn destination_stem(&self) -> &str {
    self
      .destination_name
      .strip_suffix(&format!(".{IMAGE_EXTENSION}"))
      .unwrap_or(&self.destination_name)
  }
}

impl IconSet {
  /// Build an icon set from already-parsed images.
  ///
  /// Exact duplicate images are dropped, keeping the first occurrence.
  pub fn new(name: impl Into<String>, folder: impl Into<PathBuf>, images: Vec<IconImage>) -> Self {
    let mut seen = HashSet::new();
    let images = images.into_iter().filter(|image| seen.insert(image.clone())).collect();
    Self {
      name: name.into(),
      folder: folder.into(),
      images,
    }
  }

  /// Load an icon set from its folder by parsing the descriptor file.
  pub fn load(folder: &Path) -> Result<Self, CatalogError> {
    let name = folder
      .file_stem()
      .map(|stem| stem.to_string_lossy().into_owned())
      .unwrap_or_default();

    let descriptor_path = folder.join(DESCRIPTOR_FILE_NAME);
    let content = fs::read_to_string(&descriptor_path).map_err(|e| CatalogError::MalformedDescriptor {
      icon_set: name.clone(),
      reason: format!("cannot read {}: {}", descriptor_path.display(), e),
    })?;

    let descriptor: Descriptor = serde_json::from_str(&content).map_err(|e| CatalogError::MalformedDescriptor {
      icon_set: name.clone(),
      reason: e.to_string(),
    })?;

    let images = descriptor
      .images
      .into_iter()
      .filter_map(DescriptorImage::into_icon_image)
      .collect::<Vec<_>>();

    debug!(icon_set = %name, images = images.len(), "loaded icon set");
    Ok(Self::new(name, folder, images))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn folder(&self) -> &Path {
    &self.folder
  }

  /// Images in descriptor order.
  pub fn images(&self) -> &[IconImage] {
    &self.images
  }

  /// Resolve images to their bundle destination names.
  ///
  /// Images are visited in descriptor order. An image is skipped when:
  /// - `idiom` is given and the image targets another idiom,
  /// - its source file does not exist in the icon-set folder,
  /// - `deduplicate` is set and an earlier image already produced its base name.
  pub fn resolve_files(&self, idiom: Option<&Idiom>, deduplicate: bool) -> Vec<ResolvedImageFile> {
    let mut emitted = HashSet::new();
    let mut files = Vec::new();

    for image in &self.images {
      if idiom.is_some_and(|wanted| *wanted != image.idiom) {
        continue;
      }

      let source_path = self.folder.join(&image.filename);
      if !source_path.is_file() {
        warn!(
          icon_set = %self.name,
          file = %image.filename,
          "image declared but not found, skipping"
        );
        continue;
      }

      let base_name = format!("{}{}", self.name, image.size);
      if deduplicate && !emitted.insert(base_name.clone()) {
        continue;
      }

      let destination_name = format!(
        "{}{}{}.{}",
        base_name,
        image.scale.file_suffix(),
        image.idiom.file_suffix(),
        IMAGE_EXTENSION
      );

      files.push(ResolvedImageFile {
        base_name,
        source_path,
        destination_name,
      });
    }

    files
  }
}

impl PartialEq for IconSet {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name && self.images == other.images
  }
}

impl Eq for IconSet {}

impl Hash for IconSet {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.name.hash(state);
    self.images.hash(state);
  }
}

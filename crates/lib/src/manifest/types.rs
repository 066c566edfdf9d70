//! Icon declarations as they appear in the manifest.
//!
//! # Layout
//!
//! Each idiom scope has its own top-level key with the same shape:
//!
//! ```text
//! CFBundleIcons (phone) / CFBundleIcons~ipad (pad)
//! ├── CFBundlePrimaryIcon
//! │   ├── CFBundleIconFiles = [AppIcon29x29, AppIcon60x60, ...]
//! │   └── CFBundleIconName  = AppIcon
//! └── CFBundleAlternateIcons
//!     ├── Dark  → { CFBundleIconFiles = [Dark29x29@2x, ...] }
//!     └── Light → { CFBundleIconFiles = [...] }
//! ```
//!
//! File entries are bundle file names without the image extension.

use std::collections::BTreeSet;

use crate::catalog::{IconSet, Idiom};
use crate::consts::{IMAGE_EXTENSION, PRIMARY_ICON_SET_NAME};

use super::value::{Dictionary, Value};

pub const ICONS_KEY: &str = "CFBundleIcons";
pub const ICONS_PAD_KEY: &str = "CFBundleIcons~ipad";
pub const PRIMARY_ICON_KEY: &str = "CFBundlePrimaryIcon";
pub const ALTERNATE_ICONS_KEY: &str = "CFBundleAlternateIcons";
pub const ICON_FILES_KEY: &str = "CFBundleIconFiles";
pub const ICON_NAME_KEY: &str = "CFBundleIconName";

/// Idiom scope of an icon dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconScope {
  Phone,
  Pad,
}

impl IconScope {
  pub const ALL: [IconScope; 2] = [IconScope::Phone, IconScope::Pad];

  /// Top-level manifest key holding this scope's icon dictionary.
  pub fn key(self) -> &'static str {
    match self {
      IconScope::Phone => ICONS_KEY,
      IconScope::Pad => ICONS_PAD_KEY,
    }
  }

  /// Image idiom selected for this scope.
  pub fn idiom(self) -> Idiom {
    match self {
      IconScope::Phone => Idiom::Phone,
      IconScope::Pad => Idiom::Pad,
    }
  }
}

/// One icon as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManifestEntry {
  pub name: String,
  /// Bundle file names without extension.
  pub files: Vec<String>,
}

impl ManifestEntry {
  pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
    Self {
      name: name.into(),
      files,
    }
  }

  /// Declaration for an icon set within one idiom scope.
  ///
  /// Files are filtered to the scope's idiom and de-duplicated by base name.
  pub fn from_icon_set(set: &IconSet, scope: IconScope) -> Self {
    let idiom = scope.idiom();
    let files = set
      .resolve_files(Some(&idiom), true)
      .iter()
      .map(|file| file.destination_stem().to_string())
      .collect();
    Self::new(set.name(), files)
  }

  /// Decode an icon sub-dictionary. A missing or non-list file entry yields no files.
  pub fn from_value(name: impl Into<String>, value: &Value) -> Self {
    let files = value
      .as_dictionary()
      .and_then(|dict| dict.get(ICON_FILES_KEY))
      .and_then(Value::as_array)
      .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
      .unwrap_or_default();
    Self::new(name, files)
  }

  /// Encode as `{ CFBundleIconFiles = [...] }`.
  pub fn to_dictionary(&self) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert(ICON_FILES_KEY.to_string(), Value::string_array(self.files.iter().cloned()));
    dict
  }

  /// File names in the bundle, with the image extension.
  pub fn bundle_files(&self) -> impl Iterator<Item = String> + '_ {
    self.files.iter().map(|file| format!("{file}.{IMAGE_EXTENSION}"))
  }
}

/// Icon declarations parsed from a manifest before it is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSnapshot {
  pub primary: Option<ManifestEntry>,
  pub alternates: BTreeSet<ManifestEntry>,
  pub alternates_pad: BTreeSet<ManifestEntry>,
}

impl ManifestSnapshot {
  /// Parse the icon declarations of a manifest root dictionary.
  ///
  /// Missing keys and non-dictionary values read as "nothing declared".
  pub fn from_root(root: &Dictionary) -> Self {
    let icons = |scope: IconScope| root.get(scope.key()).and_then(Value::as_dictionary);

    let primary = IconScope::ALL
      .into_iter()
      .filter_map(|scope| icons(scope)?.get(PRIMARY_ICON_KEY))
      .next()
      .map(|value| {
        let name = value
          .as_dictionary()
          .and_then(|dict| dict.get(ICON_NAME_KEY))
          .and_then(Value::as_str)
          .unwrap_or(PRIMARY_ICON_SET_NAME);
        ManifestEntry::from_value(name, value)
      });

    let alternates_of = |scope: IconScope| -> BTreeSet<ManifestEntry> {
      icons(scope)
        .and_then(|dict| dict.get(ALTERNATE_ICONS_KEY))
        .and_then(Value::as_dictionary)
        .map(|alternates| {
          alternates
            .iter()
            .map(|(name, value)| ManifestEntry::from_value(name.as_str(), value))
            .collect()
        })
        .unwrap_or_default()
    };

    Self {
      primary,
      alternates: alternates_of(IconScope::Phone),
      alternates_pad: alternates_of(IconScope::Pad),
    }
  }

  /// Alternates of both scopes.
  pub fn all_alternates(&self) -> impl Iterator<Item = &ManifestEntry> {
    self.alternates.iter().chain(self.alternates_pad.iter())
  }

  /// Names of every declared alternate icon.
  pub fn alternate_names(&self) -> BTreeSet<&str> {
    self.all_alternates().map(|entry| entry.name.as_str()).collect()
  }
}

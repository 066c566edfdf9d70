//! Test fixtures for alticons-lib.
//!
//! Builds asset catalogs, bundles and manifests on disk inside temporary
//! directories.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{IconImage, Idiom, Scale};
use crate::consts::{DESCRIPTOR_FILE_NAME, ICON_SET_EXTENSION};

/// Shorthand for an [`IconImage`].
pub fn image(filename: &str, idiom: Idiom, size: &str, scale: Scale) -> IconImage {
  IconImage {
    filename: filename.to_string(),
    idiom,
    size: size.to_string(),
    scale,
  }
}

/// Write `<catalog>/<name>.appiconset` with a descriptor and one file per image.
///
/// Image files contain their own file name so copies can be told apart.
pub fn write_icon_set(catalog: &Path, name: &str, images: &[IconImage]) -> PathBuf {
  let folder = catalog.join(format!("{name}.{ICON_SET_EXTENSION}"));
  fs::create_dir_all(&folder).unwrap();

  let entries: Vec<_> = images
    .iter()
    .map(|img| {
      serde_json::json!({
        "filename": img.filename,
        "idiom": img.idiom.as_str(),
        "size": img.size,
        "scale": img.scale.as_str(),
      })
    })
    .collect();
  let descriptor = serde_json::json!({
    "images": entries,
    "info": { "version": 1, "author": "xcode" },
  });
  fs::write(
    folder.join(DESCRIPTOR_FILE_NAME),
    serde_json::to_string_pretty(&descriptor).unwrap(),
  )
  .unwrap();

  for img in images {
    fs::write(folder.join(&img.filename), format!("{name}/{}", img.filename)).unwrap();
  }

  folder
}

/// A minimal manifest with a couple of unrelated keys.
pub const BASE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>CFBundleIdentifier</key>
  <string>com.example.demo</string>
  <key>LSRequiresIPhoneOS</key>
  <true/>
  <key>UIDeviceFamily</key>
  <array>
    <integer>1</integer>
    <integer>2</integer>
  </array>
</dict>
</plist>
"#;

/// Write a manifest file, creating parent directories.
pub fn write_manifest(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, content).unwrap();
}

/// Sorted file names directly inside `dir`.
pub fn list_files(dir: &Path) -> Vec<String> {
  let mut names: Vec<_> = fs::read_dir(dir)
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  names
}

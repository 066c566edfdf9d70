//! Shared test helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// A manifest with one unrelated key.
pub const BASE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>CFBundleIdentifier</key>
  <string>com.example.demo</string>
</dict>
</plist>
"#;

/// Isolated build environment.
///
/// Each test gets its own temporary directory holding an asset catalog and a
/// build-products directory with an app bundle and its manifest.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let env = Self { temp };
    fs::create_dir_all(env.catalog_path()).unwrap();
    fs::create_dir_all(env.bundle_path()).unwrap();
    fs::write(env.manifest_path(), BASE_MANIFEST).unwrap();
    env
  }

  fn root(&self) -> PathBuf {
    let p = self.temp.path().to_path_buf();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  pub fn catalog_path(&self) -> PathBuf {
    self.root().join("Assets.xcassets")
  }

  pub fn products_path(&self) -> PathBuf {
    self.root().join("Products")
  }

  pub fn bundle_path(&self) -> PathBuf {
    self.products_path().join("Demo.app")
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.bundle_path().join("Info.plist")
  }

  /// Write an icon set. Each image is `(filename, idiom, size, scale)`.
  pub fn add_icon_set(&self, name: &str, images: &[(&str, &str, &str, &str)]) {
    let folder = self.catalog_path().join(format!("{name}.appiconset"));
    fs::create_dir_all(&folder).unwrap();

    let entries: Vec<String> = images
      .iter()
      .map(|(filename, idiom, size, scale)| {
        format!(r#"{{"filename":"{filename}","idiom":"{idiom}","size":"{size}","scale":"{scale}"}}"#)
      })
      .collect();
    fs::write(
      folder.join("Contents.json"),
      format!(r#"{{"images":[{}],"info":{{"version":1,"author":"xcode"}}}}"#, entries.join(",")),
    )
    .unwrap();

    for (filename, ..) in images {
      fs::write(folder.join(filename), format!("{name}/{filename}")).unwrap();
    }
  }

  pub fn remove_icon_set(&self, name: &str) {
    fs::remove_dir_all(self.catalog_path().join(format!("{name}.appiconset"))).unwrap();
  }

  /// Sorted file names in the bundle.
  pub fn bundle_files(&self) -> Vec<String> {
    list_files(&self.bundle_path())
  }

  pub fn manifest(&self) -> String {
    fs::read_to_string(self.manifest_path()).unwrap()
  }

  /// Command for the alticons binary with this environment's build settings.
  pub fn alticons_cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("alticons");
    cmd
      .env("BUILT_PRODUCTS_DIR", self.products_path())
      .env("CONTENTS_FOLDER_PATH", "Demo.app")
      .env("SCRIPT_INPUT_FILE_COUNT", "1")
      .env("SCRIPT_INPUT_FILE_0", self.catalog_path())
      .env_remove("INFOPLIST_PATH");
    cmd
  }
}

pub fn list_files(dir: &Path) -> Vec<String> {
  let mut names: Vec<_> = fs::read_dir(dir)
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  names
}

/// A phone and a pad image at two scales each.
pub const FULL_SET: &[(&str, &str, &str, &str)] = &[
  ("icon29@2x.png", "iphone", "29x29", "2x"),
  ("icon29@3x.png", "iphone", "29x29", "3x"),
  ("icon76.png", "ipad", "76x76", "1x"),
  ("icon76@2x.png", "ipad", "76x76", "2x"),
];

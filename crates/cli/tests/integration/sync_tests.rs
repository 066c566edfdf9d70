//! Sync run integration tests.

use std::fs;

use predicates::prelude::*;

use alticons_lib::manifest::{ManifestEntry, ManifestStore};

use super::common::{FULL_SET, TestEnv};

#[test]
fn sync_declares_and_copies_icons() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", &[("icon29.png", "iphone", "29x29", "2x")]);
  env.add_icon_set("Dark", &[("icon29.png", "iphone", "29x29", "2x")]);

  env
    .alticons_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Parsing build context"))
    .stdout(predicate::str::contains("Files copied: 2"));

  assert_eq!(
    env.bundle_files(),
    vec!["AppIcon29x29@2x.png", "Dark29x29@2x.png", "Info.plist"]
  );

  let snapshot = ManifestStore::load(&env.manifest_path()).unwrap().snapshot();
  assert!(
    snapshot
      .alternates
      .contains(&ManifestEntry::new("Dark", vec!["Dark29x29@2x".to_string()]))
  );
  assert!(env.manifest().contains("<key>CFBundleIdentifier</key>"));
}

#[test]
fn sync_uses_infoplist_path_when_set() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", FULL_SET);
  let custom = env.bundle_path().join("Custom-Info.plist");
  fs::copy(env.manifest_path(), &custom).unwrap();

  env
    .alticons_cmd()
    .env("INFOPLIST_PATH", "Demo.app/Custom-Info.plist")
    .assert()
    .success();

  assert!(fs::read_to_string(&custom).unwrap().contains("CFBundleIcons~ipad"));
  assert!(!env.manifest().contains("CFBundleIcons"));
}

#[test]
fn sync_removes_stale_icon_files() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", FULL_SET);
  for name in ["A", "B", "C"] {
    env.add_icon_set(name, FULL_SET);
  }
  env.alticons_cmd().assert().success();
  assert!(env.bundle_files().contains(&"B29x29@2x.png".to_string()));

  env.remove_icon_set("B");
  env
    .alticons_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed: B"));

  let files = env.bundle_files();
  assert!(!files.contains(&"B29x29@2x.png".to_string()));
  assert!(!files.contains(&"B76x76~ipad.png".to_string()));
  assert!(files.contains(&"A29x29@2x.png".to_string()));
  assert!(files.contains(&"C29x29@2x.png".to_string()));
  assert!(!env.manifest().contains("<key>B</key>"));
}

#[test]
fn sync_twice_is_idempotent() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", FULL_SET);
  env.add_icon_set("Light", FULL_SET);

  env.alticons_cmd().assert().success();
  let manifest = env.manifest();
  let files = env.bundle_files();

  env
    .alticons_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Files deleted: 0"));

  assert_eq!(env.manifest(), manifest);
  assert_eq!(env.bundle_files(), files);
}

#[test]
fn sync_without_primary_leaves_bundle_untouched() {
  let env = TestEnv::new();
  env.add_icon_set("Dark", FULL_SET);
  let before = env.manifest();

  env
    .alticons_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains("error:"))
    .stderr(predicate::str::contains("AppIcon"));

  assert_eq!(env.manifest(), before);
  assert_eq!(env.bundle_files(), vec!["Info.plist"]);
}

#[test]
fn sync_with_malformed_descriptor_fails() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", FULL_SET);
  let broken = env.catalog_path().join("Broken.appiconset");
  fs::create_dir_all(&broken).unwrap();
  fs::write(broken.join("Contents.json"), "{").unwrap();

  env
    .alticons_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Broken"));

  assert_eq!(env.bundle_files(), vec!["Info.plist"]);
}

#[test]
fn copy_failure_warns_about_partial_update() {
  let env = TestEnv::new();
  env.add_icon_set("AppIcon", &[("icon29.png", "iphone", "29x29", "2x")]);
  fs::create_dir_all(env.bundle_path().join("AppIcon29x29@2x.png")).unwrap();

  env
    .alticons_cmd()
    .env_remove("RUST_LOG")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to copy current files"))
    .stderr(predicate::str::contains("partially updated"));
}

//! Kept in its own test binary: it changes the process working directory.

use retro_shelf_catalog::{CATALOG_FILE_NAME, build_from_lists, catalog_path_for};
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn current_dir_as_lists_dir_writes_to_parent() {
    let tmp = TempDir::new().unwrap();
    let lists = tmp.path().join("lists");
    fs::create_dir(&lists).unwrap();
    fs::write(lists.join("PS2.txt"), "Okami\nOkami\n").unwrap();

    env::set_current_dir(&lists).unwrap();
    let expected = fs::canonicalize(tmp.path()).unwrap().join(CATALOG_FILE_NAME);
    assert_eq!(catalog_path_for(Path::new(".")).unwrap(), expected);

    let summary = build_from_lists(Path::new("."), None).unwrap().unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.output, expected);
    assert!(tmp.path().join(CATALOG_FILE_NAME).is_file());
    assert!(!lists.join(CATALOG_FILE_NAME).exists());
}

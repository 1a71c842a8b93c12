use std::fs;

use ddoc_core::lookup_module_file;
use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "module x;\n").unwrap();
}

#[test]
fn resolves_direct_file_layout() {
    let root = TempDir::new().unwrap();
    touch(&root, "std/algorithm.d");

    let path = lookup_module_file(root.path(), "std.algorithm").unwrap();
    assert_eq!(path, root.path().join("std/algorithm.d"));
}

#[test]
fn resolves_package_file_layout() {
    let root = TempDir::new().unwrap();
    touch(&root, "std/range/package.d");

    let path = lookup_module_file(root.path(), "std.range").unwrap();
    assert_eq!(path, root.path().join("std/range/package.d"));
}

#[test]
fn direct_file_wins_over_package_file() {
    let root = TempDir::new().unwrap();
    touch(&root, "core/time.d");
    touch(&root, "core/time/package.d");

    let path = lookup_module_file(root.path(), "core.time").unwrap();
    assert_eq!(path, root.path().join("core/time.d"));
}

#[test]
fn single_segment_name_resolves_at_root() {
    let root = TempDir::new().unwrap();
    touch(&root, "object.d");

    let path = lookup_module_file(root.path(), "object").unwrap();
    assert_eq!(path, root.path().join("object.d"));
}

#[test]
fn unknown_name_is_a_miss() {
    let root = TempDir::new().unwrap();
    touch(&root, "std/algorithm.d");

    assert!(lookup_module_file(root.path(), "std.missing").is_none());
    assert!(lookup_module_file(root.path(), "").is_none());
}

#[test]
fn directory_matching_direct_layout_is_not_a_file() {
    let root = TempDir::new().unwrap();
    // A directory literally named `io.d` must not satisfy the direct layout.
    fs::create_dir_all(root.path().join("std/io.d")).unwrap();

    assert!(lookup_module_file(root.path(), "std.io").is_none());
}

//! Dotted-name module lookup over conventional D source layouts.

use std::path::{Path, PathBuf};

/// Resolves a dotted module name to a source file under `root`.
///
/// Two conventional layouts are probed, in order:
/// 1. A direct file: `root/a/b/name.d`
/// 2. A package file: `root/a/b/name/package.d`
///
/// Returns the first candidate that exists as a regular file, or `None`
/// when the name matches neither layout. Lookup never fails with an error;
/// a miss is an ordinary outcome the caller is expected to report.
pub fn lookup_module_file(root: impl AsRef<Path>, name: &str) -> Option<PathBuf> {
    let segments: Vec<&str> = name.split('.').collect();
    let (last, parents) = segments.split_last()?;
    if last.is_empty() || parents.iter().any(|segment| segment.is_empty()) {
        return None;
    }

    let mut path = root.as_ref().to_path_buf();
    for segment in parents {
        path.push(segment);
    }

    let direct = path.join(format!("{last}.d"));
    if direct.is_file() {
        return Some(direct);
    }

    let package = path.join(last).join("package.d");
    if package.is_file() {
        return Some(package);
    }

    None
}

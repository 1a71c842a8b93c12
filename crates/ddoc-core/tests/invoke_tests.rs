//! Parser invocation tests against stub executables.
//!
//! `cat` stands in for the real parser: handed a "module" file whose
//! content is a JSON declaration tree, it reproduces that tree on stdout
//! exactly like `d2json` would.

use std::fs;

use ddoc_core::{DParser, DeclKind, Error};
use tempfile::TempDir;

#[test]
fn decodes_parser_output_into_a_tree() {
    let dir = TempDir::new().unwrap();
    let module = dir.path().join("file.d");
    fs::write(
        &module,
        r#"{
            "name": "std.file",
            "kind": "module",
            "sig": "module std.file",
            "doc": "File utilities.",
            "members": [
                {"name": "read", "kind": "function", "sig": "void[] read(string name)"}
            ]
        }"#,
    )
    .unwrap();

    let tree = DParser::new("cat").parse_file(&module).unwrap();
    assert_eq!(tree.name, "std.file");
    assert_eq!(tree.kind, DeclKind::Module);
    assert_eq!(tree.members.len(), 1);
    assert_eq!(tree.members[0].name, "read");
}

#[test]
fn malformed_output_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let module = dir.path().join("file.d");
    fs::write(&module, "module std.file;\n").unwrap();

    let error = DParser::new("cat").parse_file(&module).unwrap_err();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn nonzero_exit_is_a_parser_error_with_stderr() {
    let dir = TempDir::new().unwrap();
    let module = dir.path().join("file.d");
    fs::write(&module, "module std.file;\n").unwrap();

    // cat with a missing file exits non-zero and complains on stderr.
    let missing = dir.path().join("absent.d");
    let error = DParser::new("cat").parse_file(&missing).unwrap_err();
    match error {
        Error::Parser { path, stderr, .. } => {
            assert_eq!(path, missing);
            assert!(!stderr.is_empty());
        }
        other => panic!("expected Error::Parser, got {other:?}"),
    }
}

#[test]
fn unlaunchable_parser_is_a_spawn_error() {
    let dir = TempDir::new().unwrap();
    let module = dir.path().join("file.d");
    fs::write(&module, "{}").unwrap();

    let error = DParser::new("no-such-parser-binary")
        .parse_file(&module)
        .unwrap_err();
    assert!(matches!(error, Error::Spawn { .. }));
}

use serde::{Deserialize, Serialize};

/// One parsed declaration in a module's tree.
///
/// Trees are produced fresh by each parser invocation and never mutated
/// afterwards. Every element of `members` is itself a complete node of the
/// same shape; the structure is acyclic by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decl {
    /// Declared identifier (dotted for modules, plain otherwise).
    pub name: String,
    /// Declaration kind tag.
    #[serde(default)]
    pub kind: DeclKind,
    /// Display signature; may equal the bare name.
    #[serde(default)]
    pub sig: String,
    /// Raw documentation text attached to the declaration.
    #[serde(default)]
    pub doc: String,
    /// Local rename for `import` nodes (`import local = a.b.c;`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub renamed: Option<String>,
    /// Byte ranges into the module source holding example code.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub examples: Vec<ByteSpan>,
    /// Ordered child declarations.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub members: Vec<Decl>,
}

impl Decl {
    /// Creates a node with the given name and kind and no other content.
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        let name = name.into();
        Self {
            sig: name.clone(),
            name,
            kind,
            doc: String::new(),
            renamed: None,
            examples: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Returns the public-import members, in declaration order.
    pub fn imports(&self) -> impl Iterator<Item = &Decl> {
        self.members
            .iter()
            .filter(|member| member.kind == DeclKind::Import)
    }
}

/// Enumerates the declaration kinds emitted by the parser.
///
/// Kind tags this version does not know decode as [`DeclKind::Other`] so a
/// newer parser never breaks deserialization; such members are skipped at
/// render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Module,
    Function,
    Class,
    Struct,
    Variable,
    Enum,
    Alias,
    Template,
    Import,
    #[default]
    #[serde(other)]
    Other,
}

/// Half-open byte range `[start, end)` into a module's source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSpan {
    /// Inclusive start offset.
    pub start: u64,
    /// Exclusive end offset.
    pub end: u64,
}

impl ByteSpan {
    /// Creates a span from byte offsets.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered by the span.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for an empty or inverted span.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_decodes_as_other() {
        let node: Decl =
            serde_json::from_str(r#"{"name": "x", "kind": "mixin_template"}"#).unwrap();
        assert_eq!(node.kind, DeclKind::Other);
    }

    #[test]
    fn members_default_to_empty() {
        let node: Decl = serde_json::from_str(r#"{"name": "std.file", "kind": "module"}"#).unwrap();
        assert!(node.members.is_empty());
        assert!(node.examples.is_empty());
    }

    #[test]
    fn nested_members_decode() {
        let node: Decl = serde_json::from_str(
            r#"{
                "name": "std.file",
                "kind": "module",
                "sig": "module std.file",
                "doc": "File utilities.",
                "members": [
                    {"name": "read", "kind": "function", "sig": "void[] read(string name)"},
                    {"name": "path", "kind": "import", "renamed": "fspath"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(node.members.len(), 2);
        assert_eq!(node.members[0].kind, DeclKind::Function);
        assert_eq!(node.imports().count(), 1);
        assert_eq!(node.members[1].renamed.as_deref(), Some("fspath"));
    }
}

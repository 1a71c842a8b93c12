use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::invoke::DParser;
use crate::lookup::lookup_module_file;
use crate::model::{ByteSpan, Decl, DeclKind};
use crate::render::registry::Registry;
use crate::render::rst::{prepare_docstring, RstWriter, INDENT};

/// Ordering applied to members (and import listings) before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberOrder {
    /// Declaration order as produced by the parser.
    #[default]
    Source,
    /// Sorted by unqualified member name.
    Alphabetic,
}

/// Options controlling member rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Member ordering mode.
    pub member_order: MemberOrder,
    /// Unqualified member names dropped before rendering.
    pub exclude_members: Vec<String>,
    /// Public-import names dropped from import listings.
    pub exclude_imports: Vec<String>,
}

/// Renders declaration trees as Sphinx `d`-domain directives.
///
/// One `Documenter` serves any number of sequential requests; each request
/// resolves a dotted module name under the lookup root, runs the parser on
/// the resolved file and walks the returned tree. There is no caching: the
/// tree is regenerated on every call.
#[derive(Debug, Clone)]
pub struct Documenter {
    root: PathBuf,
    parser: DParser,
    registry: Registry,
    options: RenderOptions,
}

impl Documenter {
    /// Creates a documenter with default parser, registry and options.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            parser: DParser::default(),
            registry: Registry::default(),
            options: RenderOptions::default(),
        }
    }

    /// Replaces the parser invoker.
    pub fn with_parser(mut self, parser: DParser) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the directive registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Documents one dotted module name.
    ///
    /// A lookup miss is not an error: it produces a user-visible warning
    /// and `Ok(None)`, and the caller moves on to the next module. Parser
    /// and render failures propagate as `Err` and abort the request.
    pub fn document(&self, name: &str) -> Result<Option<String>> {
        let Some(path) = lookup_module_file(&self.root, name) else {
            warn!(module = name, root = %self.root.display(), "couldn't find module");
            return Ok(None);
        };

        let tree = self.parser.parse_file(&path)?;
        self.render(&tree, name, &path).map(Some)
    }

    /// Renders an already-parsed tree rooted at `qualified`.
    ///
    /// `source` is the file the tree was parsed from; example spans are
    /// sliced out of it.
    pub fn render(&self, node: &Decl, qualified: &str, source: &Path) -> Result<String> {
        let mut writer = RstWriter::new();
        self.render_node(&mut writer, node, qualified, source, "")?;
        Ok(writer.finish())
    }

    fn render_node(
        &self,
        writer: &mut RstWriter,
        node: &Decl,
        qualified: &str,
        source: &Path,
        indent: &str,
    ) -> Result<()> {
        let Some(directive) = self.registry.directive(node.kind) else {
            debug!(name = qualified, kind = ?node.kind, "skipping unregistered kind");
            return Ok(());
        };

        let sig = if node.sig.is_empty() {
            node.name.as_str()
        } else {
            node.sig.as_str()
        };
        writer.blank();
        writer.line(indent, &format!(".. d:{directive}:: {sig}"));

        let body = format!("{indent}{INDENT}");
        writer.line(&body, &format!(":name: {qualified}"));
        writer.blank();

        for line in prepare_docstring(&node.doc) {
            writer.line(&body, &line);
        }
        writer.blank();

        self.render_imports(writer, node, &body);
        self.render_examples(writer, node, qualified, source, &body)?;
        self.render_members(writer, node, qualified, source, &body)
    }

    /// Bulleted listing of the node's public imports.
    fn render_imports(&self, writer: &mut RstWriter, node: &Decl, indent: &str) {
        let mut imports: Vec<&Decl> = node
            .imports()
            .filter(|import| !self.options.exclude_imports.contains(&import.name))
            .collect();
        if imports.is_empty() {
            return;
        }
        if self.options.member_order == MemberOrder::Alphabetic {
            imports.sort_by(|a, b| a.name.cmp(&b.name));
        }

        for import in imports {
            let reference = match &import.renamed {
                Some(local) => format!("- :d:mod:`{local} <{}>`", import.name),
                None => format!("- :d:mod:`{}`", import.name),
            };
            writer.line(indent, &reference);
        }
        writer.blank();
    }

    /// Embedded code blocks sliced out of the module source by byte range.
    fn render_examples(
        &self,
        writer: &mut RstWriter,
        node: &Decl,
        qualified: &str,
        source: &Path,
        indent: &str,
    ) -> Result<()> {
        for span in &node.examples {
            // A zero-length span satisfies the invariant but has nothing
            // to show; emit no block for it. Inverted spans still reach
            // extraction and fail there.
            if span.start == span.end {
                continue;
            }
            let text = extract_example(source, *span, qualified)?;

            writer.line(indent, ".. code-block:: d");
            writer.blank();
            let code = format!("{indent}{INDENT}");
            writer.block(&code, &text);
            writer.blank();
        }
        Ok(())
    }

    fn render_members(
        &self,
        writer: &mut RstWriter,
        node: &Decl,
        qualified: &str,
        source: &Path,
        indent: &str,
    ) -> Result<()> {
        let mut members: Vec<&Decl> = node
            .members
            .iter()
            .filter(|member| member.kind != DeclKind::Import)
            .filter(|member| !self.options.exclude_members.contains(&member.name))
            .collect();
        if self.options.member_order == MemberOrder::Alphabetic {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }

        for member in members {
            let full_name = format!("{qualified}.{}", member.name);
            self.render_node(writer, member, &full_name, source, indent)?;
        }
        Ok(())
    }
}

/// Reads exactly the bytes `[span.start, span.end)` from `source`.
///
/// Each extraction is a discrete open/seek/read/close; nothing is kept
/// open across calls.
fn extract_example(source: &Path, span: ByteSpan, qualified: &str) -> Result<String> {
    if span.end < span.start {
        return Err(Error::render(
            qualified,
            format!("invalid example span {}..{}", span.start, span.end),
        ));
    }
    if span.is_empty() {
        return Ok(String::new());
    }

    let io_error = |error| Error::Io {
        path: source.to_path_buf(),
        source: error,
    };
    let mut file = File::open(source).map_err(io_error)?;

    // Bounds-check against the file before sizing the buffer; a garbage
    // span end must fail as a render error, not an allocation abort.
    let file_len = file.metadata().map_err(io_error)?.len();
    if span.end > file_len {
        return Err(Error::render(
            qualified,
            format!(
                "example span {}..{} does not fit '{}' ({file_len} bytes)",
                span.start,
                span.end,
                source.display()
            ),
        ));
    }

    file.seek(SeekFrom::Start(span.start)).map_err(io_error)?;
    let mut bytes = vec![0u8; span.len() as usize];
    file.read_exact(&mut bytes).map_err(io_error)?;

    String::from_utf8(bytes).map_err(|_| {
        Error::render(
            qualified,
            format!(
                "example span {}..{} is not valid UTF-8",
                span.start, span.end
            ),
        )
    })
}

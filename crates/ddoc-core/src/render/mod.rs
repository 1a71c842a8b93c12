//! reStructuredText rendering for declaration trees.
//!
//! The renderer is a plain recursive walk over an owned [`crate::Decl`]
//! tree: directive header, `:name:` option, doc paragraph, public-import
//! listing, example code blocks, then members one indent level deeper.

mod documenter;
mod registry;
mod rst;

pub use documenter::{Documenter, MemberOrder, RenderOptions};
pub use registry::Registry;
pub use rst::{prepare_docstring, RstWriter};

#![deny(clippy::all)]

//! Core library for the `ddoc` documentation generator.
//!
//! This crate provides:
//! - A declaration model for parse trees produced by an external D parser.
//! - Dotted-name module lookup over conventional source layouts.
//! - An invoker that runs the parser executable and decodes its JSON output.
//! - A renderer that emits Sphinx `d`-domain reStructuredText directives.

pub mod error;
pub mod invoke;
pub mod lookup;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use invoke::DParser;
pub use lookup::lookup_module_file;
pub use model::{ByteSpan, Decl, DeclKind};
pub use render::{Documenter, MemberOrder, Registry, RenderOptions};

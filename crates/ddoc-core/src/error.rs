use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error variants for lookup, parser invocation and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a source file (example extraction, config fixtures).
    #[error("failed to read source '{path}': {source}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The parser executable could not be started at all.
    #[error("failed to launch parser '{program}': {source}")]
    Spawn {
        /// Program name or path that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The parser ran but exited unsuccessfully.
    #[error("parser failed on '{path}' ({status}): {stderr}")]
    Parser {
        /// Source file handed to the parser.
        path: PathBuf,
        /// Exit status reported by the parser process.
        status: ExitStatus,
        /// Captured standard error output, trimmed.
        stderr: String,
    },

    /// The parser's stdout was not a valid declaration tree.
    #[error("malformed parser output for '{path}': {source}")]
    Json {
        /// Source file handed to the parser.
        path: PathBuf,
        /// Underlying JSON decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Rendering failed (bad example span, non-UTF-8 slice).
    #[error("failed to render '{name}': {details}")]
    Render {
        /// Fully qualified name of the declaration being rendered.
        name: String,
        /// Additional context.
        details: String,
    },
}

impl Error {
    /// Helper to create a render error for a declaration.
    pub fn render(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Render {
            name: name.into(),
            details: details.into(),
        }
    }
}

//! Error types for the `ddoc` CLI.
//!
//! Domain errors from `ddoc-core` convert automatically via `#[from]`;
//! the binary prints the top-level error and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problems (unreadable, invalid TOML).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lookup, parser or render failure from the core library.
    #[error(transparent)]
    Core(#[from] ddoc_core::Error),

    /// `resolve` could not match the name to either source layout.
    #[error("couldn't find module '{name}' under '{root}'")]
    ModuleNotFound {
        /// Requested dotted module name.
        name: String,
        /// Lookup root that was searched.
        root: PathBuf,
    },

    /// Every module requested by `generate` was skipped.
    #[error("no modules could be documented")]
    NothingDocumented,

    /// The configured lookup root is not a directory.
    #[error("lookup root '{root}' is not a directory")]
    InvalidLookupRoot {
        /// Configured root path.
        root: PathBuf,
    },

    /// The parser executable could not be launched by `check`.
    #[error("parser '{program}' cannot be launched: {source}")]
    ParserUnavailable {
        /// Configured parser program.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the rendered output failed.
    #[error("failed to write output '{path}': {source}")]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("invalid config '{path}': {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

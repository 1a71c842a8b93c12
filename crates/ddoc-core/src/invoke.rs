//! Invocation of the external D parser executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Decl;

/// Conventional name of the parser executable, resolved via `PATH`.
pub const DEFAULT_PARSER: &str = "d2json";

/// Wrapper around the external parser process.
///
/// The parser contract: it is invoked with a single D source file path as
/// its argument and prints a JSON declaration tree on stdout. One process
/// is spawned per module file; invocations are strictly sequential with no
/// timeout or retry.
#[derive(Debug, Clone)]
pub struct DParser {
    program: PathBuf,
}

impl DParser {
    /// Creates an invoker for a specific parser program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program invoked for each module file.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the parser on `path` and decodes its output.
    ///
    /// # Errors
    ///
    /// - [`Error::Spawn`] when the parser cannot be launched.
    /// - [`Error::Parser`] when it exits unsuccessfully; the message
    ///   carries the captured stderr.
    /// - [`Error::Json`] when stdout is not a valid declaration tree.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Decl> {
        let path = path.as_ref();
        debug!(parser = %self.program.display(), file = %path.display(), "invoking parser");

        let output = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Parser {
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for DParser {
    fn default() -> Self {
        Self::new(DEFAULT_PARSER)
    }
}

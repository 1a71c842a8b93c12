use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Validate configuration, lookup root and parser availability.
pub fn execute(config: &Config, config_path: Option<&Path>, args: CheckArgs) -> Result<()> {
    match config_path {
        Some(path) => info!(path = %path.display(), "config loaded"),
        None => info!("no ddoc.toml found, using defaults"),
    }

    let root = config.lookup_root(args.root);
    if !root.is_dir() {
        return Err(CliError::InvalidLookupRoot { root });
    }
    info!(root = %root.display(), "lookup root exists");

    let parser = config.parser_program(args.parser);
    let mut child = Command::new(&parser)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| CliError::ParserUnavailable {
            program: parser.display().to_string(),
            source,
        })?;
    // Launchability is all that matters here; don't leave the child around.
    let _ = child.kill();
    let _ = child.wait();
    info!(parser = %parser.display(), "parser launches");

    println!("ok");
    Ok(())
}

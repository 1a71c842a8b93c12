use std::fs;

use ddoc_core::{DParser, Documenter};
use tracing::{debug, info};

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Render reStructuredText for the requested modules.
///
/// Unresolvable modules warn and are skipped; the command fails when a
/// parser or render error occurs, or when every module was skipped.
pub fn execute(config: &Config, args: GenerateArgs) -> Result<()> {
    let root = config.lookup_root(args.root);
    let parser = DParser::new(config.parser_program(args.parser));
    let options = config.render_options(
        args.order.map(Into::into),
        args.exclude_members,
        args.exclude_imports,
    );

    debug!(root = %root.display(), parser = %parser.program().display(), "generating");

    let documenter = Documenter::new(&root)
        .with_parser(parser)
        .with_options(options);

    let mut rendered = Vec::with_capacity(args.modules.len());
    for name in &args.modules {
        if let Some(rst) = documenter.document(name)? {
            info!(module = name, "documented");
            rendered.push(rst);
        }
    }

    if rendered.is_empty() {
        return Err(CliError::NothingDocumented);
    }

    let text = rendered.join("\n");
    match args.output {
        Some(path) => {
            fs::write(&path, text).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote documentation");
        }
        None => print!("{text}"),
    }

    Ok(())
}

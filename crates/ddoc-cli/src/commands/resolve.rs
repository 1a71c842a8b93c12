use ddoc_core::lookup_module_file;

use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Print the source file a dotted module name resolves to.
pub fn execute(config: &Config, args: ResolveArgs) -> Result<()> {
    let root = config.lookup_root(args.root);

    match lookup_module_file(&root, &args.module) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::ModuleNotFound {
            name: args.module,
            root,
        }),
    }
}

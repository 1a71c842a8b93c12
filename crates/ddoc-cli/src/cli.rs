//! Command-line interface definition for the `ddoc` documentation
//! generator, built with clap v4 derive macros.
//!
//! # Command structure
//!
//! - `ddoc generate` - Render reStructuredText for one or more modules
//! - `ddoc resolve` - Print the source file a dotted name resolves to
//! - `ddoc check` - Validate configuration, lookup root and parser

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ddoc_core::MemberOrder;

/// ddoc - API documentation generator for D
#[derive(Parser, Debug)]
#[command(
    name = "ddoc",
    version,
    about = "Generate reStructuredText API documentation for D modules",
    long_about = "ddoc resolves dotted D module names to source files, parses them\n\
                  with an external d2json parser, and renders the declaration tree\n\
                  as Sphinx d-domain reStructuredText directives."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a configuration file (default: ./ddoc.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available ddoc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render documentation for one or more dotted module names
    ///
    /// Modules that cannot be resolved under the lookup root produce a
    /// warning and are skipped; the command fails only when nothing at
    /// all could be documented or a parser error occurs.
    Generate(GenerateArgs),

    /// Resolve a dotted module name to its source file
    Resolve(ResolveArgs),

    /// Validate configuration, lookup root and parser availability
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dotted module names to document
    ///
    /// Examples:
    ///   ddoc generate std.algorithm
    ///   ddoc generate std.file std.path --root src
    #[arg(required = true, value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Lookup root the module tree lives under
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Parser executable to invoke per module file
    #[arg(long, value_name = "PROGRAM")]
    pub parser: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Member ordering mode
    #[arg(long, value_enum, value_name = "ORDER")]
    pub order: Option<OrderArg>,

    /// Member names to exclude (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude_members: Vec<String>,

    /// Public-import names to exclude (repeatable)
    #[arg(long = "exclude-import", value_name = "NAME")]
    pub exclude_imports: Vec<String>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Dotted module name to resolve
    #[arg(value_name = "MODULE")]
    pub module: String,

    /// Lookup root the module tree lives under
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Lookup root the module tree lives under
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Parser executable to invoke per module file
    #[arg(long, value_name = "PROGRAM")]
    pub parser: Option<PathBuf>,
}

/// CLI-facing member ordering values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Declaration order as produced by the parser
    Source,
    /// Sorted by member name
    Alphabetic,
}

impl From<OrderArg> for MemberOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Source => MemberOrder::Source,
            OrderArg::Alphabetic => MemberOrder::Alphabetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_requires_a_module() {
        let result = Cli::try_parse_from(["ddoc", "generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn generate_parses_flags() {
        let cli = Cli::try_parse_from([
            "ddoc",
            "generate",
            "std.file",
            "--root",
            "src",
            "--order",
            "alphabetic",
            "--exclude",
            "deprecated",
            "--exclude-import",
            "std.internal",
        ])
        .unwrap();

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.modules, vec!["std.file"]);
                assert_eq!(args.order, Some(OrderArg::Alphabetic));
                assert_eq!(args.exclude_members, vec!["deprecated"]);
                assert_eq!(args.exclude_imports, vec!["std.internal"]);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }
}

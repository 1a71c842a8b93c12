//! `ddoc` - reStructuredText API documentation for D modules.
//!
//! Entry point: parses arguments, initializes logging, loads the config
//! file and dispatches to the requested command.

use std::process::ExitCode;

use clap::Parser;
use ddoc_cli::{cli, commands, config::Config, logger};
use tracing::error;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let (config, config_path) = match Config::load_or_default(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(&config, generate_args),
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(&config, resolve_args),
        cli::Command::Check(check_args) => {
            commands::check_execute(&config, config_path.as_deref(), check_args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

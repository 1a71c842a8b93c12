//! Logging setup for the `ddoc` CLI using the `tracing` ecosystem.
//!
//! Verbosity ladder:
//! 1. `--verbose` - debug level for ddoc crates
//! 2. `--quiet` - errors only
//! 3. `RUST_LOG` environment variable
//! 4. Default - info level for ddoc crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("ddoc_core=debug,ddoc_cli=debug,ddoc=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ddoc_core=info,ddoc_cli=info,ddoc=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check whether colored output should be enabled.
///
/// Honors the `NO_COLOR` and `FORCE_COLOR` conventions, then falls back
/// to terminal capability detection.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

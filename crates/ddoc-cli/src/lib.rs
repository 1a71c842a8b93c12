//! Library surface of the `ddoc` CLI.
//!
//! Split out of the binary so integration tests and embedders can reuse
//! argument parsing, configuration loading and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

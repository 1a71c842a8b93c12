//! Command implementations for the `ddoc` CLI.

mod check;
mod generate;
mod resolve;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
pub use resolve::execute as resolve_execute;

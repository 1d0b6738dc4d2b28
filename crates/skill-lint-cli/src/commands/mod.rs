//! Subcommand implementations.

pub mod check;
pub mod list_expected;

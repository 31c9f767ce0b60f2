//! Command-line interface module.

mod args;
pub mod check;
pub mod emit;
pub mod init;
pub mod query;

pub use args::{CheckArgs, Cli, Commands, EmitArgs, QueryArgs};

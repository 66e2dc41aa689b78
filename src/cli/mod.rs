//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod resolve;
pub mod routes;

pub use args::{Cli, Commands};

//! Command-line interface: `serve` runs the HTTP server, `migrate`
//! manages the schema.

pub mod args;

pub use args::{Cli, Commands};

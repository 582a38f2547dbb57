//! Command-line interface handling.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::print_version;

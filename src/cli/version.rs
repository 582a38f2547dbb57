//! Version reporting.

/// The crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the version line to stdout.
pub fn print_version() {
    println!("atlas {}", VERSION);
}

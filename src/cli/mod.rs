//! Command-line inspector
//!
//! Parses `s3path` arguments and runs them against the path API.

pub mod commands;
pub mod handlers;

pub use commands::{Command, USAGE, parse_command};
pub use handlers::execute;

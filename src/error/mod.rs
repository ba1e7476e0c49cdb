//! Error handling
//!
//! Defines error types and handling for path operations and the CLI.

pub mod handlers;
pub mod types;

pub use types::*;

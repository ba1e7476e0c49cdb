//! S3 Path Wrangler
//!
//! Parses, validates, and manipulates S3 locations (`s3://bucket/key` and
//! relative `folder/file.txt` paths) in the manner of `std::path`, without any
//! network or storage access.

pub mod cli;
pub mod config;
pub mod error;
pub mod path;
pub mod utils;

pub use error::S3PathError;
pub use path::{PathFragment, S3Path};

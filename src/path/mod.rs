//! S3 paths
//!
//! Parses, validates, and manipulates bucket/key locations without touching
//! any storage.

mod conversions;
mod operations;
mod s3_path;
pub mod validation;

pub use operations::PathFragment;
pub use s3_path::{S3_PREFIX, S3Path};

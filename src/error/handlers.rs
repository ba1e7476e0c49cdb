//! Error handlers
//!
//! Reports errors from the binary and maps them to process exit codes.

use crate::error::types::{S3PathError, WranglerError};
use log::error;

/// Report an error that ends the current command
pub fn handle_error(err: &WranglerError) {
    error!("s3path error: {}", err);
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &WranglerError) -> i32 {
    match err {
        WranglerError::Path(S3PathError::InvalidPath(_)) => 1,
        WranglerError::Path(S3PathError::InvalidBucket(_)) => 1,
        WranglerError::Path(S3PathError::UnknownBucket(_)) => 1,
        WranglerError::Path(S3PathError::AbsoluteJoin(_)) => 1,
        WranglerError::Usage(_) => 2,
        WranglerError::Config(_) => 3,
    }
}

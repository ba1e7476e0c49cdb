//! Error types
//!
//! Defines the error returned by path operations and the umbrella error used
//! by the `s3path` binary.

use std::fmt;

/// Errors raised while building or manipulating an [`S3Path`](crate::S3Path)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum S3PathError {
    /// The path text or part list is malformed
    InvalidPath(String),
    /// A value used as a bucket does not satisfy the bucket naming rules
    InvalidBucket(String),
    /// Bucket or key was requested from a relative path
    UnknownBucket(String),
    /// An absolute path was appended to another path
    AbsoluteJoin(String),
}

impl fmt::Display for S3PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            S3PathError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            S3PathError::InvalidBucket(b) => write!(f, "{} is not a valid bucket name", b),
            S3PathError::UnknownBucket(msg) => write!(f, "Unknown bucket: {}", msg),
            S3PathError::AbsoluteJoin(p) => {
                write!(f, "Cannot add an absolute path {} to another path", p)
            }
        }
    }
}

impl std::error::Error for S3PathError {}

/// General error for the command-line inspector
#[derive(Debug)]
pub enum WranglerError {
    Path(S3PathError),
    Config(config::ConfigError),
    Usage(String),
}

impl fmt::Display for WranglerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WranglerError::Path(e) => write!(f, "Path error: {}", e),
            WranglerError::Config(e) => write!(f, "Configuration error: {}", e),
            WranglerError::Usage(msg) => write!(f, "Usage error: {}", msg),
        }
    }
}

impl std::error::Error for WranglerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WranglerError::Path(e) => Some(e),
            WranglerError::Config(e) => Some(e),
            WranglerError::Usage(_) => None,
        }
    }
}

impl From<S3PathError> for WranglerError {
    fn from(error: S3PathError) -> Self {
        WranglerError::Path(error)
    }
}

impl From<config::ConfigError> for WranglerError {
    fn from(error: config::ConfigError) -> Self {
        WranglerError::Config(error)
    }
}

//! The `S3Path` value type

use crate::error::S3PathError;
use crate::path::validation::{validate_bucket, validate_parts};
use log::debug;

/// Prefix that marks an absolute path
pub const S3_PREFIX: &str = "s3://";

/// A relative or absolute location in S3, similar to [`std::path::Path`].
///
/// Absolute paths are written with the prefix
/// (`s3://bucket-name/some/path/to/file.txt`) and their first part is the
/// bucket. Relative paths have no prefix (`some/path/to/file.txt`) and carry
/// no knowledge of their bucket. Both kinds can refer to folders as well as
/// files, written with or without a trailing slash.
///
/// Values are immutable: every operation returns a new path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct S3Path {
    parts: Vec<String>,
    is_absolute: bool,
}

impl S3Path {
    /// Parse a string representation of an S3 path.
    ///
    /// Fails with [`S3PathError::InvalidPath`] when the text starts with a
    /// slash or holds an empty or whitespace-only part, and with
    /// [`S3PathError::InvalidBucket`] when an absolute path names an invalid
    /// bucket.
    pub fn parse(path: &str) -> Result<Self, S3PathError> {
        if path.starts_with('/') {
            return Err(S3PathError::InvalidPath(format!(
                "Path ({}) cannot start with a slash. \
                 If an absolute path is required, use the S3 prefix - 's3://bucket/...'",
                path
            )));
        }

        let (is_absolute, rest) = if path.starts_with(S3_PREFIX) {
            // Strips any run of prefix characters, not the literal prefix:
            // "s3://sales" yields the bucket "ales".
            (true, path.trim_start_matches(|c: char| S3_PREFIX.contains(c)))
        } else {
            (false, path)
        };

        let parts: Vec<String> = rest.trim_matches('/').split('/').map(String::from).collect();
        validate_parts(&parts)?;
        if is_absolute {
            validate_bucket(&parts[0])?;
        }

        debug!("Parsed {:?} into {} parts (absolute: {})", path, parts.len(), is_absolute);
        Ok(Self { parts, is_absolute })
    }

    /// Construct a path from its ordered parts.
    ///
    /// With `is_absolute` the first part is treated as the bucket. The parts
    /// must not contain slashes.
    pub fn from_parts<I, S>(parts: I, is_absolute: bool) -> Result<Self, S3PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        validate_parts(&parts)?;
        if is_absolute {
            validate_bucket(&parts[0])?;
        }
        Ok(Self { parts, is_absolute })
    }

    /// Construct a path pointing to a bucket.
    ///
    /// The name must not include the `s3://` prefix; use [`S3Path::parse`]
    /// for that.
    pub fn from_bucket(bucket: &str) -> Result<Self, S3PathError> {
        Self::from_parts([bucket], true)
    }

    /// The parsed parts of the path
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// Convert to an absolute path, assuming the first part is the bucket.
    ///
    /// Returns an identical path if it is already absolute.
    pub fn to_absolute(&self) -> Result<Self, S3PathError> {
        if self.is_absolute {
            return Ok(self.clone());
        }
        Self::from_parts(self.parts.iter().cloned(), true)
    }

    /// Change the bucket of the path.
    ///
    /// Relative paths know nothing about their bucket, so for them the bucket
    /// is prepended and the result becomes absolute. An absolute path has its
    /// bucket replaced by `bucket` as given, without the slash trimming used
    /// for validation.
    pub fn with_bucket(&self, bucket: &str) -> Result<Self, S3PathError> {
        let stripped_bucket = bucket.trim_matches('/');
        validate_bucket(stripped_bucket)?;

        let mut new_parts = self.parts.clone();
        if self.is_absolute {
            new_parts[0] = bucket.to_string();
        } else {
            new_parts.insert(0, stripped_bucket.to_string());
        }
        Self::from_parts(new_parts, true)
    }

    /// The bucket this path is in.
    ///
    /// Fails with [`S3PathError::UnknownBucket`] for relative paths.
    pub fn bucket(&self) -> Result<&str, S3PathError> {
        if !self.is_absolute {
            return Err(S3PathError::UnknownBucket(
                "Cannot compute the bucket of a relative path".into(),
            ));
        }
        Ok(&self.parts[0])
    }

    /// The key of the folder or file this path refers to.
    ///
    /// Empty for a bare bucket. Fails with [`S3PathError::UnknownBucket`] for
    /// relative paths, since they may not start at the bucket.
    pub fn key(&self) -> Result<String, S3PathError> {
        if self.is_absolute {
            return Ok(self.parts[1..].join("/"));
        }
        Err(S3PathError::UnknownBucket(
            "Cannot compute the key, bucket of a relative path is not defined".into(),
        ))
    }

    /// The final part of the path
    pub fn name(&self) -> &str {
        // parts is never empty
        &self.parts[self.parts.len() - 1]
    }

    /// The parent folder or bucket, or `None` if only one part is left
    pub fn parent(&self) -> Option<Self> {
        if self.parts.len() == 1 {
            return None;
        }
        let parent = &self.parts[..self.parts.len() - 1];
        Some(Self {
            parts: parent.to_vec(),
            is_absolute: self.is_absolute,
        })
    }
}

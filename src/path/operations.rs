//! Path joining
//!
//! Appends string fragments or relative paths to an `S3Path`, either through
//! [`S3Path::join`] or the `/` operator.

use crate::error::S3PathError;
use crate::path::S3Path;
use log::debug;
use std::ops::Div;

/// Something that can be appended to a path
#[derive(Debug, Clone, Copy)]
pub enum PathFragment<'a> {
    Str(&'a str),
    Path(&'a S3Path),
}

impl<'a> From<&'a str> for PathFragment<'a> {
    fn from(fragment: &'a str) -> Self {
        PathFragment::Str(fragment)
    }
}

impl<'a> From<&'a String> for PathFragment<'a> {
    fn from(fragment: &'a String) -> Self {
        PathFragment::Str(fragment)
    }
}

impl<'a> From<&'a S3Path> for PathFragment<'a> {
    fn from(path: &'a S3Path) -> Self {
        PathFragment::Path(path)
    }
}

impl S3Path {
    /// Append a path or path fragment to this path.
    ///
    /// A string fragment loses a single leading slash and is then parsed.
    /// Appending an absolute [`S3Path`] fails with
    /// [`S3PathError::AbsoluteJoin`].
    pub fn join<'a>(&self, other: impl Into<PathFragment<'a>>) -> Result<S3Path, S3PathError> {
        let parsed;
        let other_path = match other.into() {
            PathFragment::Str(fragment) => {
                let fragment = fragment.strip_prefix('/').unwrap_or(fragment);
                parsed = S3Path::parse(fragment)?;
                &parsed
            }
            PathFragment::Path(path) if path.is_absolute() => {
                return Err(S3PathError::AbsoluteJoin(path.to_string()));
            }
            PathFragment::Path(path) => path,
        };

        let combined = self.parts().iter().chain(other_path.parts()).cloned();
        let joined = S3Path::from_parts(combined, self.is_absolute())?;
        debug!("Joined {} and {} into {}", self, other_path, joined);
        Ok(joined)
    }
}

impl Div<&str> for &S3Path {
    type Output = Result<S3Path, S3PathError>;

    fn div(self, rhs: &str) -> Self::Output {
        self.join(rhs)
    }
}

impl Div<&S3Path> for &S3Path {
    type Output = Result<S3Path, S3PathError>;

    fn div(self, rhs: &S3Path) -> Self::Output {
        self.join(rhs)
    }
}

impl Div<&str> for S3Path {
    type Output = Result<S3Path, S3PathError>;

    fn div(self, rhs: &str) -> Self::Output {
        self.join(rhs)
    }
}

impl Div<&S3Path> for S3Path {
    type Output = Result<S3Path, S3PathError>;

    fn div(self, rhs: &S3Path) -> Self::Output {
        self.join(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_str_fragments() {
        let examples = &[
            ("file.txt", "s3://bucket/folder/file.txt"),
            ("/file.txt", "s3://bucket/folder/file.txt"),
            ("folder2", "s3://bucket/folder/folder2"),
            ("/folder2", "s3://bucket/folder/folder2"),
            ("folder2/", "s3://bucket/folder/folder2"),
            ("/folder2/", "s3://bucket/folder/folder2"),
            ("folder2/file.txt", "s3://bucket/folder/folder2/file.txt"),
            ("folder2/folder3/", "s3://bucket/folder/folder2/folder3"),
            ("/folder2/folder3", "s3://bucket/folder/folder2/folder3"),
        ];

        let base = S3Path::parse("s3://bucket/folder").unwrap();
        for (fragment, expected) in examples {
            let joined = (&base / *fragment).unwrap();
            assert_eq!(joined, S3Path::parse(expected).unwrap(), "joining {fragment:?}");
        }
    }

    #[test]
    fn test_join_relative_paths() {
        let examples = &[
            ("file.txt", "s3://bucket/folder/file.txt"),
            ("folder2", "s3://bucket/folder/folder2"),
            ("folder2/file.txt", "s3://bucket/folder/folder2/file.txt"),
        ];

        let base = S3Path::parse("s3://bucket/folder").unwrap();
        for (fragment, expected) in examples {
            let other = S3Path::parse(fragment).unwrap();
            let joined = (&base / &other).unwrap();
            assert_eq!(joined, S3Path::parse(expected).unwrap(), "joining {fragment:?}");
        }
    }

    #[test]
    fn test_join_strips_only_one_leading_slash() {
        let base = S3Path::parse("folder").unwrap();
        assert!(matches!(
            base.join("//file.txt"),
            Err(S3PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_join_keeps_relative_base_relative() {
        let base = S3Path::parse("some/relative").unwrap();
        let joined = ((base.clone() / "a").unwrap() / "b").unwrap();
        assert!(!joined.is_absolute());
        assert_eq!(joined.parts(), ["some", "relative", "a", "b"]);
    }

    #[test]
    fn test_join_rejects_absolute_path() {
        let absolute = S3Path::parse("s3://bucket/some/relative/path/file.txt").unwrap();
        assert!(matches!(
            &absolute / &absolute,
            Err(S3PathError::AbsoluteJoin(_))
        ));

        let relative = S3Path::parse("folder").unwrap();
        assert!(matches!(
            relative.join(&absolute),
            Err(S3PathError::AbsoluteJoin(_))
        ));
    }

    #[test]
    fn test_join_rejects_invalid_fragment() {
        let base = S3Path::parse("s3://bucket").unwrap();
        for fragment in ["", "/", " ", "a//b"] {
            assert!(
                matches!(base.join(fragment), Err(S3PathError::InvalidPath(_))),
                "{fragment:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_join_leaves_operands_untouched() {
        let base = S3Path::parse("s3://bucket/folder").unwrap();
        let other = S3Path::parse("file.txt").unwrap();
        let _ = base.join(&other).unwrap();
        assert_eq!(base.parts(), ["bucket", "folder"]);
        assert_eq!(other.parts(), ["file.txt"]);
    }
}

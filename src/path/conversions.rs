//! Conversions between `S3Path` and its string form

use crate::error::S3PathError;
use crate::path::S3Path;
use crate::path::s3_path::S3_PREFIX;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Never renders a trailing slash, which keeps string comparisons simple.
impl fmt::Display for S3Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absolute() {
            f.write_str(S3_PREFIX)?;
        }
        f.write_str(&self.parts().join("/"))
    }
}

impl FromStr for S3Path {
    type Err = S3PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        S3Path::parse(s)
    }
}

impl TryFrom<&str> for S3Path {
    type Error = S3PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        S3Path::parse(value)
    }
}

impl TryFrom<String> for S3Path {
    type Error = S3PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        S3Path::parse(&value)
    }
}

// A string that does not parse is unequal to every path.
impl PartialEq<str> for S3Path {
    fn eq(&self, other: &str) -> bool {
        S3Path::parse(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for S3Path {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for S3Path {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<S3Path> for str {
    fn eq(&self, other: &S3Path) -> bool {
        *other == *self
    }
}

impl PartialEq<S3Path> for &str {
    fn eq(&self, other: &S3Path) -> bool {
        *other == **self
    }
}

impl PartialEq<S3Path> for String {
    fn eq(&self, other: &S3Path) -> bool {
        *other == *self.as_str()
    }
}

impl Serialize for S3Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for S3Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        S3Path::parse(&raw).map_err(de::Error::custom)
    }
}

//! Path validation
//!
//! Checks path parts and bucket names.
//!
//! Bucket names follow the DNS-like grammar
//! `(?![0-9]+$)(?!-)[a-zA-Z0-9-]{0,63}(?<!-)`. The `regex` crate has no
//! lookaround, so the character class and length live in `BUCKET_CHARSET`
//! and the anchored negative assertions are checked by hand.
//!
//! See <https://docs.aws.amazon.com/AmazonS3/latest/dev/BucketRestrictions.html#bucketnamingrules>

use crate::error::S3PathError;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a bucket name
pub const MAX_BUCKET_LENGTH: usize = 63;

static BUCKET_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]{0,63}$").expect("bucket charset regex"));

/// Whitespace as understood by the path grammar: Unicode whitespace plus the
/// information separators U+001C..=U+001F.
fn is_path_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Check if a single part of a path is valid
pub fn is_valid_part(part: &str) -> bool {
    !part.is_empty() && !part.chars().all(is_path_whitespace) && !part.contains('/')
}

/// Return an error if the list is empty or holds an invalid part
pub fn validate_parts<S: AsRef<str>>(parts: &[S]) -> Result<(), S3PathError> {
    trace!("Validating {} path parts", parts.len());
    if parts.is_empty() || parts.iter().any(|p| !is_valid_part(p.as_ref())) {
        let listed: Vec<&str> = parts.iter().map(|p| p.as_ref()).collect();
        return Err(S3PathError::InvalidPath(format!(
            "Some S3 path parts from {:?} are not valid",
            listed
        )));
    }
    Ok(())
}

/// Check a bucket name against the bucket naming rules
pub fn is_valid_bucket(bucket: &str) -> bool {
    if !BUCKET_CHARSET.is_match(bucket) {
        return false;
    }
    // (?![0-9]+$)
    if !bucket.is_empty() && bucket.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // (?!-) and (?<!-)
    !bucket.starts_with('-') && !bucket.ends_with('-')
}

/// Return an error if the bucket name is invalid
pub fn validate_bucket(bucket: &str) -> Result<(), S3PathError> {
    trace!("Validating bucket name {:?}", bucket);
    if is_valid_bucket(bucket) {
        Ok(())
    } else {
        Err(S3PathError::InvalidBucket(bucket.to_string()))
    }
}

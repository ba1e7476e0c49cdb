//! Command handlers
//!
//! Runs parsed commands against `S3Path` and renders their output lines.

use crate::cli::commands::{Command, USAGE};
use crate::config::WranglerConfig;
use crate::error::WranglerError;
use crate::path::S3Path;
use log::{debug, info};

const ABSENT: &str = "-";

/// Execute a command and return the lines to print
pub fn execute(command: Command, config: &WranglerConfig) -> Result<Vec<String>, WranglerError> {
    debug!("Executing {:?}", command);
    match command {
        Command::Inspect(raw) => handle_inspect(&raw),
        Command::Join(base, fragments) => handle_join(&base, &fragments),
        Command::Parent(raw) => handle_parent(&raw),
        Command::Absolute(raw) => handle_absolute(&raw, config),
        Command::WithBucket(raw, bucket) => {
            let path = S3Path::parse(&raw)?;
            Ok(vec![path.with_bucket(&bucket)?.to_string()])
        }
        Command::Help => Ok(USAGE.lines().map(String::from).collect()),
        Command::Unknown(reason) => Err(WranglerError::Usage(reason)),
    }
}

fn handle_inspect(raw: &str) -> Result<Vec<String>, WranglerError> {
    let path = S3Path::parse(raw)?;
    let bucket = path.bucket().unwrap_or(ABSENT).to_string();
    let key = match path.key() {
        Ok(key) if !key.is_empty() => key,
        _ => ABSENT.to_string(),
    };
    let parent = path
        .parent()
        .map_or_else(|| ABSENT.to_string(), |p| p.to_string());

    Ok(vec![
        format!("path:     {}", path),
        format!("absolute: {}", path.is_absolute()),
        format!("bucket:   {}", bucket),
        format!("key:      {}", key),
        format!("name:     {}", path.name()),
        format!("parent:   {}", parent),
    ])
}

fn handle_join(base: &str, fragments: &[String]) -> Result<Vec<String>, WranglerError> {
    let mut path = S3Path::parse(base)?;
    for fragment in fragments {
        path = (&path / fragment.as_str())?;
    }
    Ok(vec![path.to_string()])
}

fn handle_parent(raw: &str) -> Result<Vec<String>, WranglerError> {
    let parent = S3Path::parse(raw)?.parent();
    Ok(vec![parent.map_or_else(|| ABSENT.to_string(), |p| p.to_string())])
}

fn handle_absolute(raw: &str, config: &WranglerConfig) -> Result<Vec<String>, WranglerError> {
    let path = S3Path::parse(raw)?;
    let absolute = match &config.default_bucket {
        Some(bucket) if !path.is_absolute() => {
            info!("Attaching default bucket {} to {}", bucket, path);
            path.with_bucket(bucket)?
        }
        _ => path.to_absolute()?,
    };
    Ok(vec![absolute.to_string()])
}

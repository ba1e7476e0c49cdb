//! Module `commands`
//!
//! Parses the inspector's command line into the `Command` enum.

/// Represents an inspector command parsed from the process arguments.
///
/// Commands that require arguments store them as `String` fields.
#[derive(Debug, PartialEq)]
pub enum Command {
    Inspect(String),                 // Print every property of a path
    Join(String, Vec<String>),       // Append fragments to a base path
    Parent(String),                  // Print the parent path
    Absolute(String),                // Convert to an absolute path
    WithBucket(String, String),      // Replace or attach the bucket
    Help,
    Unknown(String),                 // Unknown command or missing arguments
}

impl Command {
    /// Only `absolute` reads settings; the rest must not fail on a bad config file.
    pub fn needs_config(&self) -> bool {
        matches!(self, Command::Absolute(_))
    }
}

pub const USAGE: &str = "\
usage: s3path <command> [args]

commands:
  inspect <path>                 show bucket, key, name and parent
  join <base> <fragment>...      append fragments to a path
  parent <path>                  show the parent path
  absolute <path>                convert a relative path to an absolute one
  with-bucket <path> <bucket>    replace or attach the bucket
  help                           show this message";

/// Parses process arguments (without the program name) into a `Command`.
///
/// Returns `Unknown` if a known command is missing its arguments.
pub fn parse_command(args: &[String]) -> Command {
    let Some((cmd, rest)) = args.split_first() else {
        return Command::Unknown("no command given".into());
    };

    match (cmd.to_ascii_lowercase().as_str(), rest) {
        ("inspect", [path]) => Command::Inspect(path.clone()),
        ("join", [base, fragments @ ..]) if !fragments.is_empty() => {
            Command::Join(base.clone(), fragments.to_vec())
        }
        ("parent", [path]) => Command::Parent(path.clone()),
        ("absolute", [path]) => Command::Absolute(path.clone()),
        ("with-bucket", [path, bucket]) => Command::WithBucket(path.clone(), bucket.clone()),
        ("help" | "-h" | "--help", []) => Command::Help,
        (other, _) => Command::Unknown(format!("unrecognized command or arguments: {}", other)),
    }
}

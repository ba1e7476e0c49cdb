//! s3path - Entry Point
//!
//! Inspects and manipulates S3 paths from the command line.

use log::info;
use std::process;

use s3_path_wrangler::cli::{Command, USAGE, execute, parse_command};
use s3_path_wrangler::config::WranglerConfig;
use s3_path_wrangler::error::WranglerError;
use s3_path_wrangler::error::handlers::{error_to_exit_code, handle_error};
use s3_path_wrangler::utils::logging::setup_logging;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args);
    let show_usage = matches!(command, Command::Unknown(_));

    match run(command) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(err) => {
            handle_error(&err);
            if show_usage {
                eprintln!("{}", USAGE);
            }
            process::exit(error_to_exit_code(&err));
        }
    }
}

fn run(command: Command) -> Result<Vec<String>, WranglerError> {
    let config = if command.needs_config() {
        let config = WranglerConfig::load()?;
        info!("Loaded configuration: {:?}", config);
        config
    } else {
        WranglerConfig::default()
    };
    execute(command, &config)
}

// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Target};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Builds the `env_logger` configuration for `config` without installing it.
///
/// `RUST_LOG`, when set, takes precedence over `PASSGEN_LOG_LEVEL`.
pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_default_env();

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

/// Installs the global logger.
pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialised at level {}", config.log_level);
    Ok(())
}

// Append to the log file, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_and_parent_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("passgen.log");
        let config = Config { log_file: Some(path.clone()), ..Config::default() };

        assert!(builder(&config).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        // A directory cannot be opened for appending.
        let dir = tempfile::tempdir().unwrap();
        let config = Config { log_file: Some(dir.path().to_path_buf()), ..Config::default() };
        assert!(matches!(builder(&config), Err(LoggingError::IoError(_))));
    }
}

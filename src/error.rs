use std::io;
use thiserror::Error;

/// Prefix for fatal error reports on stderr.
pub const FATAL_PREFIX: &str = "critical-invalid: ";

/// Custom error type for the gfetch application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to run: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Parse(String),
}

/// Result type alias for the gfetch application
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Create a command spawn error
    pub fn command_spawn<S: Into<String>>(command: S, source: io::Error) -> Self {
        FetchError::CommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FetchError::Parse(msg.into())
    }
}

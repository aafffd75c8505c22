//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use devscan_core::{ConfigError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime core error.
    #[error("{0}")]
    Core(String),

    /// Argument error (e.g. a malformed device identifier).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDeviceId(_) => Self::Arguments(err.to_string()),
            CoreError::DuplicateBackend(_) => Self::Config(err.to_string()),
            CoreError::DeviceNotFound(_) | CoreError::PropertyNotFound { .. } => {
                Self::Core(err.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(format!("JSON encoding failed: {err}"))
    }
}

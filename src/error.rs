//! Error types for the git CLI
//!
//! Provides structured error handling with context and proper error chains.

use crate::exitcode;
use thiserror::Error;

/// Main error type for the git CLI
#[derive(Error, Debug)]
pub enum GitCliError {
    /// A required argument for the selected command was missing or empty
    #[error("missing required argument: {parameter}")]
    Argument { parameter: String },

    /// The git binary could not be found or started
    #[error("failed to launch '{binary}': {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The git process was killed or terminated abnormally
    #[error("'{binary}' terminated abnormally{}", signal.map(|s| format!(" (signal {s})")).unwrap_or_default())]
    Terminated { binary: String, signal: Option<i32> },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl GitCliError {
    /// Create a new missing-argument error
    pub fn argument(parameter: impl Into<String>) -> Self {
        Self::Argument {
            parameter: parameter.into(),
        }
    }

    /// Create a new launch error
    pub fn launch(binary: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            binary: binary.into(),
            source,
        }
    }

    /// Create a new abnormal-termination error
    pub fn terminated(binary: impl Into<String>, signal: Option<i32>) -> Self {
        Self::Terminated {
            binary: binary.into(),
            signal,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Exit code this error maps to when it ends an invocation
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument { .. } => exitcode::USAGE,
            Self::Launch { .. } => exitcode::UNAVAILABLE,
            // Shell convention for signal deaths; SOFTWARE when the
            // platform reports no signal.
            Self::Terminated { signal, .. } => signal.map_or(exitcode::SOFTWARE, |s| 128 + s),
            Self::Config { .. } => exitcode::CONFIG,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GitCliError>;

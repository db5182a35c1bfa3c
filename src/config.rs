//! Configuration management for the git CLI
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::GitCliError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// External git tool configuration
    pub git: GitConfig,
}

/// External git tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Name or path of the git binary to invoke. Resolved through the
    /// platform's executable search path when not absolute.
    pub binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            git: GitConfig::default(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, GitCliError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GitCliError> {
        if self.git.binary.trim().is_empty() {
            return Err(GitCliError::config("git binary name must not be empty"));
        }

        Ok(())
    }
}

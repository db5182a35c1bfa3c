//! # Git CLI
//!
//! A custom CLI front end for everyday Git operations. This library
//! translates a small, closed set of subcommands into invocations of the
//! external `git` executable, forwarding user-supplied arguments verbatim
//! and relaying the tool's exit status and console output.
//!
//! ## Features
//!
//! - Exhaustive command-to-invocation mapping with pre-spawn validation
//! - Exactly one child process per command, inheriting the caller's streams
//! - Exact exit-code pass-through from the external tool
//! - Professional error handling and logging
//!
//! ## Example
//!
//! ```no_run
//! use gitcli::{cli::Command, config::Config, core::Dispatcher};
//!
//! let dispatcher = Dispatcher::new(Config::default());
//! let code = dispatcher.dispatch(&Command::Status)?;
//! println!("git exited with {code}");
//! # Ok::<(), gitcli::error::GitCliError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod exitcode;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

//! Command implementations for the CLI

use crate::{
    cli::{Args, Command},
    config::Config,
    core::Dispatcher,
    error::Result,
    exitcode,
};
use clap::CommandFactory;
use tracing::instrument;

/// Execute the appropriate command based on CLI arguments.
///
/// Returns the exit code the process should terminate with: the external
/// tool's own code for dispatched commands, or `OK` after printing usage
/// when no subcommand was given.
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: Option<&Command>) -> Result<i32> {
    match command {
        Some(command) => {
            let dispatcher = Dispatcher::new(config.clone());
            dispatcher.dispatch(command)
        }
        None => {
            print_usage();
            Ok(exitcode::OK)
        }
    }
}

/// Print the overall usage text, as if `--help` had been passed
fn print_usage() {
    let mut cmd = Args::command();
    // Writing help can only fail on a closed stdout; nothing to do then.
    let _ = cmd.print_long_help();
}

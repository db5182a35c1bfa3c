//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};

/// A custom CLI for Git operations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "gitcli")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Git repository
    Init,

    /// Show the working tree status
    Status,

    /// Add file contents to the index
    Add {
        /// Files to add
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Record changes to the repository
    Commit {
        /// Commit message
        #[arg(short = 'm', long = "message")]
        message: String,
    },

    /// Update remote refs along with associated objects
    Push {
        /// Name of the remote to push to
        remote: String,

        /// Branch to push to
        branch: String,
    },

    /// Fetch from and integrate with another repository
    Pull {
        /// Name of the remote to pull from
        remote: String,

        /// Branch to pull from
        branch: String,
    },

    /// Join two or more development histories together
    Merge {
        /// Branch to merge into the current branch
        branch: String,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

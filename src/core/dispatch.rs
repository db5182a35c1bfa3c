//! Command dispatch
//!
//! Maps a parsed command onto the exact argument vector for the external
//! git tool and runs it, relaying the tool's exit status.

use crate::{
    cli::Command,
    config::Config,
    error::{GitCliError, Result},
    utils::process::ProcessRunner,
};
use tracing::{debug, instrument};

/// Dispatcher that turns parsed commands into git invocations
pub struct Dispatcher {
    config: Config,
    process_runner: ProcessRunner,
}

impl Dispatcher {
    /// Create a new dispatcher with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Run the given command against the external git tool and return the
    /// tool's exit code.
    ///
    /// Spawns exactly one child process. A non-zero exit from git is not an
    /// error here; the code is handed back to the caller untouched.
    #[instrument(skip(self))]
    pub fn dispatch(&self, command: &Command) -> Result<i32> {
        let argv = argument_vector(&self.config.git.binary, command)?;
        debug!("Dispatching: {:?}", argv);
        self.process_runner.run_passthrough(&argv)
    }
}

/// Build the argument vector for a command.
///
/// Pure function of the binary name and the command: no process is spawned
/// and no state is consulted. The first element is always the binary name;
/// the rest follow git's positional grammar (remote before branch for
/// push/pull).
pub fn argument_vector(binary: &str, command: &Command) -> Result<Vec<String>> {
    let mut argv = vec![binary.to_string()];

    match command {
        Command::Init => argv.push("init".to_string()),
        Command::Status => argv.push("status".to_string()),
        Command::Add { files } => {
            if files.is_empty() {
                return Err(GitCliError::argument("files"));
            }
            for file in files {
                require_value("files", file)?;
            }
            argv.push("add".to_string());
            argv.extend(files.iter().cloned());
        }
        Command::Commit { message } => {
            require_value("message", message)?;
            argv.push("commit".to_string());
            argv.push("-m".to_string());
            argv.push(message.clone());
        }
        Command::Push { remote, branch } => {
            require_value("remote", remote)?;
            require_value("branch", branch)?;
            argv.push("push".to_string());
            argv.push(remote.clone());
            argv.push(branch.clone());
        }
        Command::Pull { remote, branch } => {
            require_value("remote", remote)?;
            require_value("branch", branch)?;
            argv.push("pull".to_string());
            argv.push(remote.clone());
            argv.push(branch.clone());
        }
        Command::Merge { branch } => {
            require_value("branch", branch)?;
            argv.push("merge".to_string());
            argv.push(branch.clone());
        }
    }

    Ok(argv)
}

/// Reject empty or whitespace-only values before anything is spawned
fn require_value(parameter: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GitCliError::argument(parameter));
    }
    Ok(())
}

//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.

use crate::error::{GitCliError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run an argument vector with inherited standard streams and return
    /// the child's exit code.
    ///
    /// The first element of `argv` is the binary to launch; the rest are
    /// passed through verbatim. Output is not captured. A non-zero exit is
    /// returned as-is; only launch failures and abnormal termination are
    /// errors.
    #[instrument(skip(self))]
    pub fn run_passthrough(&self, argv: &[String]) -> Result<i32> {
        let (binary, args) = argv
            .split_first()
            .ok_or_else(|| GitCliError::argument("command"))?;

        let cmd_str = argv.join(" ");
        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(binary)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GitCliError::launch(binary.clone(), e))?;

        match status.code() {
            Some(code) => {
                debug!("Command exited with code {}", code);
                Ok(code)
            }
            None => Err(GitCliError::terminated(binary.clone(), exit_signal(&status))),
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(unix)]
fn exit_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_run_successful_command() {
        let runner = ProcessRunner::new(false);
        let code = runner.run_passthrough(&argv(&["true"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_nonzero_exit_is_passed_through() {
        let runner = ProcessRunner::new(false);
        let code = runner.run_passthrough(&argv(&["false"])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_exact_exit_code_is_preserved() {
        let runner = ProcessRunner::new(false);
        let code = runner
            .run_passthrough(&argv(&["sh", "-c", "exit 42"]))
            .unwrap();
        assert_eq!(code, 42);
    }

    #[test]
    fn test_missing_binary_is_launch_error() {
        let runner = ProcessRunner::new(false);
        let err = runner
            .run_passthrough(&argv(&["nonexistent_command_12345"]))
            .unwrap_err();
        assert!(matches!(err, GitCliError::Launch { .. }));
    }

    #[test]
    fn test_empty_vector_is_rejected() {
        let runner = ProcessRunner::new(false);
        assert!(runner.run_passthrough(&[]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_death_is_terminated_error() {
        let runner = ProcessRunner::new(false);
        let err = runner
            .run_passthrough(&argv(&["sh", "-c", "kill -9 $$"]))
            .unwrap_err();
        match err {
            GitCliError::Terminated { signal, .. } => assert_eq!(signal, Some(9)),
            other => panic!("Expected Terminated error, got {other:?}"),
        }
    }
}

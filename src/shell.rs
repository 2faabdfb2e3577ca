//! Arbitrary shell execution.
//!
//! Everything the model returns ends up here and runs with the full
//! privileges of this process: no sandbox, no timeout, no confirmation.
//! Stdin is inherited so interactive commands can still prompt the user.
//! [`CommandRunner`] is the only path to the shell, so any such guard
//! belongs behind that trait.

use std::process::{Command, Stdio};

/// Captured result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Standard error, or the spawn error if the shell never started
    pub stderr: String,
    /// Exit code; None if the shell could not be spawned or was killed by a signal
    pub status: Option<i32>,
}

impl ExecutionOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Capability to execute one line of shell
pub trait CommandRunner {
    /// Run `command` to completion. Never fails: a command that cannot run
    /// is reported through the returned output, not as an error.
    fn run(&self, command: &str) -> ExecutionOutput;
}

/// Runs commands through `<shell> -c <command>`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SHELL)
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> ExecutionOutput {
        let result = Command::new(&self.shell)
            .args(["-c", command])
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match result {
            Ok(output) => ExecutionOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                status: output.status.code(),
            },
            Err(e) => ExecutionOutput {
                stdout: String::new(),
                stderr: format!("failed to run shell '{}': {}", self.shell, e),
                status: None,
            },
        }
    }
}

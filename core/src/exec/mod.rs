//! Process execution for built command lines.
//!
//! Commands are handed to a [`CommandRunner`]; the [`ExitPolicy`] decides
//! whether a failed or unlaunchable command stops the caller or is only
//! logged.

mod recording;
mod shell;

pub use recording::{DryRunner, RecordingRunner};
pub use shell::ShellRunner;

use thiserror::Error;
use tracing::{error, warn};

use crate::command::TokenSequence;

/// Errors that can occur while running an external command.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type for command execution.
pub type ExecResult<T> = Result<T, ExecError>;

/// How a finished command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub code: Option<i32>,
}

impl RunOutcome {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one command line synchronously.
pub trait CommandRunner {
    /// Run `command` to completion. An `Err` means it could not be launched.
    fn run(&mut self, command: &TokenSequence) -> ExecResult<RunOutcome>;
}

/// What to do when a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Log the failure and carry on.
    #[default]
    Lenient,
    /// Stop at the first failure.
    Strict,
}

/// Run `command` and apply `policy` to its outcome.
///
/// Under [`ExitPolicy::Lenient`] this never returns an error.
pub fn execute<R>(
    runner: &mut R,
    command: &TokenSequence,
    policy: ExitPolicy,
) -> ExecResult<RunOutcome>
where
    R: CommandRunner + ?Sized,
{
    match runner.run(command) {
        Ok(outcome) if outcome.is_success() => Ok(outcome),
        Ok(outcome) => match policy {
            ExitPolicy::Strict => Err(ExecError::Failed {
                command: command.join(),
                code: outcome.code,
            }),
            ExitPolicy::Lenient => {
                warn!(code = ?outcome.code, "Command failed: {}", command.program());
                Ok(outcome)
            }
        },
        Err(e) => match policy {
            ExitPolicy::Strict => Err(e),
            ExitPolicy::Lenient => {
                error!("{}", e);
                Ok(RunOutcome { code: None })
            }
        },
    }
}

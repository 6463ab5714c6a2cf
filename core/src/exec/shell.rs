use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::{CommandRunner, ExecError, ExecResult, RunOutcome};
use crate::command::TokenSequence;

/// Hands the joined command line to the platform shell and waits for it.
///
/// Standard streams are inherited, so the tool's own output reaches the terminal.
#[derive(Debug, Default, Clone)]
pub struct ShellRunner {
    working_dir: Option<PathBuf>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands from `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    fn shell(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &TokenSequence) -> ExecResult<RunOutcome> {
        let line = command.join();
        debug!("Running: {}", line);

        let mut cmd = Self::shell(&line);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| ExecError::Spawn {
            command: line,
            source,
        })?;

        Ok(RunOutcome {
            code: status.code(),
        })
    }
}

use super::{CommandRunner, ExecResult, RunOutcome};
use crate::command::TokenSequence;

/// Records command lines instead of running them.
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    commands: Vec<String>,
    exit_code: i32,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded command reports `code` as its exit status.
    pub fn failing(code: i32) -> Self {
        Self {
            commands: Vec::new(),
            exit_code: code,
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &TokenSequence) -> ExecResult<RunOutcome> {
        self.commands.push(command.join());
        Ok(RunOutcome {
            code: Some(self.exit_code),
        })
    }
}

/// Prints each command line to stdout and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunner;

impl CommandRunner for DryRunner {
    fn run(&mut self, command: &TokenSequence) -> ExecResult<RunOutcome> {
        println!("{}", command);
        Ok(RunOutcome::success())
    }
}

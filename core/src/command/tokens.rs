use std::fmt;

use serde::Serialize;

use super::ops::{FlagStyle, VdbOp};

/// Append-only command line: a program name followed by its flag strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    pub fn with(mut self, token: impl Into<String>) -> Self {
        self.push(token);
        self
    }

    pub fn push_op(&mut self, op: &VdbOp, style: &FlagStyle) -> &mut Self {
        self.push(op.to_flag(style))
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens after the program name.
    pub fn flag_count(&self) -> usize {
        self.tokens.len() - 1
    }

    /// The single space-joined command line handed to the shell.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

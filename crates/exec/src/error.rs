// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command files and task execution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors writing a command file to scratch storage.
#[derive(Debug, Error)]
pub enum CommandFileError {
    #[error("no commands to write")]
    Empty,

    #[error("failed to write command file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to make command file {} executable: {source}", path.display())]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors returned synchronously by `Runner::execute`, before any process starts.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("task for job `{job}` has no commands")]
    NoCommands { job: String },

    #[error("task already started with command file {}", path.display())]
    AlreadyStarted { path: PathBuf },

    #[error("failed to generate command file name: {0}")]
    Token(#[from] rand::Error),

    #[error(transparent)]
    CommandFile(#[from] CommandFileError),
}

/// Terminal failure of a running task, delivered on the result channel.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The script could not be started (missing, not executable, ...).
    #[error("failed to start {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The script ran and exited non-zero, or was killed by a signal.
    #[error("{}", exit_message(*code, stderr))]
    Failed { code: Option<i32>, stderr: String },

    #[error("failed waiting for {}: {source}", path.display())]
    Wait {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The background task went away without reporting (it panicked or the
    /// runtime shut down).
    #[error("execution ended without reporting a result")]
    Lost,
}

impl TaskError {
    /// Captured standard error, when the process ran far enough to produce it.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            TaskError::Failed { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }

    /// Exit code of the process, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            TaskError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn exit_message(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

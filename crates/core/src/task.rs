// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task: one unit of shell work attributed to a job and an owner.

use crate::id::TaskId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A list of shell command lines to run as a single script.
///
/// Created by the caller with no `id` and no `command_file`. The executor sets
/// `command_file` when it writes the script; a persistence layer may set `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub commands: Vec<String>,
    pub job: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_file: Option<PathBuf>,
}

impl Task {
    /// Create a task from its command lines, job name and owner name.
    pub fn new<I, S>(commands: I, job: impl Into<String>, owner: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            commands: commands.into_iter().map(Into::into).collect(),
            job: job.into(),
            owner: owner.into(),
            command_file: None,
        }
    }

    /// Path of the generated script, once execution has started.
    pub fn command_file(&self) -> Option<&Path> {
        self.command_file.as_deref()
    }

    /// True once a command file has been written for this task.
    pub fn is_started(&self) -> bool {
        self.command_file.is_some()
    }
}

/// Binary summary of how a task's process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ExitClass {
    Success,
    Failure,
}

impl ExitClass {
    pub fn code(self) -> i32 {
        match self {
            ExitClass::Success => 0,
            ExitClass::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitClass::Success
    }
}

crate::simple_display! {
    ExitClass {
        Success => "success",
        Failure => "failure",
    }
}

impl From<ExitClass> for i32 {
    fn from(class: ExitClass) -> Self {
        class.code()
    }
}

/// An integer that is neither `0` nor `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid exit class {0}, expected 0 or 1")]
pub struct InvalidExitClass(pub i32);

impl TryFrom<i32> for ExitClass {
    type Error = InvalidExitClass;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ExitClass::Success),
            1 => Ok(ExitClass::Failure),
            other => Err(InvalidExitClass(other)),
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One captured line of a task's standard output.

use crate::id::LogMessageId;
use crate::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LogMessageId>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub job: String,
    pub owner: String,
}

impl LogMessage {
    /// Attribute a captured line to the task that produced it.
    pub fn for_task(task: &Task, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            message: message.into(),
            timestamp,
            job: task.job.clone(),
            owner: task.owner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "log_message_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod run;
pub mod script;

use clap::Args;
use conductor_core::Task;

/// Task identity and command lines shared by every subcommand.
#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Job the task belongs to
    #[arg(long)]
    pub job: String,

    /// Owner of the task
    #[arg(long)]
    pub owner: String,

    /// Command lines, one script line each
    #[arg(last = true, required = true, value_name = "CMD")]
    pub commands: Vec<String>,
}

impl TaskArgs {
    pub fn into_task(self) -> Task {
        Task::new(self.commands, self.job, self.owner)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

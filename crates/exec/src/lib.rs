// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! conductor-exec: runs a task's command lines as a script and streams its output
//!
//! ```ignore
//! let runner = Runner::new(RunnerConfig::from_env());
//! let mut task = Task::new(["echo hello"], "build", "alice");
//! let mut execution = runner.execute(&mut task)?;
//! while let Some(line) = execution.logs.recv().await {
//!     println!("{}", line.message);
//! }
//! ```

pub mod command_file;
pub mod config;
pub mod env;
pub mod error;
pub mod runner;
pub mod token;

#[cfg(test)]
mod test_support;

pub use config::{RunnerConfig, DEFAULT_LOG_CAPACITY};
pub use error::{CommandFileError, ExecuteError, TaskError};
pub use runner::{Completed, Execution, Runner};

/// `application` field on every structured log event.
pub(crate) const APPLICATION: &str = "conductor";
/// `component` field on every structured log event.
pub(crate) const COMPONENT: &str = "task";

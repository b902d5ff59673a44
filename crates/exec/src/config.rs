// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration, resolved once and immutable afterwards.

use std::path::PathBuf;

use crate::env;

/// Buffered log records per execution before the child is back-pressured.
pub const DEFAULT_LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Directory where command files are written and removed.
    pub scratch_dir: PathBuf,
    pub log_capacity: usize,
}

impl RunnerConfig {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }

    /// Read the scratch directory from the environment.
    pub fn from_env() -> Self {
        Self::new(env::scratch_dir())
    }

    conductor_core::setters! {
        into { scratch_dir: PathBuf }
        set { log_capacity: usize }
    }

    /// Capacity of the log channel; never zero.
    pub(crate) fn channel_capacity(&self) -> usize {
        self.log_capacity.max(1)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(env::DEFAULT_SCRATCH_DIR)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

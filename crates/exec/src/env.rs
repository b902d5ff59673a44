// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the exec crate.

use std::path::PathBuf;

/// Environment variable naming the directory for generated command files.
pub const SCRATCH_DIR_VAR: &str = "TEMP_DIR";

/// Used when `TEMP_DIR` is unset or empty.
pub const DEFAULT_SCRATCH_DIR: &str = "/tmp";

/// Resolve the scratch directory: TEMP_DIR > /tmp
pub fn scratch_dir() -> PathBuf {
    std::env::var(SCRATCH_DIR_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRATCH_DIR))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

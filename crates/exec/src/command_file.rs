// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command files: a task's command lines written out as an executable script.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use conductor_core::Task;

use crate::error::CommandFileError;
use crate::{APPLICATION, COMPONENT};

/// First line of every command file.
pub const SHEBANG: &str = "#!/bin/bash";

/// Extension appended to the base path.
pub const EXTENSION: &str = "sh";

/// Read/write/execute for everyone, so the script runs without an interpreter prefix.
const MODE: u32 = 0o777;

/// Path of the command file for a base path (`<base>.sh`).
pub fn script_path(base_path: &Path) -> PathBuf {
    let mut path = base_path.as_os_str().to_owned();
    path.push(".");
    path.push(EXTENSION);
    PathBuf::from(path)
}

/// Script text for a command list, led by exactly one bash shebang.
pub fn script_contents(commands: &[String]) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(commands.len() + 1);
    if commands.first().map(String::as_str) != Some(SHEBANG) {
        lines.push(SHEBANG);
    }
    lines.extend(commands.iter().map(String::as_str));
    lines.join("\n")
}

/// Write `commands` to `<base_path>.sh` and make it executable.
///
/// Returns the script path. Errors are not retried.
pub fn build(task: &Task, base_path: &Path, commands: &[String]) -> Result<PathBuf, CommandFileError> {
    if commands.is_empty() {
        return Err(CommandFileError::Empty);
    }

    let path = script_path(base_path);
    fs::write(&path, script_contents(commands)).map_err(|source| CommandFileError::Write {
        path: path.clone(),
        source,
    })?;
    // Explicit chmod: the create mode would be masked by the process umask.
    fs::set_permissions(&path, fs::Permissions::from_mode(MODE)).map_err(|source| {
        CommandFileError::Permissions {
            path: path.clone(),
            source,
        }
    })?;

    tracing::info!(
        application = APPLICATION,
        component = COMPONENT,
        job = %task.job,
        owner = %task.owner,
        path = %path.display(),
        "created command file"
    );
    Ok(path)
}

/// Delete a command file. Best effort: failures are logged, never returned.
pub fn remove(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::error!(
            application = APPLICATION,
            component = COMPONENT,
            path = %path.display(),
            error = %e,
            "unable to remove command file"
        );
    }
}

#[cfg(test)]
#[path = "command_file_tests.rs"]
mod tests;

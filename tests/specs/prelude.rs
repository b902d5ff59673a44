// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::OnceLock;

use tempfile::TempDir;

/// Path of the `conductor` binary next to the test executable, building it
/// first if this test run did not.
fn binary() -> &'static Path {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();
    BINARY.get_or_init(|| {
        let exe = std::env::current_exe().unwrap();
        // target/<profile>/deps/specs-<hash>
        let profile_dir = exe.parent().and_then(Path::parent).unwrap();
        let path = profile_dir.join("conductor");
        if !path.exists() {
            let status = std::process::Command::new(env!("CARGO"))
                .args(["build", "-p", "conductor", "--bin", "conductor"])
                .current_dir(env!("CARGO_MANIFEST_DIR"))
                .status()
                .unwrap();
            assert!(status.success(), "failed to build conductor");
        }
        path
    })
}

/// A `conductor` invocation with its own scratch directory as `TEMP_DIR`.
pub fn cli() -> Cli {
    let scratch = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::new(binary());
    cmd.env("TEMP_DIR", scratch.path()).env("RUST_LOG", "warn");
    Cli { cmd, scratch }
}

pub struct Cli {
    cmd: assert_cmd::Command,
    scratch: TempDir,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// `conductor run --job nightly --owner tester -- <commands>`
    pub fn run(self, commands: &[&str]) -> Self {
        self.task("run", commands)
    }

    /// `conductor script --job nightly --owner tester -- <commands>`
    pub fn script(self, commands: &[&str]) -> Self {
        self.task("script", commands)
    }

    fn task(self, subcommand: &str, commands: &[&str]) -> Self {
        self.args(&[subcommand, "--job", "nightly", "--owner", "tester", "--"])
            .args(commands)
    }

    pub fn passes(self) -> Run {
        self.exits(0)
    }

    /// Exit status 1: the failure exit class.
    pub fn fails(self) -> Run {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run {
            output,
            scratch: self.scratch,
        };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "stdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

/// A finished invocation. Keeps the scratch directory alive for inspection.
pub struct Run {
    output: Output,
    scratch: TempDir,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn scratch(&self) -> &Path {
        self.scratch.path()
    }

    /// Files left in the scratch directory.
    pub fn scratch_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.scratch.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        files.sort();
        files
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}

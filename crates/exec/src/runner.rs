// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task runner: writes a task's command file, runs it, and streams its output.
//!
//! `Runner::execute` returns immediately with an [`Execution`]. One background
//! task per execution owns the child process and reports through three
//! independent channels:
//!
//! - `logs`: one [`LogMessage`] per stdout line, bounded; closes at exit
//! - `result`: exactly one `Ok(())` or [`TaskError`]
//! - `exit_code`: exactly one [`ExitClass`]
//!
//! On success the command file is deleted. On failure it is kept for
//! inspection.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use conductor_core::{Clock, ExitClass, LogMessage, SystemClock, Task};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tokio::sync::{mpsc, oneshot};

use crate::command_file;
use crate::config::RunnerConfig;
use crate::error::{ExecuteError, TaskError};
use crate::token::{random_token, TOKEN_BYTES};
use crate::{APPLICATION, COMPONENT};

/// `ETXTBSY` (26 on Linux and macOS): another thread forked while the script
/// was still open for writing.
const TEXT_FILE_BUSY: i32 = 26;
const SPAWN_ATTEMPTS: u32 = 5;
const SPAWN_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Runs tasks as scripts in the configured scratch directory.
#[derive(Debug, Clone)]
pub struct Runner<C: Clock = SystemClock> {
    config: RunnerConfig,
    clock: C,
}

impl Runner<SystemClock> {
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Runner<C> {
    /// Create a runner that stamps log records with `clock`.
    pub fn with_clock(config: RunnerConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Write the task's command file without running it.
    ///
    /// Sets and returns `task.command_file`. Fails if the task has no
    /// commands, already has a command file, or the file cannot be written.
    pub fn prepare(&self, task: &mut Task) -> Result<PathBuf, ExecuteError> {
        if task.commands.is_empty() {
            return Err(ExecuteError::NoCommands {
                job: task.job.clone(),
            });
        }
        if let Some(path) = &task.command_file {
            return Err(ExecuteError::AlreadyStarted { path: path.clone() });
        }

        let base_path = self.config.scratch_dir.join(random_token(TOKEN_BYTES)?);
        let script = command_file::build(task, &base_path, &task.commands)?;
        task.command_file = Some(script.clone());
        Ok(script)
    }

    /// Write the task's command file and start running it.
    ///
    /// Must be called from within a Tokio runtime. Fails without starting
    /// anything under the same conditions as [`Runner::prepare`].
    pub fn execute(&self, task: &mut Task) -> Result<Execution, ExecuteError> {
        let script = self.prepare(task)?;

        let (log_tx, log_rx) = mpsc::channel(self.config.channel_capacity());
        let (result_tx, result_rx) = oneshot::channel();
        let (exit_tx, exit_rx) = oneshot::channel();

        let run = Run {
            task: task.clone(),
            script,
            clock: self.clock.clone(),
        };
        tokio::spawn(run.supervise(log_tx, result_tx, exit_tx));

        Ok(Execution {
            logs: log_rx,
            result: result_rx,
            exit_code: exit_rx,
        })
    }
}

/// Result streams of one execution.
///
/// The streams end independently: a consumer must not assume the log stream
/// closes before the result is observable.
#[derive(Debug)]
pub struct Execution {
    pub logs: mpsc::Receiver<LogMessage>,
    pub result: oneshot::Receiver<Result<(), TaskError>>,
    pub exit_code: oneshot::Receiver<ExitClass>,
}

/// Everything an execution reported, gathered by [`Execution::collect`].
#[derive(Debug)]
pub struct Completed {
    pub logs: Vec<LogMessage>,
    pub result: Result<(), TaskError>,
    pub exit_class: ExitClass,
}

impl Execution {
    /// Drain the log stream, then wait for the result and exit class.
    pub async fn collect(mut self) -> Completed {
        let mut logs = Vec::new();
        while let Some(msg) = self.logs.recv().await {
            logs.push(msg);
        }
        let result = self.result.await.unwrap_or(Err(TaskError::Lost));
        let exit_class = self.exit_code.await.unwrap_or(ExitClass::Failure);
        Completed {
            logs,
            result,
            exit_class,
        }
    }
}

/// State owned by the background task of one execution.
struct Run<C> {
    task: Task,
    script: PathBuf,
    clock: C,
}

impl<C: Clock> Run<C> {
    /// Run the script to completion and report exactly one outcome.
    ///
    /// Send errors are ignored: the consumer may have dropped a receiver.
    async fn supervise(
        self,
        logs: mpsc::Sender<LogMessage>,
        result: oneshot::Sender<Result<(), TaskError>>,
        exit_code: oneshot::Sender<ExitClass>,
    ) {
        match self.run(&logs).await {
            Ok(()) => {
                let _ = exit_code.send(ExitClass::Success);
                let _ = result.send(Ok(()));
                drop(logs);
                command_file::remove(&self.script);
            }
            Err(err) => {
                let _ = exit_code.send(ExitClass::Failure);
                tracing::info!(
                    application = APPLICATION,
                    component = COMPONENT,
                    job = %self.task.job,
                    owner = %self.task.owner,
                    path = %self.script.display(),
                    err = %err,
                    "command failed"
                );
                drop(logs);
                let _ = result.send(Err(err));
            }
        }
    }

    async fn run(&self, logs: &mpsc::Sender<LogMessage>) -> Result<(), TaskError> {
        let mut child = spawn_script(&self.script).await?;

        // Drain stderr concurrently so a chatty child cannot block on a full pipe.
        let stderr_task = child.stderr.take().map(|stderr| tokio::spawn(read_all(stderr)));

        if let Some(stdout) = child.stdout.take() {
            self.stream_stdout(stdout, logs).await;
        }

        let status = child
            .wait()
            .await
            .map_err(|source| TaskError::Wait {
                path: self.script.clone(),
                source,
            })?;

        let stderr = match stderr_task {
            Some(handle) => handle.await.unwrap_or_default(),
            None => String::new(),
        };
        check_status(status, stderr)
    }

    /// Forward each stdout line as a log record until EOF.
    ///
    /// Blocks on a full channel. If the consumer hangs up, keeps reading so the
    /// child can still run to completion.
    async fn stream_stdout(&self, stdout: ChildStdout, logs: &mpsc::Sender<LogMessage>) {
        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        let mut forwarding = true;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    if !forwarding {
                        continue;
                    }
                    let line = trim_line_ending(&buf);
                    let msg = LogMessage::for_task(
                        &self.task,
                        String::from_utf8_lossy(line),
                        self.clock.now(),
                    );
                    if logs.send(msg).await.is_err() {
                        forwarding = false;
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        application = APPLICATION,
                        component = COMPONENT,
                        job = %self.task.job,
                        owner = %self.task.owner,
                        error = %e,
                        "failed to read command output"
                    );
                    break;
                }
            }
        }
    }
}

async fn spawn_script(script: &Path) -> Result<Child, TaskError> {
    let mut attempt = 1;
    loop {
        let spawned = Command::new(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        match spawned {
            Ok(child) => return Ok(child),
            Err(e) if e.raw_os_error() == Some(TEXT_FILE_BUSY) && attempt < SPAWN_ATTEMPTS => {
                attempt += 1;
                tokio::time::sleep(SPAWN_RETRY_DELAY).await;
            }
            Err(source) => {
                return Err(TaskError::Spawn {
                    path: script.to_path_buf(),
                    source,
                })
            }
        }
    }
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> String {
    let mut buf = Vec::new();
    // Partial output is still useful in an error message.
    let _ = reader.read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).trim().to_string()
}

fn check_status(status: ExitStatus, stderr: String) -> Result<(), TaskError> {
    if status.success() {
        Ok(())
    } else {
        Err(TaskError::Failed {
            code: status.code(),
            stderr,
        })
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
